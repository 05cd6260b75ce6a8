//! API request handlers.

pub mod companies;
pub mod employees;
pub mod health;

pub use companies::*;
pub use employees::*;
pub use health::*;
