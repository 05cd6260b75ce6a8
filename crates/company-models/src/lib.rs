//! Core data models for the company registry.
//!
//! This crate provides the entities shared by the store and the HTTP
//! layer: companies, the employees they own, and their identifiers.

pub mod company;
pub mod employee;
pub mod ids;

pub use company::Company;
pub use employee::Employee;
pub use ids::{CompanyId, EmployeeId};
