//! REST API for the company registry.
//!
//! This crate exposes the in-memory `CompanyStore` over HTTP:
//! - Company management (create, list with optional paging, get, rename, clear)
//! - Employee management (list, add, remove) scoped to one company
//! - Health check
//!
//! # Example
//!
//! ```no_run
//! use company_api::{ApiConfig, AppState, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone());
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
