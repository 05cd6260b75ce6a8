//! In-memory company registry.
//!
//! This crate provides the `CompanyStore`, which:
//! - Assigns unique IDs to companies and employees
//! - Enforces company name uniqueness across the store
//! - Enforces employee name uniqueness within each company
//! - Serves offset-based pages of companies
//!
//! The store is synchronous and holds no lock across calls, so it can be
//! shared as `Arc<CompanyStore>` between async handlers and threads.
//!
//! # Example
//!
//! ```
//! use company_store::{CompanyStore, StoreError};
//!
//! let store = CompanyStore::new();
//! for name in ["1", "2", "3", "4", "5"] {
//!     store.create(name).unwrap();
//! }
//!
//! let page = store.get_page(2, 2).unwrap();
//! let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["3", "4"]);
//!
//! assert!(matches!(store.create("1"), Err(StoreError::DuplicateCompanyName(_))));
//! ```

pub mod error;
pub mod pagination;
pub mod store;

pub use error::{ErrorKind, Result, StoreError};
pub use pagination::{paginate, Page};
pub use store::CompanyStore;
