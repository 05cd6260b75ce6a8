//! Error types for store operations.

use company_models::{CompanyId, EmployeeId};
use thiserror::Error;

/// Broad category of a [`StoreError`], used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally invalid input from the caller.
    Validation,
    /// A uniqueness rule would be violated.
    DuplicateName,
    /// A referenced company or employee does not exist.
    NotFound,
    /// The store itself is unusable.
    Internal,
}

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Page size or page index was not a positive integer.
    #[error("invalid page: {0}")]
    InvalidPage(String),

    /// Another company already has this name.
    #[error("duplicate company name: {0}")]
    DuplicateCompanyName(String),

    /// The company already has an employee with this name.
    #[error("duplicate employee name in company {company_id}: {name}")]
    DuplicateEmployeeName { company_id: CompanyId, name: String },

    /// Company not found.
    #[error("company not found: {0}")]
    CompanyNotFound(CompanyId),

    /// Employee not found in the addressed company.
    #[error("employee not found in company {company_id}: {employee_id}")]
    EmployeeNotFound {
        company_id: CompanyId,
        employee_id: EmployeeId,
    },

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidPage(_) => ErrorKind::Validation,
            StoreError::DuplicateCompanyName(_) | StoreError::DuplicateEmployeeName { .. } => {
                ErrorKind::DuplicateName
            }
            StoreError::CompanyNotFound(_) | StoreError::EmployeeNotFound { .. } => {
                ErrorKind::NotFound
            }
            StoreError::LockPoisoned(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
