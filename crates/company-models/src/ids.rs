//! Type-safe ID wrappers for registry entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generates a string ID newtype whose fresh values are `<prefix>-<uuid>`.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random ID, unique for the life of the process.
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Wraps an existing string, e.g. a path segment from a request.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CompanyId, "comp");
define_id!(EmployeeId, "emp");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_company_id_prefix() {
        let id = CompanyId::new();
        assert!(id.as_str().starts_with("comp-"));
    }

    #[test]
    fn test_employee_id_prefix() {
        let id = EmployeeId::new();
        assert!(id.as_str().starts_with("emp-"));
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let ids: HashSet<CompanyId> = (0..1000).map(|_| CompanyId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_from_string() {
        let id = CompanyId::from_string("comp-custom-123");
        assert_eq!(id.as_str(), "comp-custom-123");
        assert_eq!(id, CompanyId::from("comp-custom-123"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = EmployeeId::from_string("emp-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"emp-test\"");

        let parsed: EmployeeId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = CompanyId::from_string("comp-42");
        assert_eq!(format!("{}", id), "comp-42");
    }
}
