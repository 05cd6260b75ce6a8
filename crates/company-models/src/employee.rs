//! Employee type.

use serde::{Deserialize, Serialize};

use crate::ids::EmployeeId;

/// A person employed by exactly one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,

    /// Name of the employee, unique within the owning company.
    pub name: String,

    /// Optional salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

impl Employee {
    /// Creates a new employee with a fresh ID and no salary.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            salary: None,
        }
    }

    /// Sets the salary.
    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }
}
