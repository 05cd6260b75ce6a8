//! Company type.
//!
//! A company owns its employees directly, so name uniqueness within a
//! company can be checked without touching any other company.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::ids::{CompanyId, EmployeeId};

/// A company and the employees it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: CompanyId,

    /// Name of the company.
    pub name: String,

    /// Employees in insertion order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Company {
    /// Creates a new company with a fresh ID and no employees.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CompanyId::new(),
            name: name.into(),
            employees: Vec::new(),
        }
    }

    /// Returns true if an employee with exactly this name exists.
    pub fn has_employee_named(&self, name: &str) -> bool {
        self.employees.iter().any(|e| e.name == name)
    }

    /// Appends an employee, keeping insertion order.
    pub fn push_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Removes and returns the employee with the given ID.
    ///
    /// Remaining employees keep their relative order.
    pub fn remove_employee(&mut self, id: &EmployeeId) -> Option<Employee> {
        let index = self.employees.iter().position(|e| &e.id == id)?;
        Some(self.employees.remove(index))
    }
}
