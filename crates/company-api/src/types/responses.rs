//! Response DTOs for the API.

use serde::Serialize;

use company_models::{Company, Employee};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of companies currently registered.
    pub companies: usize,
}

/// Company representation returned by every company endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyResponse {
    /// Company ID.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Employees in insertion order.
    pub employees: Vec<EmployeeResponse>,
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.as_str().to_string(),
            name: company.name.clone(),
            employees: company.employees.iter().map(EmployeeResponse::from).collect(),
        }
    }
}

/// Employee representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeResponse {
    /// Employee ID.
    pub id: String,
    /// Employee name.
    pub name: String,
    /// Salary, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.as_str().to_string(),
            name: employee.name.clone(),
            salary: employee.salary,
        }
    }
}
