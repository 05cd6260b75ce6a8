//! CompanyStore - the in-memory owner of all companies and employees.
//!
//! Concurrency follows a single-writer discipline:
//! - `RwLock<T>` guards the whole company sequence
//! - mutations take the write lock, so each is one atomic transition
//! - reads take the read lock and may run in parallel
//!
//! Callers only ever receive clones; nothing outside the store can reach
//! the inner sequences and bypass the uniqueness checks.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use company_models::{Company, CompanyId, Employee, EmployeeId};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::pagination::{paginate, Page};

/// Internal state of the store.
#[derive(Default)]
struct StoreState {
    /// Companies in insertion order.
    companies: Vec<Company>,
}

impl StoreState {
    fn find(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    fn find_mut(&mut self, id: &CompanyId) -> Option<&mut Company> {
        self.companies.iter_mut().find(|c| &c.id == id)
    }

    fn name_taken(&self, name: &str) -> bool {
        self.companies.iter().any(|c| c.name == name)
    }
}

/// Thread-safe registry of companies and their employees.
///
/// # Example
///
/// ```
/// use company_store::CompanyStore;
///
/// let store = CompanyStore::new();
/// let acme = store.create("Acme").unwrap();
/// store.add_employee(&acme.id, "Erika", Some(5000)).unwrap();
///
/// let loaded = store.get(&acme.id).unwrap();
/// assert_eq!(loaded.employees.len(), 1);
/// ```
#[derive(Default)]
pub struct CompanyStore {
    state: RwLock<StoreState>,
}

impl CompanyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    // Every mutation is a single Vec operation, so a poisoned lock still
    // guards a consistent value.
    fn read_recovering(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|e| {
            warn!("company store lock poisoned, recovering for read");
            PoisonError::into_inner(e)
        })
    }

    fn write_recovering(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|e| {
            warn!("company store lock poisoned, recovering for write");
            PoisonError::into_inner(e)
        })
    }

    /// Creates a company with a fresh ID and no employees.
    ///
    /// # Errors
    ///
    /// `DuplicateCompanyName` if any company already has exactly this name.
    pub fn create(&self, name: impl Into<String>) -> Result<Company> {
        let name = name.into();
        let mut state = self.write()?;

        if state.name_taken(&name) {
            return Err(StoreError::DuplicateCompanyName(name));
        }

        let company = Company::new(name);
        debug!(company_id = %company.id, name = %company.name, "company created");
        state.companies.push(company.clone());

        Ok(company)
    }

    /// Returns every company in insertion order.
    pub fn list(&self) -> Vec<Company> {
        self.read_recovering().companies.clone()
    }

    /// Returns one page of companies, or all of them when `page` is `None`.
    pub fn list_paged(&self, page: Option<Page>) -> Vec<Company> {
        match page {
            Some(page) => paginate(&self.read_recovering().companies, page),
            None => self.list(),
        }
    }

    /// Returns companies on the 1-based page `page_index` of size `page_size`.
    ///
    /// # Errors
    ///
    /// `InvalidPage` if either value is not positive. A page past the end
    /// is not an error; it is empty.
    pub fn get_page(&self, page_size: i64, page_index: i64) -> Result<Vec<Company>> {
        let page = Page::new(page_size, page_index)?;
        let state = self.read()?;
        Ok(paginate(&state.companies, page))
    }

    /// Gets a company by ID.
    pub fn get(&self, id: &CompanyId) -> Result<Company> {
        self.read()?
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::CompanyNotFound(id.clone()))
    }

    /// Renames a company, leaving its ID and employees untouched.
    ///
    /// # Errors
    ///
    /// - `CompanyNotFound` if no company has `id`
    /// - `DuplicateCompanyName` if a different company already has `new_name`
    pub fn update(&self, id: &CompanyId, new_name: impl Into<String>) -> Result<Company> {
        let new_name = new_name.into();
        let mut state = self.write()?;

        if state.find(id).is_none() {
            return Err(StoreError::CompanyNotFound(id.clone()));
        }
        if state
            .companies
            .iter()
            .any(|c| c.name == new_name && &c.id != id)
        {
            return Err(StoreError::DuplicateCompanyName(new_name));
        }

        let company = state
            .find_mut(id)
            .ok_or_else(|| StoreError::CompanyNotFound(id.clone()))?;
        debug!(company_id = %id, from = %company.name, to = %new_name, "company renamed");
        company.name = new_name;

        Ok(company.clone())
    }

    /// Removes every company and, with them, every employee.
    pub fn clear(&self) {
        let mut state = self.write_recovering();
        let removed = state.companies.len();
        state.companies.clear();
        debug!(removed, "company store cleared");
    }

    /// Lists the employees of a company in insertion order.
    pub fn list_employees(&self, company_id: &CompanyId) -> Result<Vec<Employee>> {
        self.read()?
            .find(company_id)
            .map(|c| c.employees.clone())
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.clone()))
    }

    /// Adds an employee to a company.
    ///
    /// # Errors
    ///
    /// - `CompanyNotFound` if no company has `company_id`
    /// - `DuplicateEmployeeName` if the company already employs someone
    ///   named `name`
    pub fn add_employee(
        &self,
        company_id: &CompanyId,
        name: impl Into<String>,
        salary: Option<i64>,
    ) -> Result<Employee> {
        let name = name.into();
        let mut state = self.write()?;

        let company = state
            .find_mut(company_id)
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.clone()))?;

        if company.has_employee_named(&name) {
            return Err(StoreError::DuplicateEmployeeName {
                company_id: company_id.clone(),
                name,
            });
        }

        let mut employee = Employee::new(name);
        employee.salary = salary;
        debug!(
            company_id = %company_id,
            employee_id = %employee.id,
            name = %employee.name,
            "employee added"
        );
        company.push_employee(employee.clone());

        Ok(employee)
    }

    /// Removes an employee from a company.
    ///
    /// # Errors
    ///
    /// - `CompanyNotFound` if no company has `company_id`
    /// - `EmployeeNotFound` if the company has no employee `employee_id`
    pub fn remove_employee(&self, company_id: &CompanyId, employee_id: &EmployeeId) -> Result<()> {
        let mut state = self.write()?;

        let company = state
            .find_mut(company_id)
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.clone()))?;

        company
            .remove_employee(employee_id)
            .ok_or_else(|| StoreError::EmployeeNotFound {
                company_id: company_id.clone(),
                employee_id: employee_id.clone(),
            })?;
        debug!(company_id = %company_id, employee_id = %employee_id, "employee removed");

        Ok(())
    }

    /// Returns the number of companies.
    pub fn len(&self) -> usize {
        self.read_recovering().companies.len()
    }

    /// Returns true if the store has no companies.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
