//! Employee handlers, always scoped to one company.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use company_models::{CompanyId, EmployeeId};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{CreateEmployeeRequest, EmployeeResponse};

/// GET /api/companies/:id/employees - List a company's employees.
pub async fn list_employees(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .store
        .list_employees(&CompanyId::from_string(company_id))?;
    Ok(Json(employees.iter().map(EmployeeResponse::from).collect()))
}

/// POST /api/companies/:id/employees - Add an employee to a company.
pub async fn add_employee(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    payload: std::result::Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>)> {
    let Json(req) = payload?;
    let company_id = CompanyId::from_string(company_id);
    let employee = state
        .store
        .add_employee(&company_id, req.name, req.salary)?;
    info!(
        company_id = %company_id,
        employee_id = %employee.id,
        "Employee added"
    );

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&employee))))
}

/// DELETE /api/companies/:id/employees/:employee_id - Remove an employee.
pub async fn remove_employee(
    State(state): State<AppState>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    let company_id = CompanyId::from_string(company_id);
    let employee_id = EmployeeId::from_string(employee_id);
    state.store.remove_employee(&company_id, &employee_id)?;
    info!(company_id = %company_id, employee_id = %employee_id, "Employee removed");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;

    fn make_test_state() -> AppState {
        AppState::new(ApiConfig::default())
    }

    fn employee_req(
        name: &str,
        salary: Option<i64>,
    ) -> std::result::Result<Json<CreateEmployeeRequest>, JsonRejection> {
        Ok(Json(CreateEmployeeRequest {
            name: name.to_string(),
            salary,
        }))
    }

    #[tokio::test]
    async fn test_add_and_list_employees() {
        let state = make_test_state();
        let company = state.store.create("Acme").unwrap();
        let id = company.id.as_str().to_string();

        let (status, employee) = add_employee(
            State(state.clone()),
            Path(id.clone()),
            employee_req("Erika", Some(5000)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(employee.name, "Erika");
        assert_eq!(employee.salary, Some(5000));

        let list = list_employees(State(state), Path(id)).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, employee.id);
    }

    #[tokio::test]
    async fn test_add_employee_unknown_company() {
        let state = make_test_state();
        let result = add_employee(
            State(state),
            Path("nonexistent".to_string()),
            employee_req("Erika", None),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_duplicate_employee() {
        let state = make_test_state();
        let company = state.store.create("Acme").unwrap();
        state.store.add_employee(&company.id, "Erika", None).unwrap();

        let result = add_employee(
            State(state),
            Path(company.id.as_str().to_string()),
            employee_req("Erika", None),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_remove_employee() {
        let state = make_test_state();
        let company = state.store.create("Acme").unwrap();
        let erika = state.store.add_employee(&company.id, "Erika", None).unwrap();
        let tom = state.store.add_employee(&company.id, "Tom", None).unwrap();

        let status = remove_employee(
            State(state.clone()),
            Path((
                company.id.as_str().to_string(),
                erika.id.as_str().to_string(),
            )),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let remaining = state.store.list_employees(&company.id).unwrap();
        assert_eq!(remaining, vec![tom]);
    }

    #[tokio::test]
    async fn test_remove_unknown_employee() {
        let state = make_test_state();
        let company = state.store.create("Acme").unwrap();

        let result = remove_employee(
            State(state),
            Path((company.id.as_str().to_string(), "emp-missing".to_string())),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
