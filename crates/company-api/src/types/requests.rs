//! Request DTOs for the API.

use serde::Deserialize;

/// Create company request.
///
/// Unknown fields are ignored so clients may post a whole company object.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyRequest {
    /// Company name.
    pub name: String,
}

/// Rename company request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyRequest {
    /// New company name.
    pub name: String,
}

/// Add employee request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Employee name.
    pub name: String,
    /// Optional salary.
    pub salary: Option<i64>,
}

/// Company list query parameters.
///
/// Both or neither must be given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListQuery {
    /// Items per page.
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
    /// 1-based page number.
    #[serde(alias = "page_index")]
    pub page_index: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_company_request_deserialize() {
        let json = r#"{"name": "BlueSky Digital Media"}"#;
        let req: CreateCompanyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "BlueSky Digital Media");
    }

    #[test]
    fn test_create_company_request_ignores_extra_fields() {
        let json = r#"{"id": null, "name": "Acme", "employees": []}"#;
        let req: CreateCompanyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Acme");
    }

    #[test]
    fn test_create_company_request_requires_name() {
        let json = r#"{"unknownField": "BlueSky Digital Media"}"#;
        assert!(serde_json::from_str::<CreateCompanyRequest>(json).is_err());
    }

    #[test]
    fn test_create_employee_request_optional_salary() {
        let req: CreateEmployeeRequest = serde_json::from_str(r#"{"name": "Erika"}"#).unwrap();
        assert_eq!(req.name, "Erika");
        assert!(req.salary.is_none());

        let req: CreateEmployeeRequest =
            serde_json::from_str(r#"{"name": "Erika", "salary": 5000}"#).unwrap();
        assert_eq!(req.salary, Some(5000));
    }

    #[test]
    fn test_company_list_query_defaults() {
        let query = CompanyListQuery::default();
        assert!(query.page_size.is_none());
        assert!(query.page_index.is_none());
    }

    #[test]
    fn test_company_list_query_camel_case() {
        let query: CompanyListQuery =
            serde_json::from_str(r#"{"pageSize": 2, "pageIndex": 1}"#).unwrap();
        assert_eq!(query.page_size, Some(2));
        assert_eq!(query.page_index, Some(1));
    }
}
