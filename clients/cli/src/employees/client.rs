//! Employee API Client
//!
//! A reqwest client for the employee records endpoint.

use crate::consts::cli_consts::employee_fetching;
use crate::employees::error::FetchError;
use crate::employees::{EmployeeRecord, EmployeeSource, validate_batch};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("employee-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct EmployeeApiClient {
    client: Client,
    base_url: String,
}

impl EmployeeApiClient {
    /// Only the connect phase is bounded here; the loader owns the overall
    /// deadline so a slow response surfaces as `FetchError::Timeout`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(employee_fetching::connect_timeout())
                .build()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl EmployeeSource for EmployeeApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, FetchError> {
        let employees: Vec<EmployeeRecord> = self.get_request("employees").await?;
        validate_batch(&employees)?;
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> EmployeeApiClient {
        EmployeeApiClient::new(format!("{}/api/", server.uri())).unwrap()
    }

    #[test]
    fn test_build_url_joins_slashes() {
        let client = EmployeeApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(
            client.build_url("/employees"),
            "http://localhost:5000/api/employees"
        );
    }

    #[tokio::test]
    async fn test_fetch_employees_parses_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .and(header_exists("User-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "department": "Eng", "salary": 40000},
                {"id": 2, "department": "HR", "salary": 25000.5}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let employees = client_for(&server).fetch_employees().await.unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].department, "Eng");
        assert_eq!(employees[0].salary, 40_000.0);
        assert_eq!(employees[1].salary, 25_000.5);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_employees().await;

        match result {
            Err(FetchError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_object_payload_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"employees": []})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_employees().await;
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 1, "salary": 1000}])),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_employees().await;
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_negative_salary_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 7, "department": "Eng", "salary": -1}
            ])))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_employees().await;
        match result {
            Err(FetchError::MalformedResponse(msg)) => assert!(msg.contains("employee 7")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_salaries_summing_to_infinity_are_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "department": "Eng", "salary": 1e308},
                {"id": 2, "department": "Eng", "salary": 1e308}
            ])))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_employees().await;
        match result {
            Err(FetchError::MalformedResponse(msg)) => assert!(msg.contains("not finite")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }
}
