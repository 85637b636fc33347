//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use shared::request::{CHECK_EMAIL_PATH, CheckEmailRequest, EMPLOYEES_PATH, employee_path};
use shared::response::{DeleteResponse, MessageResponse};

use crate::{ClientConfig, ClientError, ClientResult, EmailAvailability, EmployeeGateway};

/// HTTP client for making network requests to the employee server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete_request<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(ClientError::from_status(status, &body));
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl EmployeeGateway for HttpClient {
    async fn list(&self) -> ClientResult<Vec<EmployeeResponse>> {
        self.get(EMPLOYEES_PATH).await
    }

    async fn check_email(&self, email: &str) -> ClientResult<EmailAvailability> {
        match self
            .post::<MessageResponse, _>(CHECK_EMAIL_PATH, &CheckEmailRequest::new(email))
            .await
        {
            Ok(_) => Ok(EmailAvailability::Available),
            Err(ClientError::Conflict(_)) => Ok(EmailAvailability::Taken),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<EmployeeResponse> {
        self.post(EMPLOYEES_PATH, data).await
    }

    async fn update(&self, id: &str, data: &EmployeeUpdate) -> ClientResult<EmployeeResponse> {
        self.put(&employee_path(id), data).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let resp: DeleteResponse = self.delete_request(&employee_path(id)).await?;
        if resp.success {
            Ok(())
        } else {
            Err(ClientError::InvalidResponse("delete not acknowledged".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.url("/api/employees"), "http://localhost:3000/api/employees");
        assert_eq!(client.url("api/employees/x"), "http://localhost:3000/api/employees/x");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        // port 9 (discard) is closed on test machines
        let client = ClientConfig::new("http://127.0.0.1:9")
            .with_timeout(2)
            .build_http_client()
            .unwrap();
        let err = EmployeeGateway::list(&client).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
