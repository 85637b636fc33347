// employee-client/src/oneshot.rs
// Oneshot HTTP 客户端 - 内存通信 (同进程)
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use shared::request::{CHECK_EMAIL_PATH, CheckEmailRequest, EMPLOYEES_PATH, employee_path};
use shared::response::{DeleteResponse, MessageResponse};
use tower::ServiceExt;

use crate::{ClientError, ClientResult, EmailAvailability, EmployeeGateway};

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 请求仍会经过完整的中间件栈，但没有网络开销。
///
/// # Example
///
/// ```ignore
/// let router = employee_server::build_app(state);
/// let client = OneshotHttpClient::new(router);
///
/// let employees = client.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    ///
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// 构建请求，body 为 None 时发送空 body
    fn build_request<B: Serialize>(
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Request<Body>> {
        let body = match body {
            Some(b) => Body::from(serde_json::to_vec(b)?),
            None => Body::empty(),
        };

        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    /// 执行请求并处理响应
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(ClientError::from_status(status, &body_bytes));
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    async fn call<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let request = Self::build_request(method, path, body)?;
        self.execute(request).await
    }
}

#[async_trait]
impl EmployeeGateway for OneshotHttpClient {
    async fn list(&self) -> ClientResult<Vec<EmployeeResponse>> {
        self.call::<_, ()>(Method::GET, EMPLOYEES_PATH, None).await
    }

    async fn check_email(&self, email: &str) -> ClientResult<EmailAvailability> {
        let body = CheckEmailRequest::new(email);
        match self
            .call::<MessageResponse, _>(Method::POST, CHECK_EMAIL_PATH, Some(&body))
            .await
        {
            Ok(_) => Ok(EmailAvailability::Available),
            Err(ClientError::Conflict(_)) => Ok(EmailAvailability::Taken),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<EmployeeResponse> {
        self.call(Method::POST, EMPLOYEES_PATH, Some(data)).await
    }

    async fn update(&self, id: &str, data: &EmployeeUpdate) -> ClientResult<EmployeeResponse> {
        self.call(Method::PUT, &employee_path(id), Some(data)).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let resp: DeleteResponse = self
            .call::<_, ()>(Method::DELETE, &employee_path(id), None)
            .await?;
        if resp.success {
            Ok(())
        } else {
            Err(ClientError::InvalidResponse("delete not acknowledged".to_string()))
        }
    }
}
