//! 统一错误处理
//!
//! HTTP 层错误类型，响应体沿用前端已依赖的两种格式：
//!
//! | 分类 | 状态码 | 响应体 |
//! |------|--------|--------|
//! | 冲突 | 409 | `{"message": "..."}` |
//! | 不存在 | 404 | `{"error": "..."}` |
//! | 请求无效 | 400 | `{"error": "..."}` |
//! | 系统错误 | 500 | `{"error": "Internal server error"}` |
//!
//! # 使用示例
//!
//! ```ignore
//! let employee = state
//!     .employees
//!     .update_by_id(&id, patch)
//!     .await?
//!     .ok_or_else(|| AppError::not_found("Employee not found"))?;
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::{EMAIL_TAKEN, ErrorBody, INTERNAL_ERROR};
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400)
    Invalid(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::message(msg)),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::error(msg)),

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, ErrorBody::error(msg)),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::error(INTERNAL_ERROR))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            // 唯一索引只建在 email 上
            RepoError::Duplicate(_) => AppError::Conflict(EMAIL_TAKEN.to_string()),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}

/// Application-level Result type, used by every HTTP handler
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn duplicate_maps_to_conflict_message() {
        let err: AppError = RepoError::Duplicate("index employee_email".into()).into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({ "message": "Email already exists" }));
    }

    #[tokio::test]
    async fn not_found_uses_error_key() {
        let (status, body) = body_json(AppError::not_found("Employee not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Employee not found" }));
    }

    #[tokio::test]
    async fn infrastructure_errors_hide_details() {
        let err: AppError = RepoError::Database("rocksdb: IO error".into()).into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
