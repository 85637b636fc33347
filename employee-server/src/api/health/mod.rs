//! 首页和健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 首页 JSON 字符串 |
//! | /health | GET | 健康检查 (含数据库探测) |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "database": "ok"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 首页和健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 数据库检查 (ok | error)
    database: &'static str,
}

/// 首页 (JSON 字符串)
pub async fn home() -> Json<&'static str> {
    Json("hello home page")
}

/// 健康检查
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.employees.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database probe failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        database,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use http::{HeaderMap, Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::api::build_app;
    use crate::core::{Config, ServerState};
    use crate::db::DbService;
    use crate::db::repository::EmployeeRepository;

    async fn get(uri: &str) -> (StatusCode, Vec<u8>, HeaderMap) {
        let db = DbService::memory().await.unwrap();
        let app = build_app(ServerState::new(
            Config::in_memory(),
            Arc::new(EmployeeRepository::new(db.db)),
        ));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
        (status, body, headers)
    }

    #[tokio::test]
    async fn home_page_is_json_string() {
        let (status, body, headers) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(body, br#""hello home page""#);
    }

    #[tokio::test]
    async fn health_reports_database_and_request_id() {
        let (status, body, headers) = get("/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

        // generated by SetRequestIdLayer, echoed by PropagateRequestIdLayer
        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }
}
