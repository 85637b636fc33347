//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 首页和健康检查
//! - [`employees`] - 员工管理接口
//!
//! [`build_app`] 组装全部路由和中间件，HTTP 服务器和进程内 oneshot
//! 调用使用同一个 Router。

pub mod convert;

pub mod employees;
pub mod health;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Config, ServerState};
use crate::middleware;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Employee API
        .merge(employees::router())
        // Home page + health - public routes
        .merge(health::router())
}

/// CORS: 配置了来源列表则只放行这些来源，否则全部放行
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::permissive().allow_origin(AllowOrigin::list(origins))
    }
}

/// Build a fully configured application with all middleware and state
///
/// This is used by both the HTTP server and oneshot calls
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        // ========== Tower HTTP Middleware ==========
        // Timeout - 408 when a handler exceeds REQUEST_TIMEOUT_MS
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        // CORS - Handle cross-origin requests
        .layer(cors_layer(&state.config))
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Request ID - Generate unique ID for each request (outermost)
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}
