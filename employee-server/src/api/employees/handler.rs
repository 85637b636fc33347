//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use shared::request::CheckEmailRequest;
use shared::response::{DeleteResponse, EMAIL_AVAILABLE, EMAIL_TAKEN, MessageResponse};

use crate::api::convert::with_display_ids;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// List all employees, numbered by position
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.list_all().await?;
    Ok(Json(with_display_ids(employees)))
}

/// Advisory duplicate-email probe
///
/// 409 when the email is taken. Create does not call this; the unique index
/// on `email` is what actually rejects duplicates.
pub async fn check_email(
    State(state): State<ServerState>,
    payload: Result<Json<CheckEmailRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(req) = payload?;
    match state.employees.find_by_email(&req.email).await? {
        Some(_) => Err(AppError::conflict(EMAIL_TAKEN)),
        None => Ok(Json(MessageResponse::new(EMAIL_AVAILABLE))),
    }
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let Json(payload) = payload?;
    let employee = state.employees.insert(payload).await?;

    tracing::info!(id = %employee.key(), "Employee created");
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update an employee (merge patch)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<EmployeeResponse>> {
    let Json(payload) = payload?;
    let employee = state
        .employees
        .update_by_id(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    tracing::info!(id = %id, "Employee updated");
    Ok(Json(employee.into()))
}

/// Delete an employee (unknown ids succeed too)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.employees.delete_by_id(&id).await?;

    tracing::info!(id = %id, "Employee deleted");
    Ok(Json(DeleteResponse::ok()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use http::{Method, Request};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::StatusCode;
    use crate::api::build_app;
    use crate::core::{Config, ServerState};
    use crate::db::DbService;
    use crate::db::models::Employee;
    use crate::db::repository::{EmployeeRepository, EmployeeStore, RepoError, RepoResult};
    use shared::models::{EmployeeCreate, EmployeeUpdate};

    async fn test_app() -> Router {
        let db = DbService::memory().await.unwrap();
        let state = ServerState::new(Config::in_memory(), Arc::new(EmployeeRepository::new(db.db)));
        build_app(state)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn create_returns_201_and_ignores_client_id() {
        let app = test_app().await;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({
                "_id": "client-chosen",
                "name": "Jaya",
                "email": "jaya@example.com",
                "address": "Chennai",
                "dateOfJoin": "2024-02-29T18:30:00.000Z",
                "bloodGroup": "O"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["_id"], "client-chosen");
        assert_eq!(body["dateOfJoin"], "2024-02-29");
        assert_eq!(body["bloodGroup"], "O");
        assert!(body.get("employeeId").is_none());
    }

    #[tokio::test]
    async fn list_attaches_display_ids_in_store_order() {
        let app = test_app().await;
        for i in 0..3 {
            let (status, _) = call(
                &app,
                Method::POST,
                "/api/employees",
                Some(json!({ "name": format!("e{i}"), "email": format!("e{i}@example.com") })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = call(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["employeeId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["0001", "0002", "0003"]);
        assert!(body[0]["dateOfJoin"].is_null());
        assert_eq!(body[0]["address"], "");
    }

    #[tokio::test]
    async fn check_email_reports_availability() {
        let app = test_app().await;
        let probe = json!({ "email": "jaya@example.com" });

        let (status, body) = call(&app, Method::POST, "/api/employees/check-email", Some(probe.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Email is available" }));

        call(&app, Method::POST, "/api/employees", Some(probe.clone())).await;

        let (status, body) = call(&app, Method::POST, "/api/employees/check-email", Some(probe)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "message": "Email already exists" }));
    }

    #[tokio::test]
    async fn duplicate_create_is_409() {
        let app = test_app().await;
        let body = json!({ "name": "A", "email": "dup@example.com" });

        let (status, _) = call(&app, Method::POST, "/api/employees", Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, resp) = call(&app, Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(resp, json!({ "message": "Email already exists" }));
    }

    #[tokio::test]
    async fn update_merges_and_404s_on_missing_id() {
        let app = test_app().await;
        let (_, created) = call(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "name": "Jaya", "email": "jaya@example.com", "address": "Old" })),
        )
        .await;
        let id = created["_id"].as_str().unwrap();

        let (status, updated) = call(
            &app,
            Method::PUT,
            &format!("/api/employees/{id}"),
            Some(json!({ "_id": "ignored", "address": "X" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["_id"], id);
        assert_eq!(updated["address"], "X");
        assert_eq!(updated["name"], "Jaya");

        let (status, body) = call(
            &app,
            Method::PUT,
            "/api/employees/doesnotexist",
            Some(json!({ "address": "X" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Employee not found" }));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let app = test_app().await;
        let (_, created) = call(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "email": "gone@example.com" })),
        )
        .await;
        let uri = format!("/api/employees/{}", created["_id"].as_str().unwrap());

        for _ in 0..2 {
            let (status, body) = call(&app, Method::DELETE, &uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "success": true }));
        }

        let (_, list) = call(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = test_app().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/employees")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "bloodGroup": "Z" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    /// Store whose every call fails like a dropped connection
    struct UnavailableStore;

    #[async_trait]
    impl EmployeeStore for UnavailableStore {
        async fn insert(&self, _: EmployeeCreate) -> RepoResult<Employee> {
            Err(RepoError::Database("connection refused".into()))
        }
        async fn list_all(&self) -> RepoResult<Vec<Employee>> {
            Err(RepoError::Database("connection refused".into()))
        }
        async fn find_by_email(&self, _: &str) -> RepoResult<Option<Employee>> {
            Err(RepoError::Database("connection refused".into()))
        }
        async fn update_by_id(&self, _: &str, _: EmployeeUpdate) -> RepoResult<Option<Employee>> {
            Err(RepoError::Database("connection refused".into()))
        }
        async fn delete_by_id(&self, _: &str) -> RepoResult<()> {
            Err(RepoError::Database("connection refused".into()))
        }
        async fn ping(&self) -> RepoResult<()> {
            Err(RepoError::Database("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn store_failure_is_500_without_details() {
        let app = build_app(ServerState::new(Config::in_memory(), Arc::new(UnavailableStore)));

        let (status, body) = call(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));

        let (status, _) = call(&app, Method::DELETE, "/api/employees/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
