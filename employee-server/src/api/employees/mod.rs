//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 员工列表 (附 employeeId) |
//! | /api/employees | POST | 新建员工 (201) |
//! | /api/employees/check-email | POST | 邮箱是否可用 |
//! | /api/employees/{id} | PUT | 部分更新 |
//! | /api/employees/{id} | DELETE | 删除 (幂等) |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};
use shared::request::{CHECK_EMAIL_PATH, EMPLOYEES_PATH};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(EMPLOYEES_PATH, get(handler::list).post(handler::create))
        .route(CHECK_EMAIL_PATH, post(handler::check_email))
        .route(
            "/api/employees/{id}",
            put(handler::update).delete(handler::delete),
        )
}
