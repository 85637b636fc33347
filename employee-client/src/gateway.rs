//! Employee API gateway abstraction
//!
//! [`EmployeeBoard`](crate::EmployeeBoard) only talks to this trait, so it runs
//! the same against the network client, the in-process client or a test double.

use async_trait::async_trait;
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};

use crate::ClientResult;

/// Outcome of the advisory duplicate-email probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailAvailability {
    Available,
    Taken,
}

/// The five employee API operations
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// `GET /api/employees`
    async fn list(&self) -> ClientResult<Vec<EmployeeResponse>>;

    /// `POST /api/employees/check-email`; a 409 is reported as [`EmailAvailability::Taken`]
    async fn check_email(&self, email: &str) -> ClientResult<EmailAvailability>;

    /// `POST /api/employees`
    async fn create(&self, data: &EmployeeCreate) -> ClientResult<EmployeeResponse>;

    /// `PUT /api/employees/{id}`
    async fn update(&self, id: &str, data: &EmployeeUpdate) -> ClientResult<EmployeeResponse>;

    /// `DELETE /api/employees/{id}`
    async fn delete(&self, id: &str) -> ClientResult<()>;
}
