//! Shared types for the employee records workspace
//!
//! Wire models used by both `employee-server` and `employee-client`:
//! request/response bodies, the employee model and date helpers.

pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use models::{BloodGroup, EmployeeCreate, EmployeeResponse, EmployeeUpdate};
pub use request::CheckEmailRequest;
pub use response::{DeleteResponse, ErrorBody, MessageResponse};
pub use serde::{Deserialize, Serialize};
