//! Database models
//!
//! Rows as stored in SurrealDB. Field names match the wire format so the
//! shared create/update payloads can be written as-is.

pub mod employee;

pub use employee::{Employee, EmployeeContent, EmployeeId};
