//! Repository Module
//!
//! Record Store access for SurrealDB tables.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use shared::models::{EmployeeCreate, EmployeeUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::Employee;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // UNIQUE index violations surface as "Database index `x` already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee Record Store contract
///
/// Handlers only see this trait; the SurrealDB implementation is injected
/// through `ServerState`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new record under a fresh id
    async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee>;

    /// Every record, in store-native order
    async fn list_all(&self) -> RepoResult<Vec<Employee>>;

    /// Exact-match lookup on `email`
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;

    /// Merge `data` into an existing record; `None` if the id does not exist
    async fn update_by_id(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Option<Employee>>;

    /// Remove the record if present (idempotent)
    async fn delete_by_id(&self, id: &str) -> RepoResult<()>;

    /// Cheap liveness probe
    async fn ping(&self) -> RepoResult<()>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Base delay between read retries (exponential backoff)
const READ_RETRY_BASE_DELAY_MS: u64 = 50;

/// Run an idempotent read, retrying infrastructure failures up to `retries` times.
///
/// Only `RepoError::Database` is retried; other errors are returned as-is.
pub async fn retry_read<T, F, Fut>(retries: u32, op: &'static str, mut read: F) -> RepoResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RepoResult<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match read().await {
            Ok(value) => return Ok(value),
            Err(RepoError::Database(msg)) if attempt < retries => {
                let delay_ms = READ_RETRY_BASE_DELAY_MS * 2u64.pow(attempt);
                attempt += 1;
                tracing::warn!(op, attempt, delay_ms, error = %msg, "Store read failed, retrying");
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
