//! Employee Repository

use async_trait::async_trait;
use shared::models::{EmployeeCreate, EmployeeUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, EmployeeStore, RepoError, RepoResult, retry_read};
use crate::db::models::{Employee, EmployeeContent};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
    read_retries: u32,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            read_retries: 0,
        }
    }

    /// Retry idempotent reads this many times on infrastructure errors
    pub fn with_read_retries(mut self, retries: u32) -> Self {
        self.read_retries = retries;
        self
    }

    fn thing(id: &str) -> RecordId {
        RecordId::from_table_key(TABLE, id.to_string())
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let emp: Option<Employee> = self.base.db().select(Self::thing(id)).await?;
        Ok(emp)
    }

    async fn list_all_once(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self.base.db().select(TABLE).await?;
        Ok(employees)
    }

    async fn find_by_email_once(&self, email: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let created: Option<Employee> = self
            .base
            .db()
            .create(TABLE)
            .content(EmployeeContent::from(data))
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    async fn list_all(&self) -> RepoResult<Vec<Employee>> {
        retry_read(self.read_retries, "employee.list_all", || self.list_all_once()).await
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        retry_read(self.read_retries, "employee.find_by_email", || {
            self.find_by_email_once(email)
        })
        .await
    }

    async fn update_by_id(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Option<Employee>> {
        // UPDATE never creates; probe first so a missing id is reported as None
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut data = data;
        if data.email.as_deref().is_some_and(str::is_empty) {
            // blank email: drop the field so the UNIQUE index ignores it
            data.email = None;
            self.base
                .db()
                .query("UPDATE $id UNSET email")
                .bind(("id", Self::thing(id)))
                .await?
                .check()?;
        }

        let updated: Option<Employee> = self.base.db().update(Self::thing(id)).merge(data).await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        let _: Option<Employee> = self.base.db().delete(Self::thing(id)).await?;
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        self.base.db().query("RETURN true").await?.check()?;
        Ok(())
    }
}
