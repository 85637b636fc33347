//! Database Module
//!
//! Embedded SurrealDB connection and table/index definitions

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::{Config, DatabaseEngine, ServerError};
use repository::RepoResult;

/// Table and index definitions, safe to run on every start.
///
/// The UNIQUE index on `email` makes the store reject duplicates even when
/// two creates race past the advisory check-email probe. Records without an
/// email leave the field out; the index skips NONE, so they never collide.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
DEFINE INDEX IF NOT EXISTS employee_email ON employee FIELDS email UNIQUE;
"#;

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the engine selected by `config` and prepare the schema
    pub async fn connect(config: &Config) -> Result<Self, ServerError> {
        let db = match config.database_engine {
            DatabaseEngine::RocksDb => {
                let db_path = config.database_dir().join("employees.db");
                tracing::info!(path = %db_path.display(), "Opening RocksDB store");
                Surreal::new::<RocksDb>(db_path.as_path()).await
            }
            DatabaseEngine::Memory => {
                tracing::info!("Opening in-memory store");
                Surreal::new::<Mem>(()).await
            }
        }
        .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        Self::prepare(db, &config.database_namespace, &config.database_name)
            .await
            .map_err(Into::into)
    }

    /// Fresh in-memory database (tests and demos)
    pub async fn memory() -> RepoResult<Self> {
        let db = Surreal::new::<Mem>(()).await?;
        Self::prepare(db, "test", "test").await
    }

    async fn prepare(db: Surreal<Db>, namespace: &str, database: &str) -> RepoResult<Self> {
        db.use_ns(namespace.to_string())
            .use_db(database.to_string())
            .await?;
        db.query(SCHEMA).await?.check()?;

        tracing::info!(namespace, database, "Database connection established");
        Ok(Self { db })
    }
}
