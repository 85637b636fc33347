use std::path::PathBuf;
use std::time::Duration;

/// 存储引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    /// 嵌入式 RocksDB，数据落盘到 `WORK_DIR/database`
    RocksDb,
    /// 内存存储，进程退出即丢失 (测试用)
    Memory,
}

impl DatabaseEngine {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => DatabaseEngine::Memory,
            _ => DatabaseEngine::RocksDb,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DATABASE_ENGINE | rocksdb | rocksdb 或 memory |
/// | DATABASE_NAMESPACE | employees | SurrealDB namespace |
/// | DATABASE_NAME | employee_database | SurrealDB database |
/// | CORS_ORIGINS | (空，全部放行) | 允许的跨域来源，逗号分隔 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | STORE_READ_RETRIES | 2 | 只读查询失败后的重试次数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 是否输出 JSON 日志 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/employees HTTP_PORT=8080 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 存储引擎
    pub database_engine: DatabaseEngine,
    /// SurrealDB namespace
    pub database_namespace: String,
    /// SurrealDB database
    pub database_name: String,
    /// 允许的跨域来源 (为空时放行所有来源)
    pub cors_origins: Vec<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 只读查询的重试次数
    pub store_read_retries: u32,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            database_engine: std::env::var("DATABASE_ENGINE")
                .map(|v| DatabaseEngine::from_env_value(&v))
                .unwrap_or(DatabaseEngine::RocksDb),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "employees".into()),
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "employee_database".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            store_read_retries: std::env::var("STORE_READ_RETRIES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 内存数据库配置，常用于测试场景
    pub fn in_memory() -> Self {
        let mut config = Self::from_env();
        config.database_engine = DatabaseEngine::Memory;
        config.database_namespace = "test".into();
        config.database_name = "test".into();
        config
    }

    /// 使用自定义值覆盖部分配置
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" https://a.example , ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn engine_parsing_defaults_to_rocksdb() {
        assert_eq!(DatabaseEngine::from_env_value("MEMORY"), DatabaseEngine::Memory);
        assert_eq!(DatabaseEngine::from_env_value("rocksdb"), DatabaseEngine::RocksDb);
        assert_eq!(DatabaseEngine::from_env_value("anything"), DatabaseEngine::RocksDb);
    }

    #[test]
    fn in_memory_config_uses_memory_engine() {
        let config = Config::in_memory();
        assert_eq!(config.database_engine, DatabaseEngine::Memory);
        assert!(config.database_dir().ends_with("database"));
    }
}
