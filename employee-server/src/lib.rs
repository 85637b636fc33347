//! Employee Server - 员工档案管理后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (RocksDB / 内存)
//! - **HTTP API** (`api`): 员工增删改查、邮箱查重、健康检查
//! - **中间件** (`middleware`): 请求日志
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── utils/         # 错误类型、日志
//! └── db/            # 数据库层 (模型 + 仓库)
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerState};
pub use db::repository::{EmployeeRepository, EmployeeStore, RepoError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 启动前准备：加载 `.env`、创建工作目录、初始化日志
///
/// 返回加载好的配置。
pub fn setup_environment() -> std::io::Result<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    if config.database_engine == core::DatabaseEngine::RocksDb {
        config.ensure_work_dir_structure()?;
    }

    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        Some(config.logs_dir().as_path()),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}
