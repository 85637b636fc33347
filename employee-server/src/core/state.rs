use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, DatabaseEngine, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, EmployeeStore};

/// 服务器状态 - 每个请求共享的只读句柄
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。存储句柄由调用方显式构造后传入，
/// 不存在进程级全局连接。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | Arc<dyn EmployeeStore> | 员工存储 |
/// | started_at | Instant | 启动时间 (健康检查用) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工存储
    pub employees: Arc<dyn EmployeeStore>,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 使用已构造的存储创建状态
    pub fn new(config: Config, employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config,
            employees,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (仅 RocksDB 引擎)
    /// 2. 数据库连接与表/索引定义
    /// 3. 员工仓库
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.database_engine == DatabaseEngine::RocksDb {
            config
                .ensure_work_dir_structure()
                .map_err(ServerError::WorkDir)?;
        }

        let db = DbService::connect(config).await?;
        let repo = EmployeeRepository::new(db.db.clone()).with_read_retries(config.store_read_retries);

        Ok(Self::new(config.clone(), Arc::new(repo)))
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
