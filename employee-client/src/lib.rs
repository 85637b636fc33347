//! Employee Client - Employee API 客户端与管理面板
//!
//! - [`HttpClient`] - 通过网络调用 employee-server
//! - [`OneshotHttpClient`] - 同进程内直接调用 Router (feature `in-process`)
//! - [`EmployeeBoard`] - 列表/搜索/编辑/删除的界面控制器，与具体界面无关
//! - [`tui`] - 基于 ratatui 的终端界面 (`employee-board` 可执行文件)

pub mod board;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;
pub mod tui;

pub use board::{Confirm, DeleteOutcome, EmployeeBoard, EmployeeDraft, Notice, PAGE_SIZE, SaveOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{EmailAvailability, EmployeeGateway};
pub use self::http::HttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

// Re-export shared types for convenience
pub use shared::models::{BloodGroup, EmployeeCreate, EmployeeResponse, EmployeeUpdate};
