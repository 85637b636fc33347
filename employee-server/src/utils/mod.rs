//! 工具模块 - 错误类型与日志
//!
//! # 内容
//!
//! - [`AppError`] - HTTP 层错误类型
//! - [`AppResult`] - handler 返回类型
//! - [`logger`] - 日志初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};

