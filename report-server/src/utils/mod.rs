//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`time`] - 日期解析
//! - [`validation`] - 请求参数校验

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{ApiError, AppError, AppResult, ErrorCategory, ErrorCode};
