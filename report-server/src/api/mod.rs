//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`reservation`] - 客户预订报表接口

pub mod health;
pub mod reservation;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
