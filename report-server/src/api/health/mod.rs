//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 详细健康检查 (会完整解析一次数据文件) |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "data_source": "/srv/reservations.json",
//!   "data_source_readable": true
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// 简单健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据文件路径
    data_source: String,
    /// 数据文件是否可读
    data_source_readable: bool,
}

/// 详细健康检查响应
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 数据文件检查结果
    data_source: CheckResult,
}

/// 单项检查结果
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 延迟 (毫秒)
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    /// 记录数
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<usize>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok(latency_ms: u64, records: usize) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            records: Some(records),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            records: None,
            message: Some(message.into()),
        }
    }
}

/// 基础健康检查
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let loader = state.reports.loader();
    let readable = loader.is_readable().await;

    Json(HealthResponse {
        status: if readable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        data_source: loader.data_source().display().to_string(),
        data_source_readable: readable,
    })
}

/// 包含数据文件解析结果的详细健康检查
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let start = Instant::now();
    let check = match state.reports.all_reservations().await {
        Ok(reservations) => {
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            CheckResult::ok(latency_ms, reservations.len())
        }
        Err(e) => CheckResult::error(e.to_string()),
    };

    Json(DetailedHealthResponse {
        status: if check.status == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        data_source: check,
    })
}
