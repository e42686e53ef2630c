use std::time::Instant;

use crate::core::Config;
use crate::reporting::{ReportService, ReservationLoader};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 报表流水线本身无状态，每次请求都会重新读取数据文件，
/// 所以 ServerState 只需要配置和一个 [`ReportService`]。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | reports | ReportService | 报表服务 |
/// | started_at | Instant | 启动时间 (用于计算运行时长) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 报表服务
    pub reports: ReportService,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 根据配置初始化服务器状态
    pub fn initialize(config: &Config) -> Self {
        let loader = ReservationLoader::new(config.data_source.clone());
        tracing::info!(data_source = %config.data_source.display(), "Reservation data source configured");

        Self {
            config: config.clone(),
            reports: ReportService::new(loader),
            started_at: Instant::now(),
        }
    }

    /// 自启动以来的秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
