//! Reservation Report Server - 餐厅客户预订报表服务
//!
//! # 架构概述
//!
//! 单一报表接口: 读取预订数据文件, 按预订日期过滤, 按客户汇总
//! 到访次数与消费金额, 最后按报表类型 (basic / advanced / VIP) 输出。
//!
//! # 模块结构
//!
//! ```text
//! report-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── reporting/     # 加载 → 过滤 → 汇总 → 成形 → 排序
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装、中间件
//! └── utils/         # 日志、日期、参数校验
//! ```

pub mod api;
pub mod core;
pub mod reporting;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use reporting::{DateRange, ReportError, ReportService, ReservationLoader};
pub use services::build_router;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 `.env`, 读取配置, 初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )
    .map_err(ServerError::Logger)?;

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____                            __
   / __ \___  ____  ____  _________/ /_
  / /_/ / _ \/ __ \/ __ \/ ___/ __  __/
 / _, _/  __/ /_/ / /_/ / /  / /_/ /_
/_/ |_|\___/ .___/\____/_/   \__/\__/
          /_/
    "#
    );
}
