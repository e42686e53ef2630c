use std::path::PathBuf;

/// 服务器配置 - 报表服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时会先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_SOURCE | resources/reservations.json | 预订数据文件 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录, 设置后按天滚动写文件 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATA_SOURCE=/data/reservations.json HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 预订数据文件路径 (每次请求重新读取)
    pub data_source: PathBuf,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<PathBuf>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_source: std::env::var("DATA_SOURCE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_source()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用指定的数据文件覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_data_source(data_source: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_source = data_source.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 随 crate 一起发布的示例数据
fn default_data_source() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("reservations.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_source_overrides_path() {
        let config = Config::with_data_source("/tmp/fixture.json");
        assert_eq!(config.data_source, PathBuf::from("/tmp/fixture.json"));
    }

    #[test]
    fn test_default_data_source_ships_with_crate() {
        assert!(default_data_source().ends_with("resources/reservations.json"));
        assert!(default_data_source().is_file());
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = Config::with_data_source("x.json");
        config.environment = "production".into();
        assert!(config.is_production());
        config.environment = "development".into();
        assert!(!config.is_production());
    }
}
