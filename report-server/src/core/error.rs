use thiserror::Error;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    /// 绑定监听地址或运行 accept 循环时的 I/O 错误
    #[error("HTTP 服务运行失败: {0}")]
    Serve(#[source] std::io::Error),

    #[error("日志初始化失败: {0}")]
    Logger(anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
