//! 错误定义
//!
//! 注册与查询本身从不失败：缺少方法名的目标被静默丢弃，未知目标返回空映射。
//! 只有解析通知类型、读取配置和初始化日志会返回错误。

use std::path::PathBuf;
use thiserror::Error;

/// 通知模块错误
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Unknown advice kind: '{0}' (expected before, around or after)")]
    UnknownAdviceKind(String),

    #[error("Failed to read advice config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse advice config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInitFailed(String),
}

pub type AdviceResult<T> = Result<T, AdviceError>;
