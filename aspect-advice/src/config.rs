//! 声明式通知配置
//!
//! 从 TOML 文件加载通知声明和日志配置，例如：
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "compact"
//!
//! [[advice]]
//! id = "audit"
//! kind = "before"
//! target = "UserService@save"
//! weaver = "AuditAspect@handle"
//! order = 5
//! ```

use crate::{AdviceError, AdviceKind, AdviceResult, LoggingConfig, DEFAULT_SORT_ORDER};
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_order() -> i32 {
    DEFAULT_SORT_ORDER
}

/// 单条通知声明
///
/// 配置中的织入器总是字符串引用
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdviceDeclaration {
    pub id: String,
    pub kind: AdviceKind,
    pub target: String,
    pub weaver: String,
    #[serde(default = "default_order")]
    pub order: i32,
}

/// 通知配置文件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    pub logging: LoggingConfig,
    pub advice: Vec<AdviceDeclaration>,
}

impl AdviceConfig {
    /// 从文件加载
    pub fn from_file(path: impl AsRef<Path>) -> AdviceResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AdviceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading advice config from {:?}", path);
        Self::from_toml_str(&content)
    }

    /// 从字符串解析
    pub fn from_toml_str(content: &str) -> AdviceResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
