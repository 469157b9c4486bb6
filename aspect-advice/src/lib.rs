//! Aspect Advice - 通知注册表
//!
//! 为 AOP 织入引擎记录连接点上的通知：
//! - 按 `Class@method` 目标登记前置（before）、环绕（around）、后置（after）通知
//! - 按类或方法查询已登记的通知
//! - 保存宿主应用提供的对象解析器
//! - 支持 TOML 声明式配置和通过 inventory 的编译时声明
//!
//! 注册表只负责记录，织入、代理和方法拦截由外部织入引擎完成。

pub mod advice;
pub mod config;
pub mod error;
pub mod joinpoint;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod submission;
pub mod target;

// 重新导出核心类型
pub use advice::{AdviceEntry, AdviceKind, Weaver, WeaverFn, DEFAULT_SORT_ORDER};
pub use config::{AdviceConfig, AdviceDeclaration};
pub use error::{AdviceError, AdviceResult};
pub use joinpoint::JoinPoint;
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use registry::{
    global_registry, AdviceLookup, AdviceMap, AdviceRegistry, ClassAdvices, MethodAdvices,
};
pub use resolver::{ObjectResolver, ResolvedObject};
pub use submission::{all_submissions, AdviceSubmission};
pub use target::{Target, TARGET_DELIMITER};

// 导出 inventory 供 submit! 使用
pub use inventory;

/// 预导入模块
pub mod prelude {
    pub use crate::advice::{AdviceEntry, AdviceKind, Weaver, DEFAULT_SORT_ORDER};
    pub use crate::config::AdviceConfig;
    pub use crate::error::{AdviceError, AdviceResult};
    pub use crate::joinpoint::JoinPoint;
    pub use crate::logging::LoggingConfig;
    pub use crate::registry::{global_registry, AdviceLookup, AdviceRegistry};
    pub use crate::resolver::{ObjectResolver, ResolvedObject};
    pub use crate::submission::AdviceSubmission;
    pub use crate::target::Target;
}
