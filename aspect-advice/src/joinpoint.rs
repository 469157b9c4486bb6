//! 连接点（JoinPoint）定义
//!
//! 连接点表示一次被拦截的方法调用，由外部织入引擎构造并传给可调用的通知

use crate::Target;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 连接点信息
#[derive(Clone)]
pub struct JoinPoint {
    /// 目标类名
    pub class_name: String,

    /// 方法名称
    pub method_name: String,

    /// 方法参数（如果需要）
    pub args: Option<Arc<dyn Any + Send + Sync>>,

    /// 调用时间戳
    pub timestamp: Instant,
}

impl JoinPoint {
    /// 创建新的连接点
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            args: None,
            timestamp: Instant::now(),
        }
    }

    /// 设置参数
    pub fn with_args<T: Any + Send + Sync + 'static>(mut self, args: T) -> Self {
        self.args = Some(Arc::new(args));
        self
    }

    /// 尝试获取参数
    pub fn get_args<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.args.as_ref()?.downcast_ref::<T>()
    }

    /// 获取调用时间戳
    pub fn get_timestamp(&self) -> &Instant {
        &self.timestamp
    }

    /// 从连接点创建到现在经过的时间
    pub fn elapsed(&self) -> Duration {
        self.timestamp.elapsed()
    }

    /// 获取方法签名，格式与目标字符串一致：`Class@method`
    pub fn signature(&self) -> String {
        self.target().to_string()
    }

    /// 转换为注册表查询用的目标
    pub fn target(&self) -> Target {
        Target::new(self.class_name.clone(), self.method_name.clone())
    }
}

impl fmt::Debug for JoinPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinPoint")
            .field("class_name", &self.class_name)
            .field("method_name", &self.method_name)
            .field("has_args", &self.args.is_some())
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl fmt::Display for JoinPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}
