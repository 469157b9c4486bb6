//! 对象解析器
//!
//! 由宿主应用提供，织入引擎在调用织入器之前用它按类名取得目标实例。
//! 注册表只保存解析器，不会调用它。

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 解析出的对象
pub type ResolvedObject = Arc<dyn Any + Send + Sync>;

type ResolverFn = dyn Fn(&str) -> anyhow::Result<ResolvedObject> + Send + Sync;

/// 对象解析器
///
/// 参数为类名；不关心类名的解析器直接忽略该参数即可
#[derive(Clone)]
pub struct ObjectResolver {
    inner: Arc<ResolverFn>,
}

impl ObjectResolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<ResolvedObject> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// 解析指定类名的对象
    pub fn resolve(&self, class_name: &str) -> anyhow::Result<ResolvedObject> {
        (self.inner)(class_name)
    }

    /// 是否为同一个解析器
    pub fn ptr_eq(&self, other: &ObjectResolver) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ObjectResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectResolver").finish_non_exhaustive()
    }
}
