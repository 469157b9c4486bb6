//! 通知（Advice）定义
//!
//! 通知由织入器（Weaver）和排序值组成，按连接点类型登记到注册表

use crate::{AdviceError, JoinPoint};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// 默认排序值
pub const DEFAULT_SORT_ORDER: i32 = 10;

/// 连接点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    /// 前置通知
    Before,
    /// 环绕通知
    Around,
    /// 后置通知
    After,
}

impl AdviceKind {
    /// 所有连接点类型
    pub const ALL: [AdviceKind; 3] = [AdviceKind::Before, AdviceKind::Around, AdviceKind::After];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceKind::Before => "before",
            AdviceKind::Around => "around",
            AdviceKind::After => "after",
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceKind {
    type Err = AdviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(AdviceKind::Before),
            "around" => Ok(AdviceKind::Around),
            "after" => Ok(AdviceKind::After),
            _ => Err(AdviceError::UnknownAdviceKind(s.to_string())),
        }
    }
}

/// 可调用织入器的函数类型
pub type WeaverFn = Arc<dyn Fn(&JoinPoint) + Send + Sync>;

/// 织入器
///
/// 注册表只保存和返回织入器，从不调用或解析它：
/// - `Callable` 是内联闭包，由织入引擎在连接点处调用
/// - `Reference` 是字符串引用（例如 `AuditAspect@handle`），由织入引擎自行解析
#[derive(Clone)]
pub enum Weaver {
    Callable(WeaverFn),
    Reference(String),
}

impl Weaver {
    /// 包装一个闭包
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&JoinPoint) + Send + Sync + 'static,
    {
        Weaver::Callable(Arc::new(f))
    }

    /// 创建字符串引用
    pub fn reference(name: impl Into<String>) -> Self {
        Weaver::Reference(name.into())
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Weaver::Reference(name) => Some(name),
            Weaver::Callable(_) => None,
        }
    }

    pub fn as_callable(&self) -> Option<&WeaverFn> {
        match self {
            Weaver::Callable(f) => Some(f),
            Weaver::Reference(_) => None,
        }
    }

    /// 判断是否为同一个织入器（闭包按指针比较，引用按名称比较）
    pub fn ptr_eq(&self, other: &Weaver) -> bool {
        match (self, other) {
            (Weaver::Callable(a), Weaver::Callable(b)) => Arc::ptr_eq(a, b),
            (Weaver::Reference(a), Weaver::Reference(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Weaver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weaver::Callable(_) => write!(f, "Callable(...)"),
            Weaver::Reference(name) => write!(f, "Reference({})", name),
        }
    }
}

impl From<&str> for Weaver {
    fn from(name: &str) -> Self {
        Weaver::Reference(name.to_string())
    }
}

impl From<String> for Weaver {
    fn from(name: String) -> Self {
        Weaver::Reference(name)
    }
}

impl From<WeaverFn> for Weaver {
    fn from(f: WeaverFn) -> Self {
        Weaver::Callable(f)
    }
}

/// 通知条目
///
/// `order` 只是优先级提示，注册表不会据此排序，执行顺序由织入引擎负责
#[derive(Debug, Clone)]
pub struct AdviceEntry {
    pub weaver: Weaver,
    pub order: i32,
}

impl AdviceEntry {
    pub fn new(weaver: impl Into<Weaver>, order: i32) -> Self {
        Self {
            weaver: weaver.into(),
            order,
        }
    }
}

impl PartialEq for AdviceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.weaver.ptr_eq(&other.weaver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_kind_from_str() {
        assert_eq!("before".parse::<AdviceKind>().unwrap(), AdviceKind::Before);
        assert_eq!("AROUND".parse::<AdviceKind>().unwrap(), AdviceKind::Around);
        assert_eq!("After".parse::<AdviceKind>().unwrap(), AdviceKind::After);
        assert!(matches!(
            "finally".parse::<AdviceKind>(),
            Err(AdviceError::UnknownAdviceKind(name)) if name == "finally"
        ));
    }

    #[test]
    fn test_kind_display() {
        let names: Vec<String> = AdviceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["before", "around", "after"]);
    }

    #[test]
    fn test_reference_weaver() {
        let weaver = Weaver::from("AuditAspect@handle");
        assert_eq!(weaver.as_reference(), Some("AuditAspect@handle"));
        assert!(weaver.as_callable().is_none());
        assert_eq!(format!("{:?}", weaver), "Reference(AuditAspect@handle)");
    }

    #[test]
    fn test_callable_weaver_is_stored_not_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let weaver = Weaver::callable(move |_jp| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let f = weaver.as_callable().unwrap();
        f(&JoinPoint::new("Foo", "bar"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(format!("{:?}", weaver), "Callable(...)");
    }

    #[test]
    fn test_ptr_eq() {
        let a = Weaver::callable(|_| {});
        let b = Weaver::callable(|_| {});
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Weaver::from("x")));
        assert!(Weaver::from("x").ptr_eq(&Weaver::from("x")));
    }

    #[test]
    fn test_entry_eq() {
        assert_eq!(AdviceEntry::new("w", 10), AdviceEntry::new("w", 10));
        assert_ne!(AdviceEntry::new("w", 10), AdviceEntry::new("w", 5));
    }
}
