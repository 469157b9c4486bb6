//! 编译时通知注册
//!
//! 通过 inventory 在编译期收集通知声明，启动时由 `AdviceRegistry::auto_load` 统一登记

use crate::{AdviceKind, Weaver};

/// 通知声明
///
/// 使用示例：
/// ```ignore
/// aspect_advice::inventory::submit! {
///     aspect_advice::AdviceSubmission::new(
///         "audit",
///         aspect_advice::AdviceKind::Before,
///         "UserService@save",
///         10,
///         || aspect_advice::Weaver::reference("AuditAspect@handle"),
///     )
/// }
/// ```
pub struct AdviceSubmission {
    /// 通知 ID
    pub id: &'static str,

    /// 连接点类型
    pub kind: AdviceKind,

    /// 目标（`Class@method`）
    pub target: &'static str,

    /// 排序值
    pub order: i32,

    /// 创建织入器的函数
    pub weaver: fn() -> Weaver,
}

impl AdviceSubmission {
    pub const fn new(
        id: &'static str,
        kind: AdviceKind,
        target: &'static str,
        order: i32,
        weaver: fn() -> Weaver,
    ) -> Self {
        Self {
            id,
            kind,
            target,
            order,
            weaver,
        }
    }

    /// 创建织入器实例
    pub fn create_weaver(&self) -> Weaver {
        (self.weaver)()
    }
}

inventory::collect!(AdviceSubmission);

/// 获取所有编译时声明的通知
pub fn all_submissions() -> impl Iterator<Item = &'static AdviceSubmission> {
    inventory::iter::<AdviceSubmission>()
}
