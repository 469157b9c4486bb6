//! 通知注册表
//!
//! 负责登记和查询通知，结构为 `类名 -> 方法名 -> 连接点类型 -> 通知 ID -> 通知条目`。
//! 注册表只做记录，不调用织入器，也不按 `order` 排序。

use crate::{
    AdviceConfig, AdviceEntry, AdviceKind, JoinPoint, ObjectResolver, Target, Weaver,
    DEFAULT_SORT_ORDER,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// 某个方法上按连接点类型和通知 ID 分组的通知
pub type MethodAdvices = BTreeMap<AdviceKind, BTreeMap<String, AdviceEntry>>;

/// 某个类上按方法名分组的通知
pub type ClassAdvices = BTreeMap<String, MethodAdvices>;

/// 完整的通知表
pub type AdviceMap = BTreeMap<String, ClassAdvices>;

static EMPTY_CLASS_ADVICES: ClassAdvices = BTreeMap::new();
static EMPTY_METHOD_ADVICES: MethodAdvices = BTreeMap::new();

/// 全局通知注册表
///
/// 首次访问时创建，并加载所有通过 inventory 声明的通知
static GLOBAL_ADVICE_REGISTRY: Lazy<RwLock<AdviceRegistry>> = Lazy::new(|| {
    let mut registry = AdviceRegistry::new();
    registry.auto_load();
    RwLock::new(registry)
});

/// 获取全局通知注册表
///
/// 宿主应用可以自行构造 `AdviceRegistry` 并传给织入引擎；
/// 需要进程级共享实例时使用这个函数：
/// ```ignore
/// use aspect_advice::global_registry;
///
/// global_registry().write().before("audit", "UserService@save", "AuditAspect@handle");
/// let advices = global_registry().read().get_method(&"UserService@save".into()).clone();
/// ```
pub fn global_registry() -> &'static RwLock<AdviceRegistry> {
    &GLOBAL_ADVICE_REGISTRY
}

/// 查询结果
///
/// 目标不带方法名时返回整个类的通知，否则返回该方法的通知
#[derive(Debug, Clone, Copy)]
pub enum AdviceLookup<'a> {
    Class(&'a ClassAdvices),
    Method(&'a MethodAdvices),
}

impl<'a> AdviceLookup<'a> {
    pub fn is_empty(&self) -> bool {
        match self {
            AdviceLookup::Class(advices) => advices.is_empty(),
            AdviceLookup::Method(advices) => advices.is_empty(),
        }
    }

    pub fn as_class(&self) -> Option<&'a ClassAdvices> {
        match *self {
            AdviceLookup::Class(advices) => Some(advices),
            AdviceLookup::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&'a MethodAdvices> {
        match *self {
            AdviceLookup::Method(advices) => Some(advices),
            AdviceLookup::Class(_) => None,
        }
    }
}

/// 通知注册表
#[derive(Debug, Default)]
pub struct AdviceRegistry {
    advices: AdviceMap,
    object_resolver: Option<ObjectResolver>,
}

impl AdviceRegistry {
    /// 创建空的通知注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册前置通知
    pub fn before(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
    ) {
        self.register(id, AdviceKind::Before, target, weaver, DEFAULT_SORT_ORDER);
    }

    /// 注册环绕通知
    pub fn around(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
    ) {
        self.register(id, AdviceKind::Around, target, weaver, DEFAULT_SORT_ORDER);
    }

    /// 注册后置通知
    pub fn after(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
    ) {
        self.register(id, AdviceKind::After, target, weaver, DEFAULT_SORT_ORDER);
    }

    pub fn before_with_order(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
        order: i32,
    ) {
        self.register(id, AdviceKind::Before, target, weaver, order);
    }

    pub fn around_with_order(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
        order: i32,
    ) {
        self.register(id, AdviceKind::Around, target, weaver, order);
    }

    pub fn after_with_order(
        &mut self,
        id: impl Into<String>,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
        order: i32,
    ) {
        self.register(id, AdviceKind::After, target, weaver, order);
    }

    /// 注册通知
    ///
    /// 目标必须带方法名（`Class@method`），否则直接忽略，不报错。
    /// 相同的（类, 方法, 连接点类型, ID）会覆盖之前的条目。
    pub fn register(
        &mut self,
        id: impl Into<String>,
        kind: AdviceKind,
        target: impl Into<Target>,
        weaver: impl Into<Weaver>,
        order: i32,
    ) {
        let id = id.into();
        let target = target.into();

        let (class_name, method_name) = match target.into_parts() {
            (class_name, Some(method_name)) => (class_name, method_name),
            (class_name, None) => {
                tracing::debug!(
                    "Ignoring {} advice '{}': target '{}' has no method",
                    kind,
                    id,
                    class_name
                );
                return;
            }
        };

        tracing::debug!(
            "Registering {} advice '{}' on {}@{} (order: {})",
            kind,
            id,
            class_name,
            method_name,
            order
        );

        let replaced = self
            .advices
            .entry(class_name)
            .or_default()
            .entry(method_name)
            .or_default()
            .entry(kind)
            .or_default()
            .insert(id, AdviceEntry::new(weaver, order));

        if replaced.is_some() {
            tracing::trace!("  └─ replaced an existing {} advice", kind);
        }
    }

    /// 查询目标的通知
    ///
    /// - `Class`：返回该类所有方法的通知
    /// - `Class@method`：返回该方法按连接点类型分组的通知
    ///
    /// 未知的类或方法返回空映射
    pub fn get(&self, target: impl Into<Target>) -> AdviceLookup<'_> {
        let target = target.into();
        if target.has_method() {
            AdviceLookup::Method(self.get_method(&target))
        } else {
            AdviceLookup::Class(self.get_class(target.class_name()))
        }
    }

    /// 获取某个类的全部通知
    pub fn get_class(&self, class_name: &str) -> &ClassAdvices {
        self.advices.get(class_name).unwrap_or(&EMPTY_CLASS_ADVICES)
    }

    /// 获取某个方法的通知，目标不带方法名时返回空映射
    pub fn get_method(&self, target: &Target) -> &MethodAdvices {
        target
            .method_name()
            .and_then(|method| self.advices.get(target.class_name())?.get(method))
            .unwrap_or(&EMPTY_METHOD_ADVICES)
    }

    /// 获取连接点对应方法的通知
    pub fn get_join_point(&self, join_point: &JoinPoint) -> &MethodAdvices {
        self.get_method(&join_point.target())
    }

    /// 获取所有通知
    pub fn all(&self) -> &AdviceMap {
        &self.advices
    }

    /// 获取对象解析器
    pub fn object_resolver(&self) -> Option<&ObjectResolver> {
        self.object_resolver.as_ref()
    }

    /// 设置对象解析器
    pub fn set_object_resolver(&mut self, resolver: ObjectResolver) {
        tracing::debug!("Object resolver set");
        self.object_resolver = Some(resolver);
    }

    /// 通知条目总数
    pub fn len(&self) -> usize {
        self.advices
            .values()
            .flat_map(|methods| methods.values())
            .flat_map(|kinds| kinds.values())
            .map(|entries| entries.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 登记配置文件中声明的通知
    pub fn load_config(&mut self, config: &AdviceConfig) {
        tracing::info!("Loading {} advice declaration(s) from config", config.advice.len());

        for declaration in &config.advice {
            self.register(
                declaration.id.as_str(),
                declaration.kind,
                declaration.target.as_str(),
                declaration.weaver.as_str(),
                declaration.order,
            );
        }
    }

    /// 从 inventory 自动加载所有编译时声明的通知
    pub fn auto_load(&mut self) {
        let submissions: Vec<_> = crate::submission::all_submissions().collect();
        tracing::info!("Auto-loading {} advice submission(s)", submissions.len());

        for submission in submissions {
            tracing::debug!(
                "  ├─ Loading {} advice '{}' for {}",
                submission.kind,
                submission.id,
                submission.target
            );

            self.register(
                submission.id,
                submission.kind,
                submission.target,
                submission.create_weaver(),
                submission.order,
            );
        }

        tracing::info!("Registry holds {} advice entr(ies)", self.len());
    }
}
