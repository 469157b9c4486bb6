//! 目标标识（Target）
//!
//! 目标字符串格式为 `Class` 或 `Class@method`，以第一个 `@` 作为分隔符。

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 目标分隔符
pub const TARGET_DELIMITER: char = '@';

/// 解析后的目标
///
/// `method_name` 为 `None` 表示只指定了类名；方法名永远不会是空串
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// 类名
    class_name: String,

    /// 方法名（可选）
    method_name: Option<String>,
}

impl Target {
    /// 创建指向具体方法的目标
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        let method_name = method_name.into();
        Self {
            class_name: class_name.into(),
            method_name: (!method_name.is_empty()).then_some(method_name),
        }
    }

    /// 创建只包含类名的目标
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: None,
        }
    }

    /// 解析目标字符串
    ///
    /// 规则：
    /// - 按第一个 `@` 拆分，其后的内容（包括后续的 `@`）全部作为方法名
    /// - 没有 `@` 时整串为类名，没有方法名
    /// - `Foo@` 的方法名为空，同样视为没有方法名
    pub fn parse(target: &str) -> Self {
        match target.split_once(TARGET_DELIMITER) {
            Some((class_name, method_name)) => Self::new(class_name, method_name),
            None => Self::class(target),
        }
    }

    /// 是否指定了方法名
    pub fn has_method(&self) -> bool {
        self.method_name.is_some()
    }

    /// 获取类名
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// 获取方法名
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// 拆分为（类名, 方法名）
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.class_name, self.method_name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method_name {
            Some(method) => write!(f, "{}{}{}", self.class_name, TARGET_DELIMITER, method),
            None => write!(f, "{}", self.class_name),
        }
    }
}

impl FromStr for Target {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_and_method() {
        let target = Target::parse("UserService@save");
        assert_eq!(target.class_name(), "UserService");
        assert_eq!(target.method_name(), Some("save"));
        assert!(target.has_method());
    }

    #[test]
    fn test_parse_class_only() {
        let target = Target::parse("UserService");
        assert_eq!(target.class_name(), "UserService");
        assert_eq!(target.method_name(), None);
        assert!(!target.has_method());
    }

    #[test]
    fn test_first_delimiter_wins() {
        let target = Target::parse("A@b@c");
        assert_eq!(target.class_name(), "A");
        assert_eq!(target.method_name(), Some("b@c"));
    }

    #[test]
    fn test_empty_method_is_absent() {
        let target = Target::parse("UserService@");
        assert_eq!(target, Target::class("UserService"));
    }

    #[test]
    fn test_empty_class_keeps_method() {
        let target = Target::parse("@save");
        assert_eq!(target.class_name(), "");
        assert_eq!(target.method_name(), Some("save"));
    }

    /// `0` 是合法方法名，只有空串被视为没有方法名
    #[test]
    fn test_zero_is_a_method_name_not_absent() {
        assert_eq!(Target::parse("Foo@0").method_name(), Some("0"));
    }

    #[test]
    fn test_new_with_empty_method_is_class_only() {
        let target = Target::new("Foo", "");
        assert!(!target.has_method());
        assert_eq!(target.into_parts(), ("Foo".to_string(), None));
    }

    #[test]
    fn test_display() {
        assert_eq!(Target::new("Foo", "bar").to_string(), "Foo@bar");
        assert_eq!(Target::class("Foo").to_string(), "Foo");
    }

    #[test]
    fn test_from_str() {
        let target: Target = "Foo@bar".parse().unwrap();
        assert_eq!(target, Target::new("Foo", "bar"));
    }
}
