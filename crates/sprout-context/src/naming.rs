//! bean 名称解析

use sprout_common::BeanDefinition;

/// 解析 bean 的注册名称
///
/// 标注携带非空白显式名称时原样使用；否则取类型简单名称并把首字母小写
/// （`OrderService` -> `orderService`）
pub(crate) fn resolve_bean_name(definition: &BeanDefinition) -> String {
    match definition.explicit_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => decapitalize(definition.type_name),
    }
}

/// 把首字母转成小写
fn decapitalize(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
