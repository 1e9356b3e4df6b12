//! 全局 bean 定义表
//!
//! `#[bean]` 宏生成的 ctor 函数在 main 之前向这里提交定义；
//! 容器构造时按命名空间筛选出需要的定义。表本身只在启动阶段写入，
//! 之后全部是读访问。

use crate::definition::BeanDefinition;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static BEAN_DEFINITIONS: Lazy<RwLock<Vec<BeanDefinition>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// 提交 bean 定义
pub fn submit_bean_definition(definition: BeanDefinition) {
    BEAN_DEFINITIONS.write().push(definition);
}

/// 查找位于给定命名空间之下（含嵌套命名空间）的全部 bean 定义
///
/// 结果按 (模块路径, 类型名) 排序，发现顺序与链接顺序无关。
/// 空的命名空间列表得到空结果。
pub fn find_bean_definitions(namespaces: &[&str]) -> Vec<BeanDefinition> {
    let definitions = BEAN_DEFINITIONS.read();
    let mut matched: Vec<BeanDefinition> = definitions
        .iter()
        .filter(|definition| namespaces.iter().any(|ns| definition.is_within(ns)))
        .cloned()
        .collect();
    matched.sort_by(|a, b| (a.module_path, a.type_name).cmp(&(b.module_path, b.type_name)));
    matched
}
