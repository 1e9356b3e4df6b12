//! bean 定义模型
//!
//! `#[bean]` 宏在程序启动时向全局定义表提交的注册条目

use crate::errors::BeanError;
use crate::resolver::BeanResolver;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 共享的 bean 实例句柄
pub type BeanInstance = Arc<dyn Any + Send + Sync>;

/// 类型擦除的实例工厂，对应组件的无参构造器
pub type BeanFactory = fn() -> Result<BeanInstance, Box<dyn std::error::Error + Send + Sync>>;

/// 类型擦除的装配函数，对实例上的每个 autowired 字段执行注入
pub type BeanWirer = fn(&BeanInstance, &dyn BeanResolver) -> Result<(), BeanError>;

/// 向上转换函数，把实例包装成目标类型的 `Arc` 并装箱返回
///
/// 实例的具体类型不匹配时返回 `None`
pub type BeanCast = fn(&BeanInstance) -> Option<Box<dyn Any>>;

/// 可赋值目标条目
///
/// bean 对某个目标类型可赋值，当且仅当定义里存在对应的转换条目：
/// 具体类型本身，以及 `provides(...)` 声明的每个 trait
#[derive(Clone)]
pub struct AssignableTarget {
    /// 目标类型 ID
    pub target: TypeId,
    /// 目标类型简单名称
    pub target_name: &'static str,
    /// 转换函数
    pub cast: BeanCast,
}

/// bean 定义
#[derive(Clone)]
pub struct BeanDefinition {
    /// 类型简单名称
    pub type_name: &'static str,
    /// 标注上声明的显式名称
    pub explicit_name: Option<&'static str>,
    /// 定义所在的模块路径
    pub module_path: &'static str,
    /// 实例工厂
    pub factory: BeanFactory,
    /// 装配函数
    pub wirer: BeanWirer,
    /// 可赋值目标列表
    pub assignable: Vec<AssignableTarget>,
}

impl BeanDefinition {
    /// 定义是否位于给定命名空间之下（含嵌套命名空间）
    pub fn is_within(&self, namespace: &str) -> bool {
        match self.module_path.strip_prefix(namespace) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }

    /// 查找目标类型的转换条目
    pub fn cast_entry(&self, target: TypeId) -> Option<&AssignableTarget> {
        self.assignable.iter().find(|entry| entry.target == target)
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("type_name", &self.type_name)
            .field("explicit_name", &self.explicit_name)
            .field("module_path", &self.module_path)
            .field(
                "assignable",
                &self
                    .assignable
                    .iter()
                    .map(|entry| entry.target_name)
                    .collect::<Vec<_>>(),
            )
            .field("factory", &"<fn>")
            .field("wirer", &"<fn>")
            .finish()
    }
}

/// 取类型的简单名称（去掉模块路径前缀）
pub fn simple_type_name<T: ?Sized + 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
