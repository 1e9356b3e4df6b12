//! # Sprout Common
//!
//! Sprout IoC 容器的公共基础层，定义 bean 标记、定义模型和发现入口。
//!
//! ## 核心内容
//!
//! - [`Bean`] - bean 标记 trait
//! - [`Autowired`] - 自动装配字段单元
//! - [`BeanDefinition`] - 全局定义表条目
//! - [`BeanResolver`] - 装配期的类型解析抽象
//! - [`find_bean_definitions`] - 按命名空间发现 bean 定义
//!
//! ## 设计原则
//!
//! - 基于过程宏的编译时组件注册，不做运行时代码扫描
//! - 上下文构造完成后注册表只读，查询无需加锁
//! - 约定优于配置：默认名称由类型名推导

pub mod autowired;
pub mod definition;
pub mod errors;
pub mod registry;
pub mod resolver;

pub use autowired::*;
pub use definition::*;
pub use errors::*;
pub use registry::*;
pub use resolver::*;

/// bean 标记 trait
///
/// `#[bean]` 宏为被标注的结构体生成实现。约束为 `Send + Sync + 'static`，
/// 实例以共享引用的形式在多线程间访问。
pub trait Bean: Send + Sync + 'static {
    /// 类型简单名称
    fn bean_type_name(&self) -> &'static str;

    /// 标注上声明的显式名称
    fn bean_name(&self) -> Option<&'static str> {
        None
    }
}
