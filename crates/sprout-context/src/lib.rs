//! # Sprout Context
//!
//! IoC 应用上下文的具体实现。
//!
//! ## 核心内容
//!
//! - [`ApplicationContext`] - bean 容器
//!
//! 构造流程严格顺序执行：发现 → 注册 → 装配 → 只读查询。
//! 任何一步失败都会使整个构造失败，调用方不会拿到装配了一半的容器。

pub mod context;
mod naming;

pub use context::ApplicationContext;
