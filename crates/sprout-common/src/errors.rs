//! 错误类型定义

use thiserror::Error;

/// bean 容器错误类型
#[derive(Error, Debug)]
pub enum BeanError {
    /// 按类型或名称查找时没有任何匹配的 bean
    #[error("bean 未找到: {type_name}")]
    NoSuchBean {
        /// 查找的目标类型简单名称
        type_name: String,
    },

    /// 按类型查找时要求唯一匹配，却命中了多个 bean
    #[error("bean 不唯一: {type_name}, 候选: {candidates:?}")]
    NoUniqueBean {
        /// 查找的目标类型简单名称
        type_name: String,
        /// 命中的 bean 名称，按注册表顺序排列
        candidates: Vec<String>,
    },

    /// 发现的组件无法实例化
    #[error("bean 实例化失败: {type_name}, 原因: {source}")]
    InstantiationFailed {
        /// 组件类型简单名称
        type_name: String,
        /// 构造函数返回的底层错误
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 装配函数收到了类型不匹配的实例
    #[error("bean 装配失败: {type_name}, 原因: {message}")]
    WiringFailed {
        /// 装配目标的类型简单名称
        type_name: String,
        /// 失败描述
        message: String,
    },
}

/// 结果类型别名
pub type BeanResult<T> = Result<T, BeanError>;
