//! 装配期的类型解析抽象

use crate::definition::simple_type_name;
use crate::errors::BeanError;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// bean 解析器 trait
///
/// 装配阶段由容器实现。以类型擦除的形式按目标类型解析唯一可赋值的
/// bean，成功时返回装箱的 `Arc<T>`。
pub trait BeanResolver {
    /// 解析对目标类型唯一可赋值的 bean
    fn resolve_assignable(
        &self,
        target: TypeId,
        target_name: &str,
    ) -> Result<Box<dyn Any>, BeanError>;
}

/// 类型安全的解析入口
///
/// 宏生成的装配代码通过这里把类型擦除的查找结果还原成 `Arc<T>`
pub fn resolve_bean<T: ?Sized + 'static>(
    resolver: &dyn BeanResolver,
) -> Result<Arc<T>, BeanError> {
    let type_name = simple_type_name::<T>();
    let boxed = resolver.resolve_assignable(TypeId::of::<T>(), type_name)?;
    match boxed.downcast::<Arc<T>>() {
        Ok(instance) => Ok(*instance),
        Err(_) => Err(BeanError::WiringFailed {
            type_name: type_name.to_string(),
            message: "解析结果与目标类型不一致".to_string(),
        }),
    }
}
