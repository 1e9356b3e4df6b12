//! IoC 应用上下文实现
//!
//! 扫描命名空间、注册 bean、执行自动装配，并提供只读查询接口

use crate::naming::resolve_bean_name;
use sprout_common::{
    find_bean_definitions, resolve_bean, simple_type_name, BeanDefinition, BeanError,
    BeanInstance, BeanResolver,
};
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 一个已注册的 bean
struct RegisteredBean {
    definition: BeanDefinition,
    instance: BeanInstance,
}

impl RegisteredBean {
    /// 若对目标类型可赋值，返回装箱的 `Arc` 句柄
    fn cast_to(&self, target: TypeId) -> Option<Box<dyn Any>> {
        self.definition
            .cast_entry(target)
            .and_then(|entry| (entry.cast)(&self.instance))
    }
}

/// IoC 应用上下文
///
/// 每个实例独立拥有自己的注册表；同一进程里可以并存多个上下文。
/// 构造完成后注册表不再变化，查询接口可以在多线程间并发调用。
pub struct ApplicationContext {
    beans: BTreeMap<String, RegisteredBean>,
}

impl ApplicationContext {
    /// 扫描给定命名空间并构建上下文
    ///
    /// 发现、注册、装配严格顺序执行。没有匹配定义的命名空间得到一个
    /// 合法的空上下文，注册和装配都会跳过。
    pub fn new(namespaces: &[&str]) -> Result<Self, BeanError> {
        let definitions = find_bean_definitions(namespaces);
        Self::build(definitions)
    }

    /// 从给定的 bean 定义构建上下文
    fn build(definitions: Vec<BeanDefinition>) -> Result<Self, BeanError> {
        let mut context = Self {
            beans: BTreeMap::new(),
        };

        if definitions.is_empty() {
            return Ok(context);
        }

        context.init_beans(definitions)?;
        context.autowire()?;

        info!("应用上下文构造完成, 共注册 {} 个 bean", context.beans.len());
        Ok(context)
    }

    /// 按定义实例化并注册全部 bean
    ///
    /// 名称冲突时后注册的定义覆盖先注册的（与发现顺序一起保证结果确定）
    fn init_beans(&mut self, definitions: Vec<BeanDefinition>) -> Result<(), BeanError> {
        for definition in definitions {
            let name = resolve_bean_name(&definition);
            let instance =
                (definition.factory)().map_err(|source| BeanError::InstantiationFailed {
                    type_name: definition.type_name.to_string(),
                    source,
                })?;

            debug!("注册 bean: {} ({})", name, definition.type_name);
            if let Some(previous) = self.beans.insert(
                name.clone(),
                RegisteredBean {
                    definition,
                    instance,
                },
            ) {
                warn!(
                    "bean 名称冲突: {}, 覆盖了先注册的 {}",
                    name, previous.definition.type_name
                );
            }
        }
        Ok(())
    }

    /// 对每个已注册的 bean 执行自动装配
    ///
    /// bean 按注册表顺序访问；解析失败的错误原样向上传播
    fn autowire(&self) -> Result<(), BeanError> {
        for (name, bean) in &self.beans {
            debug!("装配 bean: {}", name);
            (bean.definition.wirer)(&bean.instance, self)?;
        }
        Ok(())
    }

    /// 按类型获取唯一可赋值的 bean
    ///
    /// 没有匹配时返回 [`BeanError::NoSuchBean`]，
    /// 匹配多于一个时返回 [`BeanError::NoUniqueBean`]
    pub fn get_bean<T: ?Sized + 'static>(&self) -> Result<Arc<T>, BeanError> {
        resolve_bean::<T>(self)
    }

    /// 按名称和类型获取 bean
    ///
    /// 名称不存在，或名称存在但对目标类型不可赋值，都返回
    /// [`BeanError::NoSuchBean`]
    pub fn get_bean_by_name<T: ?Sized + 'static>(&self, name: &str) -> Result<Arc<T>, BeanError> {
        self.beans
            .get(name)
            .and_then(|bean| bean.cast_to(TypeId::of::<T>()))
            .and_then(|boxed| boxed.downcast::<Arc<T>>().ok())
            .map(|instance| *instance)
            .ok_or_else(|| BeanError::NoSuchBean {
                type_name: simple_type_name::<T>().to_string(),
            })
    }

    /// 获取对目标类型可赋值的全部 bean
    ///
    /// 永远不会失败，空映射是合法结果
    pub fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>> {
        let target = TypeId::of::<T>();
        self.beans
            .iter()
            .filter_map(|(name, bean)| {
                bean.cast_to(target)
                    .and_then(|boxed| boxed.downcast::<Arc<T>>().ok())
                    .map(|instance| (name.clone(), *instance))
            })
            .collect()
    }

    /// 是否存在给定名称的 bean
    pub fn contains_bean(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    /// 已注册的全部 bean 名称（按字典序）
    pub fn bean_names(&self) -> Vec<&str> {
        self.beans.keys().map(String::as_str).collect()
    }

    /// 已注册的 bean 数量
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

impl BeanResolver for ApplicationContext {
    fn resolve_assignable(
        &self,
        target: TypeId,
        target_name: &str,
    ) -> Result<Box<dyn Any>, BeanError> {
        let mut matches = self
            .beans
            .iter()
            .filter_map(|(name, bean)| bean.cast_to(target).map(|boxed| (name, boxed)));

        let (first_name, boxed) = matches.next().ok_or_else(|| BeanError::NoSuchBean {
            type_name: target_name.to_string(),
        })?;

        let mut extra_names: Vec<String> = matches.map(|(name, _)| name.clone()).collect();
        if !extra_names.is_empty() {
            let mut candidates = vec![first_name.clone()];
            candidates.append(&mut extra_names);
            return Err(BeanError::NoUniqueBean {
                type_name: target_name.to_string(),
                candidates,
            });
        }

        Ok(boxed)
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("beans", &self.bean_names())
            .finish()
    }
}
