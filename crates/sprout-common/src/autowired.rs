//! 自动装配字段单元

use once_cell::sync::OnceCell;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// 自动装配字段的注入槽
///
/// bean 先以空槽默认构造，容器在装配阶段把解析出的共享实例绑定进来。
/// 目标类型可以是具体类型，也可以是 `dyn Trait`。
pub struct Autowired<T: ?Sized> {
    slot: OnceCell<Arc<T>>,
}

impl<T: ?Sized> Autowired<T> {
    /// 创建未绑定的注入槽
    pub const fn empty() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// 绑定解析出的实例，重复绑定保留第一次的值
    pub fn bind(&self, instance: Arc<T>) {
        let _ = self.slot.set(instance);
    }

    /// 槽位是否已绑定
    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// 获取注入的实例引用
    ///
    /// # Panics
    ///
    /// 装配完成前访问会 panic。容器对外暴露的 bean 一定已完成绑定，
    /// 触发此 panic 意味着在容器之外手工构造了 bean。
    pub fn get(&self) -> &T {
        match self.slot.get() {
            Some(instance) => instance,
            None => panic!("autowired 字段在装配完成前被访问"),
        }
    }

    /// 不触发 panic 的访问方式
    pub fn try_get(&self) -> Option<&Arc<T>> {
        self.slot.get()
    }

    /// 克隆注入实例的共享句柄
    pub fn shared(&self) -> Option<Arc<T>> {
        self.slot.get().cloned()
    }
}

impl<T: ?Sized> Default for Autowired<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> Deref for Autowired<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T: ?Sized> fmt::Debug for Autowired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bound() {
            f.write_str("Autowired(bound)")
        } else {
            f.write_str("Autowired(unbound)")
        }
    }
}
