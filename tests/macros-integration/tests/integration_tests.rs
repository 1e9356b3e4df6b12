//! bean 宏集成测试（集中测试工程）

use sprout_common::{find_bean_definitions, Autowired, Bean};
use sprout_macros::bean;
use std::any::TypeId;

/// 无参数标注的组件
#[derive(Debug, Default)]
#[bean]
pub struct PlainBean;

#[derive(Debug, Default)]
#[bean(name = "renamedBean")]
pub struct NamedBean;

/// 按 trait 查找场景的端口
pub trait Port: Send + Sync {
    fn port_id(&self) -> u32;
}

#[derive(Debug, Default)]
#[bean(provides(Port))]
pub struct Adapter;

impl Port for Adapter {
    fn port_id(&self) -> u32 {
        7
    }
}

#[derive(Debug, Default)]
#[bean]
pub struct Client {
    #[autowired]
    port: Autowired<dyn Port>,
}

impl Client {
    pub fn is_wired(&self) -> bool {
        self.port.is_bound()
    }
}

#[test]
fn bean_trait_is_implemented() {
    let plain = PlainBean;
    assert_eq!(plain.bean_type_name(), "PlainBean");
    assert_eq!(plain.bean_name(), None);

    let named = NamedBean;
    assert_eq!(named.bean_type_name(), "NamedBean");
    assert_eq!(named.bean_name(), Some("renamedBean"));
}

#[test]
fn definitions_are_submitted_at_startup() {
    let definitions = find_bean_definitions(&[module_path!()]);
    let type_names: Vec<_> = definitions.iter().map(|d| d.type_name).collect();

    assert!(type_names.contains(&"PlainBean"));
    assert!(type_names.contains(&"NamedBean"));
    assert!(type_names.contains(&"Adapter"));
    assert!(type_names.contains(&"Client"));
}

#[test]
fn definition_carries_the_explicit_name() {
    let definitions = find_bean_definitions(&[module_path!()]);

    let named = definitions
        .iter()
        .find(|d| d.type_name == "NamedBean")
        .unwrap();
    assert_eq!(named.explicit_name, Some("renamedBean"));
    assert_eq!(named.module_path, module_path!());

    let plain = definitions
        .iter()
        .find(|d| d.type_name == "PlainBean")
        .unwrap();
    assert_eq!(plain.explicit_name, None);
}

#[test]
fn provides_adds_a_trait_cast_entry() {
    let definitions = find_bean_definitions(&[module_path!()]);

    let adapter = definitions
        .iter()
        .find(|d| d.type_name == "Adapter")
        .unwrap();
    assert!(adapter.cast_entry(TypeId::of::<Adapter>()).is_some());
    assert!(adapter.cast_entry(TypeId::of::<dyn Port>()).is_some());

    let plain = definitions
        .iter()
        .find(|d| d.type_name == "PlainBean")
        .unwrap();
    assert!(plain.cast_entry(TypeId::of::<dyn Port>()).is_none());
}

#[test]
fn factory_builds_a_default_instance() {
    let definitions = find_bean_definitions(&[module_path!()]);

    let plain = definitions
        .iter()
        .find(|d| d.type_name == "PlainBean")
        .unwrap();
    let instance = (plain.factory)().unwrap();
    assert!(instance.downcast_ref::<PlainBean>().is_some());
}

#[test]
fn trait_cast_entry_produces_a_trait_object_handle() {
    let definitions = find_bean_definitions(&[module_path!()]);

    let adapter = definitions
        .iter()
        .find(|d| d.type_name == "Adapter")
        .unwrap();
    let instance = (adapter.factory)().unwrap();

    let entry = adapter.cast_entry(TypeId::of::<dyn Port>()).unwrap();
    let boxed = (entry.cast)(&instance).unwrap();
    let port = boxed.downcast::<std::sync::Arc<dyn Port>>().unwrap();
    assert_eq!(port.port_id(), 7);
}

#[test]
fn autowired_marker_is_stripped_from_the_struct() {
    // 宏把 #[autowired] 从输出里去掉，字段类型保持 Autowired<T>
    let client = Client::default();
    assert!(!client.is_wired());
}
