use sprout_common::{Autowired, Bean};
use sprout_macros::bean;

pub trait Port: Send + Sync {
    fn port_id(&self) -> u32;
}

#[derive(Debug, Default)]
#[bean(provides(Port))]
struct Endpoint;

impl Port for Endpoint {
    fn port_id(&self) -> u32 {
        1
    }
}

#[derive(Debug, Default)]
#[bean(name = "consumerBean")]
struct Consumer {
    #[autowired]
    port: Autowired<dyn Port>,
}

fn main() {
    let consumer = Consumer::default();
    assert_eq!(consumer.bean_name(), Some("consumerBean"));
    assert!(!consumer.port.is_bound());
}
