//! 构造失败场景的夹具

pub mod failing {
    use sprout_macros::bean;

    /// 构造函数总是失败的 bean
    #[derive(Debug)]
    #[bean(constructor = "try_new")]
    pub struct BrokenBean;

    impl BrokenBean {
        /// 模拟不可实例化的组件
        pub fn try_new() -> Result<Self, std::io::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "组件无法实例化",
            ))
        }
    }
}

pub mod fallible {
    use sprout_macros::bean;

    /// 构造函数可失败但正常返回的 bean
    #[derive(Debug)]
    #[bean(constructor = "try_new")]
    pub struct CheckedBean {
        ready: bool,
    }

    impl CheckedBean {
        pub fn try_new() -> Result<Self, std::io::Error> {
            Ok(Self { ready: true })
        }

        pub fn is_ready(&self) -> bool {
            self.ready
        }
    }
}
