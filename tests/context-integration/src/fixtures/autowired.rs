//! 自动装配场景的夹具

pub mod success {
    use sprout_common::Autowired;
    use sprout_macros::bean;
    use std::sync::Arc;

    /// 被注入方
    #[derive(Debug, Default)]
    #[bean]
    pub struct AutowiredService;

    impl AutowiredService {
        /// 供装配结果断言使用的数据
        pub fn letters(&self) -> [&'static str; 3] {
            ["A", "B", "C"]
        }
    }

    /// 持有注入字段的服务
    #[derive(Debug, Default)]
    #[bean]
    pub struct TestService {
        #[autowired]
        autowired_service: Autowired<AutowiredService>,
    }

    impl TestService {
        pub fn joined_letters(&self) -> String {
            self.autowired_service.letters().join(",")
        }

        /// 注入实例的共享句柄，供引用相等断言使用
        pub fn service_handle(&self) -> Option<Arc<AutowiredService>> {
            self.autowired_service.shared()
        }
    }
}

pub mod nosuchbean {
    use crate::fixtures::bean::NotABean;
    use sprout_common::Autowired;
    use sprout_macros::bean;

    /// 注入目标没有任何候选的服务
    #[derive(Debug, Default)]
    #[bean]
    pub struct ServiceWithMissingDependency {
        #[autowired]
        missing: Autowired<NotABean>,
    }

    impl ServiceWithMissingDependency {
        pub fn is_wired(&self) -> bool {
            self.missing.is_bound()
        }
    }
}

pub mod nouniquebean {
    use sprout_common::Autowired;
    use sprout_macros::bean;

    /// 有两个 bean 实现的存储 trait
    pub trait Storage: Send + Sync {
        fn kind(&self) -> &'static str;
    }

    #[derive(Debug, Default)]
    #[bean(provides(Storage))]
    pub struct DiskStorage;

    impl Storage for DiskStorage {
        fn kind(&self) -> &'static str {
            "disk"
        }
    }

    #[derive(Debug, Default)]
    #[bean(provides(Storage))]
    pub struct MemoryStorage;

    impl Storage for MemoryStorage {
        fn kind(&self) -> &'static str {
            "memory"
        }
    }

    /// 注入目标有两个候选的服务
    #[derive(Debug, Default)]
    #[bean]
    pub struct ServiceWithAmbiguousDependency {
        #[autowired]
        storage: Autowired<dyn Storage>,
    }

    impl ServiceWithAmbiguousDependency {
        pub fn storage_kind(&self) -> &'static str {
            self.storage.kind()
        }
    }
}
