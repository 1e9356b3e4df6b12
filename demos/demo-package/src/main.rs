//! # bean 容器演示
//!
//! 演示 Sprout 容器的完整流程：
//! - 使用 `#[bean]` 宏标注组件
//! - 按命名空间扫描并构建应用上下文
//! - 按类型、按名称以及按 trait 查询 bean

use sprout_context::ApplicationContext;
use tracing::info;

/// 订单领域的演示组件
mod orders {
    use sprout_common::Autowired;
    use sprout_macros::bean;

    /// 订单存储端口
    pub trait OrderRepository: Send + Sync {
        /// 保存订单，返回存储介质名称
        fn save(&self, order_id: &str) -> String;
    }

    /// 内存实现的订单存储
    #[derive(Debug, Default)]
    #[bean(provides(OrderRepository))]
    pub struct InMemoryOrderRepository;

    impl OrderRepository for InMemoryOrderRepository {
        fn save(&self, order_id: &str) -> String {
            format!("订单 {order_id} 已写入内存存储")
        }
    }

    /// 订单服务，存储依赖由容器按 trait 注入
    #[derive(Debug, Default)]
    #[bean]
    pub struct OrderService {
        #[autowired]
        repository: Autowired<dyn OrderRepository>,
    }

    impl OrderService {
        pub fn place_order(&self, order_id: &str) -> String {
            self.repository.save(order_id)
        }
    }

    /// 携带显式名称的通知组件
    #[derive(Debug, Default)]
    #[bean(name = "mailNotifier")]
    pub struct NotificationService;

    impl NotificationService {
        pub fn notify(&self, order_id: &str) -> String {
            format!("订单 {order_id} 的通知邮件已发送")
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt().with_env_filter("info").init();

    info!("Sprout 容器演示启动");

    // 扫描 orders 命名空间并构建上下文
    let context = ApplicationContext::new(&["demo_package::orders"])?;
    info!("已注册的 bean: {:?}", context.bean_names());

    // 按类型查询
    let service = context.get_bean::<orders::OrderService>()?;
    info!("{}", service.place_order("ORD-1001"));

    // 按 trait 查询
    let repository = context.get_bean::<dyn orders::OrderRepository>()?;
    info!("{}", repository.save("ORD-1002"));

    // 按名称查询
    let notifier = context.get_bean_by_name::<orders::NotificationService>("mailNotifier")?;
    info!("{}", notifier.notify("ORD-1001"));

    // 按 trait 枚举
    let repositories = context.get_all_beans::<dyn orders::OrderRepository>();
    info!("OrderRepository 实现共 {} 个", repositories.len());

    info!("演示结束");
    Ok(())
}
