//! # Sprout Macros
//!
//! 这个 crate 提供了用于编译时 bean 注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`macro@bean`] - bean 标记与注册宏
//!
//! `#[bean]` 为被标注的结构体实现 `Bean` trait，生成装配函数，并在程序
//! 启动时向全局定义表提交一条 bean 定义。使用方 crate 需要依赖
//! `sprout-common` 和 `ctor`。
//!
//! ## 使用示例
//!
//! ```rust
//! use sprout_common::Bean;
//! use sprout_macros::bean;
//!
//! #[derive(Debug, Default)]
//! #[bean]
//! pub struct MyService;
//!
//! fn main() {
//!     let service = MyService::default();
//!     assert_eq!(service.bean_type_name(), "MyService");
//! }
//! ```

use proc_macro::TokenStream;

mod bean;
mod utils;

/// bean 标记与注册宏
///
/// # 参数
///
/// - `name = "custom_name"` - 显式 bean 名称；省略时由容器按类型名推导
/// - `provides(TraitA, TraitB)` - 声明可按这些 trait 查找该 bean
/// - `constructor = "try_new"` - 使用可失败的关联构造函数代替
///   `Default::default`
///
/// 结构体中类型为 `Autowired<T>` 且带 `#[autowired]` 标记的字段会在
/// 容器装配阶段按类型注入，`T` 可以是具体类型或 `dyn Trait`。
///
/// # 示例
///
/// ```rust
/// use sprout_common::{Autowired, Bean};
/// use sprout_macros::bean;
///
/// #[derive(Debug, Default)]
/// #[bean]
/// pub struct Repository;
///
/// #[derive(Debug, Default)]
/// #[bean(name = "orderService")]
/// pub struct OrderService {
///     #[autowired]
///     repository: Autowired<Repository>,
/// }
///
/// fn main() {
///     let service = OrderService::default();
///     assert_eq!(service.bean_name(), Some("orderService"));
/// }
/// ```
#[proc_macro_attribute]
pub fn bean(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input)
}
