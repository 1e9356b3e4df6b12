//! 名称推导场景的夹具

use sprout_macros::bean;

/// 名称由类型名推导的 bean
#[derive(Debug, Default)]
#[bean]
pub struct Alpha;

/// 名称由标注显式指定的 bean
#[derive(Debug, Default)]
#[bean(name = "betaBean")]
pub struct Beta;

/// 显式名称为空白，回退到推导名称的 bean
#[derive(Debug, Default)]
#[bean(name = "  ")]
pub struct Gamma;
