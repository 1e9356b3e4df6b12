//! bean 标注宏实现

use crate::utils;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Error, Expr, Fields, Ident, ItemStruct,
    Lit, Meta, Path, Result, Token, Type,
};

/// bean 标注参数
#[derive(Default)]
pub struct BeanArgs {
    /// 显式 bean 名称
    pub name: Option<String>,
    /// 可按查找的 trait 列表
    pub provides: Vec<Path>,
    /// 可失败的关联构造函数名
    pub constructor: Option<Ident>,
}

impl Parse for BeanArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = BeanArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.name = Some(lit_str.value());
                            }
                        }
                    } else if nv.path.is_ident("constructor") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.constructor = Some(lit_str.parse()?);
                            }
                        }
                    }
                }
                Meta::List(list) => {
                    if list.path.is_ident("provides") {
                        let traits =
                            list.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
                        args.provides.extend(traits);
                    }
                }
                Meta::Path(_) => {}
            }
        }

        Ok(args)
    }
}

/// 自动装配字段信息
struct AutowiredField {
    /// 字段名
    ident: Ident,
    /// `Autowired<T>` 中的目标类型 `T`
    target: Type,
}

/// 实现 #[bean] 宏
pub fn bean_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let bean_args = if args.is_empty() {
        BeanArgs::default()
    } else {
        match syn::parse::<BeanArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let mut input_struct = parse_macro_input!(input as ItemStruct);

    let autowired_fields = match collect_autowired_fields(&mut input_struct) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let struct_name = &input_struct.ident;
    let struct_name_string = struct_name.to_string();

    let explicit_name = match &bean_args.name {
        Some(name) => quote! { Some(#name) },
        None => quote! { None },
    };

    let bean_impl = quote! {
        impl sprout_common::Bean for #struct_name {
            fn bean_type_name(&self) -> &'static str {
                #struct_name_string
            }

            fn bean_name(&self) -> Option<&'static str> {
                #explicit_name
            }
        }
    };

    let wirer = generate_wirer(struct_name, &struct_name_string, &autowired_fields);

    let registration = generate_registration_code(
        struct_name,
        &struct_name_string,
        &explicit_name,
        &bean_args,
    );

    let expanded = quote! {
        #input_struct

        #bean_impl

        #wirer

        #registration
    };

    TokenStream::from(expanded)
}

/// 收集带 #[autowired] 标记的字段，并把标记从输出中去掉
fn collect_autowired_fields(input_struct: &mut ItemStruct) -> Result<Vec<AutowiredField>> {
    let mut autowired = Vec::new();

    if let Fields::Named(fields) = &mut input_struct.fields {
        for field in &mut fields.named {
            if !utils::field_has_attribute(field, "autowired") {
                continue;
            }
            field.attrs.retain(|attr| !attr.path().is_ident("autowired"));

            let target = match utils::autowired_target(&field.ty) {
                Some(target) => target.clone(),
                None => {
                    return Err(Error::new_spanned(
                        &field.ty,
                        "autowired 字段的类型必须是 Autowired<T>",
                    ));
                }
            };

            if let Some(ident) = field.ident.clone() {
                autowired.push(AutowiredField { ident, target });
            }
        }
    }

    Ok(autowired)
}

/// 生成类型擦除的装配函数
///
/// 绑定语句按字段声明顺序排列
fn generate_wirer(
    struct_name: &Ident,
    struct_name_string: &str,
    autowired_fields: &[AutowiredField],
) -> proc_macro2::TokenStream {
    let wirer_ident = wirer_fn_ident(struct_name);

    let bind_stmts = autowired_fields.iter().map(|field| {
        let field_ident = &field.ident;
        let target = &field.target;
        quote! {
            bean.#field_ident
                .bind(sprout_common::resolve_bean::<#target>(resolver)?);
        }
    });

    quote! {
        #[doc(hidden)]
        #[allow(unused_variables)]
        fn #wirer_ident(
            instance: &sprout_common::BeanInstance,
            resolver: &dyn sprout_common::BeanResolver,
        ) -> ::std::result::Result<(), sprout_common::BeanError> {
            let bean = match instance.downcast_ref::<#struct_name>() {
                Some(bean) => bean,
                None => {
                    return Err(sprout_common::BeanError::WiringFailed {
                        type_name: #struct_name_string.to_string(),
                        message: "装配函数收到了类型不匹配的实例".to_string(),
                    });
                }
            };
            #(#bind_stmts)*
            Ok(())
        }
    }
}

/// 生成 bean 定义的自动提交代码
fn generate_registration_code(
    struct_name: &Ident,
    struct_name_string: &str,
    explicit_name: &proc_macro2::TokenStream,
    bean_args: &BeanArgs,
) -> proc_macro2::TokenStream {
    let registration_fn_ident = Ident::new(
        &format!(
            "__register_bean_{}",
            struct_name_string.to_lowercase()
        ),
        Span::call_site(),
    );
    let wirer_ident = wirer_fn_ident(struct_name);

    let factory = match &bean_args.constructor {
        Some(constructor) => quote! {
            || match #struct_name::#constructor() {
                Ok(instance) => {
                    Ok(::std::sync::Arc::new(instance) as sprout_common::BeanInstance)
                }
                Err(source) => Err(source.into()),
            }
        },
        None => quote! {
            || {
                Ok(::std::sync::Arc::new(
                    <#struct_name as ::core::default::Default>::default(),
                ) as sprout_common::BeanInstance)
            }
        },
    };

    let mut assignable_entries = vec![quote! {
        sprout_common::AssignableTarget {
            target: ::std::any::TypeId::of::<#struct_name>(),
            target_name: #struct_name_string,
            cast: |instance| {
                instance
                    .clone()
                    .downcast::<#struct_name>()
                    .ok()
                    .map(|typed| ::std::boxed::Box::new(typed) as ::std::boxed::Box<dyn ::std::any::Any>)
            },
        }
    }];

    for trait_path in &bean_args.provides {
        let trait_name = trait_path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default();
        assignable_entries.push(quote! {
            sprout_common::AssignableTarget {
                target: ::std::any::TypeId::of::<dyn #trait_path>(),
                target_name: #trait_name,
                cast: |instance| {
                    instance
                        .clone()
                        .downcast::<#struct_name>()
                        .ok()
                        .map(|typed| {
                            ::std::boxed::Box::new(typed as ::std::sync::Arc<dyn #trait_path>)
                                as ::std::boxed::Box<dyn ::std::any::Any>
                        })
                },
            }
        });
    }

    quote! {
        // 使用 ctor 在程序启动时提交 bean 定义
        #[ctor::ctor]
        fn #registration_fn_ident() {
            let definition = sprout_common::BeanDefinition {
                type_name: #struct_name_string,
                explicit_name: #explicit_name,
                module_path: ::core::module_path!(),
                factory: #factory,
                wirer: #wirer_ident,
                assignable: vec![#(#assignable_entries),*],
            };
            sprout_common::submit_bean_definition(definition);
        }
    }
}

/// 装配函数的标识符
fn wirer_fn_ident(struct_name: &Ident) -> Ident {
    Ident::new(
        &format!("__wire_bean_{}", struct_name.to_string().to_lowercase()),
        Span::call_site(),
    )
}
