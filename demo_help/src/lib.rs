use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

fn extract_doc(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc") {
            if let syn::Meta::NameValue(nv) = &attr.meta {
                if let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) = &nv.value {
                    lines.push(s.value());
                }
            }
        }
    }
    lines.join("\n")
}

/// 为单元变体枚举生成帮助信息与按名称查找：
/// - `help(&self)`      当前变体的doc文本。
/// - `all_help()`       全部 `(name, help)` 对，顺序与声明一致。
/// - `from_name(name)`  按变体名查找，忽略ASCII大小写。
#[proc_macro_derive(DemoHelp)]
pub fn demo_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        panic!("DemoHelp can only be derived on enums");
    };
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("DemoHelp only supports unit variants");
        }
    }

    let help_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let doc = extract_doc(&v.attrs);
        quote! {
            Self::#ident => #doc,
        }
    });

    let all_help_entries = variants.iter().map(|v| {
        let name = v.ident.to_string().to_ascii_lowercase();
        let doc = extract_doc(&v.attrs);
        quote! {
            (#name, #doc)
        }
    });

    let name_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let name = v.ident.to_string().to_ascii_lowercase();
        quote! {
            #name => Some(Self::#ident),
        }
    });

    let expanded = quote! {
        impl #enum_name {
            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_arms)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }

            /// 按名称查找变体，忽略ASCII大小写。
            pub fn from_name(name: &str) -> Option<Self> {
                match name.to_ascii_lowercase().as_str() {
                    #(#name_arms)*
                    _ => None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
