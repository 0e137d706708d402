use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sql), supports(enum_unit))]
struct SqlEnumInput {
    ident: syn::Ident,
    data: ast::Data<SqlVariant, ()>,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(sql))]
struct SqlVariant {
    ident: syn::Ident,
    #[darling(default)]
    rename: Option<String>,
}

pub fn sql_enum_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let info = match SqlEnumInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let name = &info.ident;
    let type_name = name.to_string();
    let Some(variants) = info.data.take_enum() else {
        return syn::Error::new_spanned(name, "only enums are supported")
            .to_compile_error()
            .into();
    };

    let mut to_sql_arms = Vec::with_capacity(variants.len());
    let mut from_sql_arms = Vec::with_capacity(variants.len());
    for variant in &variants {
        let ident = &variant.ident;
        let sql_name = variant
            .rename
            .clone()
            .unwrap_or_else(|| ident.to_string().to_snake_case());
        to_sql_arms.push(quote! { #name::#ident => #sql_name, });
        from_sql_arms.push(quote! { #sql_name => ::std::result::Result::Ok(#name::#ident), });
    }

    quote! {
        impl ::strata::IntoValue for #name {
            fn into_value(self) -> ::strata::Value {
                let text: &str = match self {
                    #(#to_sql_arms)*
                };
                ::strata::Value::String(::std::string::String::from(text))
            }
        }

        impl ::strata::FromValue for #name {
            fn from_value(value: ::strata::Value) -> ::std::result::Result<Self, ::strata::ValueError> {
                match &value {
                    ::strata::Value::String(text) => match text.as_str() {
                        #(#from_sql_arms)*
                        _ => ::std::result::Result::Err(::strata::ValueError::new(#type_name, &value)),
                    },
                    _ => ::std::result::Result::Err(::strata::ValueError::new(#type_name, &value)),
                }
            }
        }

        ::strata::impl_into_expr! { #name => [#name] }
    }
    .into()
}
