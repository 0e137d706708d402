use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(operator), supports(enum_unit))]
struct BinaryDeriveInput {
    ident: syn::Ident,
    vis: syn::Visibility,
    data: ast::Data<BinaryVariant, ()>,
    /// Name of the generated filter trait.
    filter: syn::Ident,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(operator))]
struct BinaryVariant {
    ident: syn::Ident,
    #[darling(default)]
    skip: bool,
}

pub fn operator_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match BinaryDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;
    let vis = &enum_info.vis;
    let filter = &enum_info.filter;
    let Some(variants) = enum_info.data.take_enum() else {
        return syn::Error::new_spanned(enum_name, "only enums are supported")
            .to_compile_error()
            .into();
    };

    let methods = variants.iter().filter(|var| !var.skip).map(|var| {
        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);
        let doc = format!("`column {snake} value`, joined with `and`.");
        let or_doc = format!("`column {snake} value`, joined with `or`.");

        quote! {
            #[doc = #doc]
            fn #where_fn<C, I, V>(self, column: C, value: V) -> Self
            where
                C: crate::expr::Operand<Self::Sources, I>,
                V: crate::expr::IntoExpr<C::Value>,
            {
                crate::Filter::where_binary(self, crate::expr::Conjunction::And, column, #enum_name::#var_name, value)
            }

            #[doc = #or_doc]
            fn #or_where_fn<C, I, V>(self, column: C, value: V) -> Self
            where
                C: crate::expr::Operand<Self::Sources, I>,
                V: crate::expr::IntoExpr<C::Value>,
            {
                crate::Filter::where_binary(self, crate::expr::Conjunction::Or, column, #enum_name::#var_name, value)
            }
        }
    });

    quote! {
        /// Comparison shorthands, one pair per operator.
        #vis trait #filter: crate::Filter {
            #(#methods)*
        }

        impl<T: crate::Filter> #filter for T {}
    }
    .into()
}
