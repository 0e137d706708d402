use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(operator), supports(enum_unit))]
struct UnaryInput {
    ident: syn::Ident,
    vis: syn::Visibility,
    data: ast::Data<UnaryVariant, ()>,
    filter: syn::Ident,
}

#[derive(Debug, FromVariant)]
struct UnaryVariant {
    ident: syn::Ident,
}

pub fn unary_operator_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let op = match UnaryInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &op.ident;
    let vis = &op.vis;
    let filter = &op.filter;
    let Some(variants) = op.data.take_enum() else {
        return syn::Error::new_spanned(enum_name, "only enums are supported")
            .to_compile_error()
            .into();
    };

    let methods = variants.iter().map(|v| {
        let var = &v.ident;
        let snake = var.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);

        quote! {
            fn #where_fn<C, I>(self, column: C) -> Self
            where
                C: crate::expr::Operand<Self::Sources, I>,
            {
                crate::Filter::where_unary(self, crate::expr::Conjunction::And, column, #enum_name::#var)
            }

            fn #or_where_fn<C, I>(self, column: C) -> Self
            where
                C: crate::expr::Operand<Self::Sources, I>,
            {
                crate::Filter::where_unary(self, crate::expr::Conjunction::Or, column, #enum_name::#var)
            }
        }
    });

    quote! {
        /// `is null` and `is not null` filters.
        #vis trait #filter: crate::Filter {
            #(#methods)*
        }

        impl<T: crate::Filter> #filter for T {}
    }
    .into()
}
