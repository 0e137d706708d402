use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, ext::IdentExt, parse_macro_input};

pub fn schema_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Schema)] does not support generic structs",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(name, "expected a struct with named fields"));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "#[derive(Schema)] only supports structs")),
    };

    let mut tables = Vec::with_capacity(fields.len());
    let mut impls = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        // the field names the module generated by #[derive(Table)]
        let module = format_ident!("{}", ident.unraw(), span = ident.span());
        let row = &field.ty;
        tables.push(quote! { <#module::table as ::strata::Table>::NAME });
        impls.push(quote! {
            impl ::strata::HasTable<#module::table> for #name {}

            const _: fn() = || {
                fn assert_row<T: ::strata::Table<Row = R>, R>() {}
                assert_row::<#module::table, #row>();
            };
        });
    }

    Ok(quote! {
        impl ::strata::Schema for #name {
            const TABLES: &'static [&'static str] = &[#(#tables),*];
        }

        #(#impls)*
    })
}
