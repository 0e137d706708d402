use darling::{FromDeriveInput, FromField, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, ext::IdentExt, parse_macro_input};

use crate::util::option_inner;

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(table), supports(struct_named))]
struct TableInput {
    ident: syn::Ident,
    vis: syn::Visibility,
    generics: syn::Generics,
    data: ast::Data<(), ColumnField>,
    #[darling(default)]
    name: Option<String>,
}

#[derive(Debug, FromField)]
#[darling(attributes(column))]
struct ColumnField {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    #[darling(default)]
    name: Option<String>,
    /// Filled by the database when omitted, may still be written.
    #[darling(default)]
    generated: bool,
    /// Filled by the database, never written.
    #[darling(default)]
    generated_always: bool,
    /// Readable only.
    #[darling(default)]
    excluded: bool,
}

/// How a column takes part in inserts and updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Write {
    Required,
    Optional,
    Never,
}

struct Column<'a> {
    field: &'a syn::Ident,
    marker: syn::Ident,
    name: String,
    ty: &'a syn::Type,
    write: Write,
}

const RESERVED: &[&str] = &["table", "row", "Values"];

pub fn table_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let table = match TableInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };
    match expand(&table) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(table: &TableInput) -> syn::Result<TokenStream2> {
    if !table.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &table.generics,
            "#[derive(Table)] does not support generic structs",
        ));
    }
    let Some(fields) = table.data.as_ref().take_struct() else {
        return Err(syn::Error::new_spanned(&table.ident, "expected a struct with named fields"));
    };
    if fields.is_empty() {
        return Err(syn::Error::new_spanned(&table.ident, "a table needs at least one column"));
    }

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        columns.push(column(field)?);
    }

    let row_ident = &table.ident;
    let vis = &table.vis;
    let table_name = table
        .name
        .clone()
        .unwrap_or_else(|| row_ident.to_string().to_snake_case());
    let module = module_ident(&table_name, row_ident)?;

    let column_names = columns.iter().map(|c| c.name.as_str());
    let column_types = columns.iter().map(|c| c.ty);
    let markers = columns.iter().map(column_marker);
    let values = values_builder(&columns);

    let from_row_fields = columns.iter().map(|c| {
        let field = c.field;
        let name = &c.name;
        quote! { #field: __row.try_take(#name)? }
    });

    Ok(quote! {
        #[allow(non_camel_case_types)]
        #vis mod #module {
            use super::*;

            #[derive(Debug, Default, Clone, Copy)]
            pub struct table;

            impl ::strata::Table for table {
                const NAME: &'static str = #table_name;
                const COLUMNS: &'static [&'static str] = &[#(#column_names),*];
                type Row = #row_ident;
                type Shape = (#(#column_types,)*);
            }

            #(#markers)*

            #values
        }

        impl ::strata::FromRow for #row_ident {
            fn from_row(mut __row: ::strata::Row) -> ::strata::Result<Self> {
                ::std::result::Result::Ok(Self {
                    #(#from_row_fields,)*
                })
            }
        }
    })
}

fn module_ident(table_name: &str, span: &syn::Ident) -> syn::Result<syn::Ident> {
    let valid = table_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && table_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(syn::Error::new_spanned(
            span,
            format!("table name `{table_name}` is not a valid module name"),
        ));
    }
    Ok(format_ident!("{}", table_name, span = span.span()))
}

fn column(field: &ColumnField) -> syn::Result<Column<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(&field.ty, "expected a named field"));
    };
    let marker_name = ident.unraw().to_string();
    if RESERVED.contains(&marker_name.as_str()) {
        return Err(syn::Error::new_spanned(
            ident,
            format!("`{marker_name}` is reserved, rename the field and use #[column(name = \"{marker_name}\")]"),
        ));
    }
    let flags = [field.generated, field.generated_always, field.excluded];
    if flags.iter().filter(|flag| **flag).count() > 1 {
        return Err(syn::Error::new_spanned(
            ident,
            "`generated`, `generated_always` and `excluded` are exclusive",
        ));
    }

    let write = if field.generated_always || field.excluded {
        Write::Never
    } else if field.generated || option_inner(&field.ty).is_some() {
        Write::Optional
    } else {
        Write::Required
    };

    Ok(Column {
        field: ident,
        marker: ident.clone(),
        name: field.name.clone().unwrap_or(marker_name),
        ty: &field.ty,
        write,
    })
}

fn column_marker(column: &Column<'_>) -> TokenStream2 {
    let marker = &column.marker;
    let name = &column.name;
    let ty = column.ty;
    let doc = format!("Column `{name}`.");

    let updatable = (column.write != Write::Never).then(|| {
        quote! {
            impl ::strata::Updatable for #marker {}

            impl ::strata::UpdatableList<table> for #marker {
                fn push_columns(self, __columns: &mut ::std::vec::Vec<&'static str>) {
                    __columns.push(#name);
                }
            }
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct #marker;

        impl ::strata::Column for #marker {
            type Table = table;
            type Value = #ty;
            const NAME: &'static str = #name;
        }

        #updatable

        ::strata::impl_column!(#marker);
    }
}

/// The insert row builder. Every required column is a type parameter that
/// moves from `Unset` to `Set` when its setter is called, and only a row
/// with every parameter `Set` implements `InsertRow`.
fn values_builder(columns: &[Column<'_>]) -> TokenStream2 {
    let required: Vec<&Column<'_>> = columns.iter().filter(|c| c.write == Write::Required).collect();
    let params: Vec<syn::Ident> = (0..required.len()).map(|i| format_ident!("R{}", i)).collect();

    let declared = params.iter().map(|p| quote! { #p = ::strata::schema::Unset });
    let struct_def = quote! {
        /// One insert row, see [`row`].
        #[must_use]
        pub struct Values<#(#declared),*> {
            assignments: ::strata::schema::Assignments,
            _state: ::std::marker::PhantomData<fn() -> (#(#params,)*)>,
        }
    };

    let required_setters = required.iter().enumerate().map(|(index, column)| {
        let marker = &column.marker;
        let name = &column.name;
        let ty = column.ty;
        let free: Vec<&syn::Ident> = params
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p)
            .collect();
        let before = params.iter().enumerate().map(|(i, p)| {
            if i == index {
                quote! { ::strata::schema::Unset }
            } else {
                quote! { #p }
            }
        });
        let after = params.iter().enumerate().map(|(i, p)| {
            if i == index {
                quote! { ::strata::schema::Set }
            } else {
                quote! { #p }
            }
        });
        quote! {
            impl<#(#free),*> Values<#(#before),*> {
                pub fn #marker<V: ::strata::IntoExpr<#ty>>(mut self, __value: V) -> Values<#(#after),*> {
                    self.assignments.set(#name, ::strata::IntoExpr::into_expr(__value));
                    Values {
                        assignments: self.assignments,
                        _state: ::std::marker::PhantomData,
                    }
                }
            }
        }
    });

    let optional_setters = columns.iter().filter(|c| c.write == Write::Optional).map(|column| {
        let marker = &column.marker;
        let name = &column.name;
        let ty = column.ty;
        quote! {
            pub fn #marker<V: ::strata::IntoExpr<#ty>>(mut self, __value: V) -> Self {
                self.assignments.set(#name, ::strata::IntoExpr::into_expr(__value));
                self
            }
        }
    });

    let complete = params.iter().map(|_| quote! { ::strata::schema::Set });

    quote! {
        #struct_def

        /// Start an insert row. It can be inserted once every required
        /// column has a value.
        pub fn row() -> Values {
            Values {
                assignments: ::std::default::Default::default(),
                _state: ::std::marker::PhantomData,
            }
        }

        #(#required_setters)*

        impl<#(#params),*> Values<#(#params),*> {
            #(#optional_setters)*
        }

        impl ::strata::InsertRow for Values<#(#complete),*> {
            type Table = table;

            fn into_assignments(self) -> ::strata::schema::Assignments {
                self.assignments
            }
        }
    }
}
