use proc_macro::TokenStream;

mod binary;
mod schema;
mod sql_enum;
mod table;
mod unary;
mod util;

#[proc_macro_derive(BinaryOperator, attributes(operator))]
pub fn operator_methods(input: TokenStream) -> TokenStream {
    binary::operator_methods_impl(input)
}

#[proc_macro_derive(UnaryOperator, attributes(operator))]
pub fn unary_operator_methods(input: TokenStream) -> TokenStream {
    unary::unary_operator_methods_impl(input)
}

/// Declare a table from its row struct.
///
/// Generates a module named after the table holding the `table` marker, one
/// marker per column and the typed insert row builder `row()`.
#[proc_macro_derive(Table, attributes(table, column))]
pub fn table_derive(input: TokenStream) -> TokenStream {
    table::table_derive_impl(input)
}

/// Declare a database. Every field names a table module and holds its row
/// struct: `person: Person`.
#[proc_macro_derive(Schema)]
pub fn schema_derive(input: TokenStream) -> TokenStream {
    schema::schema_derive_impl(input)
}

/// Store a unit enum as text.
#[proc_macro_derive(SqlEnum, attributes(sql))]
pub fn sql_enum_derive(input: TokenStream) -> TokenStream {
    sql_enum::sql_enum_derive_impl(input)
}
