use std::fmt;

use crate::{
    ident::Ident,
    raw::{Raw, Sql},
    schema::{Column, Table},
    select::SelectAst,
    value::Value,
    writer::{FormatContext, FormatWriter},
};

pub(crate) mod between;
pub(crate) mod binary;
pub(crate) mod cond;
pub(crate) mod exists;
pub(crate) mod group;
pub(crate) mod r#in;
pub(crate) mod order;
pub(crate) mod unary;

pub use binary::Operator;
pub use cond::{Conditions, Conjunction};
#[doc(hidden)]
pub use order::OrderExpr;
pub use order::Ordering;
pub use unary::UnaryOperator;

/// A scalar sql expression.
#[derive(Debug, Clone)]
pub enum Expr {
    Value(Value),
    Column(ColumnRef),
    Raw(Raw),
    Subquery(Box<SelectAst>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub(crate) table: &'static str,
    pub(crate) column: &'static str,
}

impl Expr {
    #[doc(hidden)]
    pub fn column<C: Column>() -> Self {
        Self::Column(ColumnRef {
            table: <C::Table as Table>::NAME,
            column: C::NAME,
        })
    }

    /// Output name of the expression when selected without an alias.
    pub(crate) fn output_name(&self) -> Option<&'static str> {
        match self {
            Self::Column(column) => Some(column.column),
            _ => None,
        }
    }
}

impl FormatWriter for Expr {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Self::Value(value) => context.write_param(value),
            Self::Column(column) => context.write_column(column.table, column.column),
            Self::Raw(raw) => raw.format_writer(context),
            Self::Subquery(query) => {
                context.writer.write_char('(')?;
                query.format_writer(context)?;
                context.writer.write_char(')')
            }
        }
    }
}

/// A rust value usable where a column of type `V` is expected.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a value of type `{V}`",
    label = "expected a value of type `{V}`"
)]
pub trait IntoExpr<V> {
    fn into_expr(self) -> Expr;
}

/// Left hand side of a filter: a column of a table in the from-list `F`, or
/// typed raw sql.
#[diagnostic::on_unimplemented(message = "`{Self}` is not a column of this query")]
pub trait Operand<F, I> {
    type Value;

    fn into_operand(self) -> Expr;
}

impl<F, V> Operand<F, ()> for Sql<V> {
    type Value = V;

    fn into_operand(self) -> Expr {
        Expr::Raw(self.raw)
    }
}

/// One entry of a select list.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SelectItem {
    pub(crate) expr: Expr,
    pub(crate) alias: Option<Ident>,
}

impl SelectItem {
    pub fn column<C: Column>(alias: Option<Ident>) -> Self {
        Self {
            expr: Expr::column::<C>(),
            alias,
        }
    }

    pub(crate) fn new(expr: Expr, alias: Option<Ident>) -> Self {
        Self { expr, alias }
    }

    /// Name of the cell in the result row.
    pub(crate) fn output_name(&self) -> Option<&str> {
        self.alias
            .as_ref()
            .map(Ident::as_str)
            .or_else(|| self.expr.output_name())
    }
}

impl FormatWriter for SelectItem {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.expr.format_writer(context)?;
        context.write_alias(self.alias.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_format_value_and_raw() {
        let value = Expr::Value(Value::String("cat".into()));
        assert_eq!("$1", format_writer(value, Dialect::Postgres));
        let raw = Expr::Raw(Raw::new_static("count(*)"));
        assert_eq!("count(*)", format_writer(raw, Dialect::Sqlite));
    }

    #[test]
    fn test_select_item_output_name() {
        let column = ColumnRef {
            table: "person",
            column: "first_name",
        };
        let item = SelectItem::new(Expr::Column(column), None);
        assert_eq!(Some("first_name"), item.output_name());
        let item = SelectItem::new(Expr::Column(column), Some(Ident::new_static("fn")));
        assert_eq!(Some("fn"), item.output_name());
        assert_eq!(
            "\"person\".\"first_name\" as \"fn\"",
            format_writer(item, Dialect::Postgres)
        );
        let item = SelectItem::new(Expr::Raw(Raw::new_static("1")), None);
        assert_eq!(None, item.output_name());
    }
}
