use std::fmt;

use strata_derive::BinaryOperator;

use crate::{
    dialect::Dialect,
    writer::{FormatContext, FormatWriter},
};

use super::Expr;

#[derive(Debug, Clone)]
pub(crate) struct BinaryCondition {
    pub(crate) lhs: Expr,
    pub(crate) operator: Operator,
    pub(crate) rhs: Expr,
}

impl FormatWriter for BinaryCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.lhs.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.operator.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.rhs.format_writer(context)
    }
}

/// Comparison operators, each one gets a `where_<op>` and `or_where_<op>`
/// method on [`BinaryFilter`](crate::BinaryFilter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinaryOperator)]
#[operator(filter = "BinaryFilter")]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    Ilike,
    NotIlike,
}

impl FormatWriter for Operator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Operator::Eq => context.writer.write_char('='),
            Operator::NotEq => context.writer.write_str("!="),
            Operator::Lt => context.writer.write_char('<'),
            Operator::Lte => context.writer.write_str("<="),
            Operator::Gt => context.writer.write_char('>'),
            Operator::Gte => context.writer.write_str(">="),
            Operator::Like => match context.dialect {
                Dialect::Postgres | Dialect::Sqlite => context.writer.write_str("like"),
                Dialect::MySql => context.writer.write_str("like binary"),
            },
            Operator::NotLike => match context.dialect {
                Dialect::Postgres | Dialect::Sqlite => context.writer.write_str("not like"),
                Dialect::MySql => context.writer.write_str("not like binary"),
            },
            Operator::Ilike => match context.dialect {
                Dialect::Postgres => context.writer.write_str("ilike"),
                Dialect::MySql | Dialect::Sqlite => context.writer.write_str("like"),
            },
            Operator::NotIlike => match context.dialect {
                Dialect::Postgres => context.writer.write_str("not ilike"),
                Dialect::MySql | Dialect::Sqlite => context.writer.write_str("not like"),
            },
        }
    }
}
