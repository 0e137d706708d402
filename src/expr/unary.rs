use std::fmt;

use strata_derive::UnaryOperator;

use crate::writer::{FormatContext, FormatWriter};

use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, UnaryOperator)]
#[operator(filter = "UnaryFilter")]
pub enum UnaryOperator {
    Null,
    NotNull,
}

#[derive(Debug, Clone)]
pub(crate) struct UnaryCondition {
    pub(crate) lhs: Expr,
    pub(crate) operator: UnaryOperator,
}

impl FormatWriter for UnaryCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.lhs.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.operator.format_writer(context)
    }
}

impl FormatWriter for UnaryOperator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            UnaryOperator::Null => context.writer.write_str("is null"),
            UnaryOperator::NotNull => context.writer.write_str("is not null"),
        }
    }
}
