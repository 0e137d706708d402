use std::fmt;

use crate::writer::{FormatContext, FormatWriter};

use super::Expr;

#[derive(Debug, Clone, Copy)]
pub(crate) enum BetweenOperator {
    Between,
    NotBetween,
}

#[derive(Debug, Clone)]
pub(crate) struct BetweenCondition {
    pub(crate) lhs: Expr,
    pub(crate) low: Expr,
    pub(crate) high: Expr,
    pub(crate) operator: BetweenOperator,
}

impl FormatWriter for BetweenOperator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            BetweenOperator::Between => context.writer.write_str("between"),
            BetweenOperator::NotBetween => context.writer.write_str("not between"),
        }
    }
}

impl FormatWriter for BetweenCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.lhs.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.operator.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.low.format_writer(context)?;
        context.writer.write_str(" and ")?;
        self.high.format_writer(context)
    }
}
