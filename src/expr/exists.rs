use std::fmt;

use crate::{
    select::SelectAst,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone)]
pub(crate) struct ExistsCondition {
    pub(crate) operator: ExistsOperator,
    pub(crate) subquery: Box<SelectAst>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ExistsOperator {
    Exists,
    NotExists,
}

impl FormatWriter for ExistsOperator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            ExistsOperator::Exists => context.writer.write_str("exists"),
            ExistsOperator::NotExists => context.writer.write_str("not exists"),
        }
    }
}

impl FormatWriter for ExistsCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.operator.format_writer(context)?;
        context.writer.write_str(" (")?;
        self.subquery.format_writer(context)?;
        context.writer.write_char(')')
    }
}
