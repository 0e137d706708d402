use std::fmt;

use crate::{
    expr::cond::Conditions,
    schema::TableRef,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum JoinType {
    Inner,
}

impl FormatWriter for JoinType {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            JoinType::Inner => context.writer.write_str("inner join"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct JoinClause {
    pub(crate) ty: JoinType,
    pub(crate) table: TableRef,
    pub(crate) conditions: Conditions,
}

impl FormatWriter for JoinClause {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_char(' ')?;
        self.ty.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.table.format_writer(context)?;
        if !self.conditions.is_empty() {
            context.writer.write_str(" on ")?;
            self.conditions.format_writer(context)?;
        }
        Ok(())
    }
}
