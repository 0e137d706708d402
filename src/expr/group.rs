use std::fmt;

use crate::writer::{FormatContext, FormatWriter};

use super::cond::Conditions;

#[derive(Debug, Clone)]
pub(crate) struct GroupCondition {
    pub(crate) conditions: Conditions,
}

impl FormatWriter for GroupCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_char('(')?;
        self.conditions.format_writer(context)?;
        context.writer.write_char(')')
    }
}
