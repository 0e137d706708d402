use std::fmt;

use crate::{
    select::SelectAst,
    writer::{FormatContext, FormatWriter},
};

/// A common table expression declared with `with`.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct Cte {
    pub(crate) name: &'static str,
    pub(crate) columns: &'static [&'static str],
    pub(crate) query: SelectAst,
}

impl FormatWriter for Cte {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.write_table(self.name)?;
        context.writer.write_char('(')?;
        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            context.write_ident(column)?;
        }
        context.writer.write_str(") as (")?;
        self.query.format_writer(context)?;
        context.writer.write_char(')')
    }
}

/// Write `with a(..) as (..), b(..) as (..) ` in declaration order.
pub(crate) fn format_ctes<W: fmt::Write>(
    ctes: &[Cte],
    context: &mut FormatContext<'_, W>,
) -> fmt::Result {
    if ctes.is_empty() {
        return Ok(());
    }
    context.writer.write_str("with ")?;
    for (index, cte) in ctes.iter().enumerate() {
        if index > 0 {
            context.writer.write_str(", ")?;
        }
        cte.format_writer(context)?;
    }
    context.writer.write_char(' ')
}
