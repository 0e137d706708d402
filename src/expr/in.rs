use std::fmt;

use crate::{
    select::SelectAst,
    writer::{FormatContext, FormatWriter},
};

use super::Expr;

#[derive(Debug, Clone)]
pub(crate) struct InCondition {
    pub(crate) operator: InOperator,
    pub(crate) lhs: Expr,
    pub(crate) rhs: InList,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum InOperator {
    In,
    NotIn,
}

#[derive(Debug, Clone)]
pub(crate) enum InList {
    Values(Vec<Expr>),
    Subquery(Box<SelectAst>),
}

impl FormatWriter for InCondition {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        // `in ()` is a syntax error everywhere
        if let InList::Values(values) = &self.rhs {
            if values.is_empty() {
                return match self.operator {
                    InOperator::In => context.writer.write_str("1 = 0"),
                    InOperator::NotIn => context.writer.write_str("1 = 1"),
                };
            }
        }

        self.lhs.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.operator.format_writer(context)?;
        context.writer.write_str(" (")?;
        match &self.rhs {
            InList::Values(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    value.format_writer(context)?;
                }
            }
            InList::Subquery(query) => query.format_writer(context)?,
        }
        context.writer.write_char(')')
    }
}

impl FormatWriter for InOperator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            InOperator::In => context.writer.write_str("in"),
            InOperator::NotIn => context.writer.write_str("not in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, raw::Raw, tests::format_writer, value::Value};

    use super::*;

    #[test]
    fn test_in_values() {
        let condition = InCondition {
            operator: InOperator::NotIn,
            lhs: Expr::Raw(Raw::new_static("id")),
            rhs: InList::Values(vec![Expr::Value(Value::I32(1)), Expr::Value(Value::I32(2))]),
        };
        assert_eq!("id not in ($1, $2)", format_writer(condition, Dialect::Postgres));
    }

    #[test]
    fn test_in_empty() {
        let condition = InCondition {
            operator: InOperator::In,
            lhs: Expr::Raw(Raw::new_static("id")),
            rhs: InList::Values(Vec::new()),
        };
        assert_eq!("1 = 0", format_writer(condition, Dialect::MySql));
    }
}
