use std::fmt;

use crate::{
    array::Array,
    dialect::Dialect,
    ident::Ident,
    raw::Raw,
    writer::{FormatContext, FormatWriter},
};

use super::Expr;

#[derive(Debug, Clone)]
#[doc(hidden)]
pub enum OrderExpr {
    Expr(Expr, Ordering),
    /// Output name of a selection, checked when the query is compiled.
    Selection(Ident, Ordering),
    Raw(Raw),
    Random,
}

impl FormatWriter for OrderExpr {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            OrderExpr::Expr(expr, ordering) => {
                expr.format_writer(context)?;
                context.writer.write_char(' ')?;
                ordering.format_writer(context)
            }
            OrderExpr::Selection(name, ordering) => {
                context.write_ident(name.as_str())?;
                context.writer.write_char(' ')?;
                ordering.format_writer(context)
            }
            OrderExpr::Raw(raw) => raw.format_writer(context),
            OrderExpr::Random => match context.dialect {
                Dialect::Postgres | Dialect::Sqlite => context.writer.write_str("random()"),
                Dialect::MySql => context.writer.write_str("rand()"),
            },
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Order {
    projections: Array<OrderExpr>,
}

impl Order {
    pub(crate) fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    pub(crate) fn push(&mut self, expr: OrderExpr) {
        self.projections.push(expr);
    }

    /// Names of selections referenced by the ordering.
    pub(crate) fn selection_names(&self) -> impl Iterator<Item = &Ident> {
        self.projections.iter().filter_map(|proj| match proj {
            OrderExpr::Selection(name, _) => Some(name),
            _ => None,
        })
    }
}

impl FormatWriter for Order {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, proj) in self.projections.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            proj.format_writer(context)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

impl FormatWriter for Ordering {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Ordering::Asc => context.writer.write_str("asc"),
            Ordering::Desc => context.writer.write_str("desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_format_order() {
        let mut order = Order::default();
        order.push(OrderExpr::Raw(Raw::new_static("length(name)")));
        order.push(OrderExpr::Selection(Ident::new_static("fn"), Ordering::Desc));
        order.push(OrderExpr::Random);
        assert_eq!(
            "length(name), `fn` desc, rand()",
            format_writer(order.clone(), Dialect::MySql)
        );
        assert_eq!(vec!["fn"], order.selection_names().map(Ident::as_str).collect::<Vec<_>>());
    }
}
