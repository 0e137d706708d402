use std::fmt::{self, Write};

use crate::{
    dialect::Dialect,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Paginator {
    pub(crate) maybe_limit: Option<u64>,
    pub(crate) maybe_offset: Option<u64>,
}

impl Paginator {
    pub(crate) fn limit(&mut self, limit: u64) {
        self.maybe_limit = Some(limit);
    }

    pub(crate) fn offset(&mut self, offset: u64) {
        self.maybe_offset = Some(offset);
    }

    /// Pages start at 1, page 0 is treated as the first page.
    pub(crate) fn for_page(&mut self, page: u64, per_page: u64) {
        let page = page.max(1);
        self.maybe_limit = Some(per_page);
        self.maybe_offset = Some((page - 1).saturating_mul(per_page));
    }
}

impl FormatWriter for Paginator {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match (self.maybe_limit, self.maybe_offset) {
            (None, None) => Ok(()),
            (Some(limit), None) => write!(context.writer, " limit {limit}"),
            (Some(limit), Some(offset)) => write!(context.writer, " limit {limit} offset {offset}"),
            // mysql and sqlite only accept an offset after a limit
            (None, Some(offset)) => match context.dialect {
                Dialect::Postgres => write!(context.writer, " offset {offset}"),
                Dialect::MySql => write!(context.writer, " limit {} offset {offset}", u64::MAX),
                Dialect::Sqlite => write!(context.writer, " limit -1 offset {offset}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_for_page() {
        let mut paginator = Paginator::default();
        paginator.for_page(3, 15);
        assert_eq!(Some(15), paginator.maybe_limit);
        assert_eq!(Some(30), paginator.maybe_offset);
        paginator.for_page(0, 10);
        assert_eq!(Some(0), paginator.maybe_offset);
    }

    #[test]
    fn test_offset_without_limit() {
        let mut paginator = Paginator::default();
        paginator.offset(5);
        assert_eq!(" offset 5", format_writer(paginator, Dialect::Postgres));
        assert_eq!(" limit -1 offset 5", format_writer(paginator, Dialect::Sqlite));
        assert_eq!(
            " limit 18446744073709551615 offset 5",
            format_writer(paginator, Dialect::MySql)
        );
    }
}
