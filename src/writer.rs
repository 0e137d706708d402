use std::fmt::{self, Write};

use crate::{dialect::Dialect, error::Error, ident::Ident, value::Value};

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result;
}

/// Tables visible to the query being written, used to qualify columns.
#[derive(Debug, Default)]
pub(crate) struct TableScope {
    tables: Vec<(&'static str, Option<Ident>)>,
    qualify: bool,
}

impl TableScope {
    pub(crate) fn new<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<Ident>)>,
    {
        let tables: Vec<_> = tables.into_iter().collect();
        let qualify = tables.len() > 1 || tables.iter().any(|(_, alias)| alias.is_some());
        Self { tables, qualify }
    }
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) dialect: Dialect,
    pub(crate) placeholder: usize,
    pub(crate) params: Vec<Value>,
    scopes: Vec<TableScope>,
    failure: Option<Error>,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, dialect: Dialect) -> Self {
        Self {
            writer,
            dialect,
            placeholder: 0,
            params: Vec::new(),
            scopes: Vec::new(),
            failure: None,
        }
    }

    pub(crate) fn write_table(&mut self, ident: &str) -> fmt::Result {
        for (i, part) in ident.split('.').enumerate() {
            if i > 0 {
                self.writer.write_char('.')?;
            }
            self.write_ident(part)?;
        }
        Ok(())
    }

    pub(crate) fn write_ident(&mut self, part: &str) -> fmt::Result {
        if part == "*" {
            return self.writer.write_char('*');
        }

        let quote = match self.dialect {
            Dialect::Postgres | Dialect::Sqlite => '"',
            Dialect::MySql => '`',
        };
        self.writer.write_char(quote)?;
        // duplicate the quote if present
        let dbl = if quote == '"' { "\"\"" } else { "``" };

        let mut last = 0;
        for (index, char) in part.char_indices() {
            if char == quote {
                if index != last {
                    self.writer.write_str(&part[last..index])?;
                }
                self.writer.write_str(dbl)?;
                last = index + char.len_utf8();
            }
        }

        // write trailing slice
        if last < part.len() {
            self.writer.write_str(&part[last..])?;
        }

        self.writer.write_char(quote)?;
        Ok(())
    }

    pub(crate) fn write_alias(&mut self, alias: Option<&Ident>) -> fmt::Result {
        if let Some(alias) = alias {
            self.writer.write_str(" as ")?;
            self.write_ident(alias.as_str())?;
        }
        Ok(())
    }

    pub(crate) fn write_placeholder(&mut self) -> fmt::Result {
        self.placeholder += 1;
        match self.dialect {
            Dialect::Postgres => write!(self.writer, "${}", self.placeholder),
            Dialect::Sqlite => write!(self.writer, "?{}", self.placeholder),
            Dialect::MySql => self.writer.write_char('?'),
        }
    }

    pub(crate) fn write_param(&mut self, value: &Value) -> fmt::Result {
        self.params.push(value.clone());
        self.write_placeholder()
    }

    pub(crate) fn push_scope(&mut self, scope: TableScope) {
        self.scopes.push(scope);
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Write a column reference, qualified by its table or alias unless the
    /// innermost query reads from that single table only.
    pub(crate) fn write_column(&mut self, table: &'static str, column: &str) -> fmt::Result {
        let mut qualifier: Option<Ident> = Some(Ident::new_static(table));
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if let Some((_, alias)) = scope.tables.iter().find(|(name, _)| *name == table) {
                qualifier = match alias {
                    Some(alias) => Some(alias.clone()),
                    // outer tables are always qualified inside a subquery
                    None if scope.qualify || depth > 0 => Some(Ident::new_static(table)),
                    None => None,
                };
                break;
            }
        }
        if let Some(qualifier) = qualifier {
            self.write_ident(qualifier.as_str())?;
            self.writer.write_char('.')?;
        }
        self.write_ident(column)
    }

    /// Record why formatting stopped. Returned error aborts the writer.
    pub(crate) fn fail(&mut self, error: Error) -> fmt::Error {
        self.failure = Some(error);
        fmt::Error
    }

    pub(crate) fn take_failure(&mut self) -> Option<Error> {
        self.failure.take()
    }
}

impl<T: FormatWriter> FormatWriter for Box<T> {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        (**self).format_writer(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(scopes: Vec<TableScope>, table: &'static str) -> String {
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::Postgres);
        for scope in scopes {
            context.push_scope(scope);
        }
        context.write_column(table, "id").unwrap();
        out
    }

    #[test]
    fn test_column_single_table() {
        let scope = TableScope::new([("person", None)]);
        assert_eq!("\"id\"", column(vec![scope], "person"));
    }

    #[test]
    fn test_column_aliased_table() {
        let scope = TableScope::new([("pet", Some(Ident::new_static("p")))]);
        assert_eq!("\"p\".\"id\"", column(vec![scope], "pet"));
    }

    #[test]
    fn test_column_joined_tables() {
        let scope = TableScope::new([("person", None), ("pet", None)]);
        assert_eq!("\"pet\".\"id\"", column(vec![scope], "pet"));
    }

    #[test]
    fn test_column_outer_scope() {
        let outer = TableScope::new([("person", Some(Ident::new_static("p")))]);
        let inner = TableScope::new([("pet", None)]);
        assert_eq!("\"p\".\"id\"", column(vec![outer, inner], "person"));
    }

    #[test]
    fn test_column_unknown_table() {
        assert_eq!("\"movie\".\"id\"", column(Vec::new(), "movie"));
    }

    #[test]
    fn test_placeholders() {
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::Sqlite);
        context.write_param(&Value::I32(1)).unwrap();
        context.write_param(&Value::Null).unwrap();
        assert_eq!(2, context.params.len());
        assert_eq!("?1?2", out);

        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::MySql);
        context.write_param(&Value::I32(1)).unwrap();
        context.write_param(&Value::I32(2)).unwrap();
        assert_eq!("??", out);
    }
}
