use std::{fmt, marker::PhantomData};

use smol_str::SmolStr;

use crate::{
    error::Error,
    expr::{Expr, IntoExpr},
    ident::{Ident, IntoIdent},
    value::{IntoValue, Value},
    writer::{FormatContext, FormatWriter},
};

/// Raw sql with `?` placeholders and the values bound to them.
#[derive(Debug, Clone)]
pub struct Raw {
    sql: SmolStr,
    binds: Vec<Value>,
}

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            sql: value.into(),
            binds: Vec::new(),
        }
    }

    pub fn new_static(value: &'static str) -> Self {
        Self {
            sql: SmolStr::new_static(value),
            binds: Vec::new(),
        }
    }

    pub fn bind<V: IntoValue>(mut self, value: V) -> Self {
        self.binds.push(value.into_value());
        self
    }

    pub fn as_str(&self) -> &str {
        self.sql.as_str()
    }
}

impl FormatWriter for Raw {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let sql = self.sql.as_str();
        let bytes = sql.as_bytes();
        let mut binds = self.binds.iter();

        // quote we are currently inside of, literals and identifiers are skipped
        let mut quote: Option<u8> = None;
        let mut span_start = 0;
        let mut index = 0;

        while index < bytes.len() {
            let byte = bytes[index];
            match quote {
                Some(q) if byte == q => {
                    if bytes.get(index + 1) == Some(&q) {
                        // doubled quote is an escape
                        index += 2;
                        continue;
                    }
                    quote = None;
                }
                Some(_) => {}
                None => match byte {
                    b'\'' | b'"' | b'`' => quote = Some(byte),
                    b'?' => {
                        // jsonb operators ?| ?& and a literal ??
                        if let Some(b'?' | b'|' | b'&') = bytes.get(index + 1) {
                            index += 2;
                            continue;
                        }
                        context.writer.write_str(&sql[span_start..index])?;
                        let Some(value) = binds.next() else {
                            return Err(context.fail(Error::Compile(format!(
                                "raw sql `{sql}` has more placeholders than bindings"
                            ))));
                        };
                        context.write_param(value)?;
                        span_start = index + 1;
                    }
                    _ => {}
                },
            }
            index += 1;
        }

        if span_start < sql.len() {
            context.writer.write_str(&sql[span_start..])?;
        }

        if binds.next().is_some() {
            return Err(context.fail(Error::Compile(format!(
                "raw sql `{sql}` has more bindings than placeholders"
            ))));
        }

        Ok(())
    }
}

/// Raw sql that evaluates to a value of type `V`.
pub struct Sql<V> {
    pub(crate) raw: Raw,
    pub(crate) alias: Option<Ident>,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for Sql<V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            alias: self.alias.clone(),
            _value: PhantomData,
        }
    }
}

impl<V> fmt::Debug for Sql<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sql")
            .field("raw", &self.raw)
            .field("alias", &self.alias)
            .finish()
    }
}

impl<V> Sql<V> {
    pub fn new<T: Into<SmolStr>>(sql: T) -> Self {
        Self {
            raw: Raw::new(sql),
            alias: None,
            _value: PhantomData,
        }
    }

    pub fn bind<B: IntoValue>(mut self, value: B) -> Self {
        self.raw = self.raw.bind(value);
        self
    }

    /// Name the expression when it is selected.
    pub fn alias<A: IntoIdent>(mut self, alias: A) -> Self {
        self.alias = Some(alias.into_ident());
        self
    }
}

impl<V> From<Sql<V>> for Raw {
    fn from(value: Sql<V>) -> Self {
        value.raw
    }
}

impl<V> IntoExpr<V> for Sql<V> {
    fn into_expr(self) -> Expr {
        Expr::Raw(self.raw)
    }
}

impl<V> IntoExpr<Option<V>> for Sql<V> {
    fn into_expr(self) -> Expr {
        Expr::Raw(self.raw)
    }
}

/// Typed raw sql, `sql::<i64>("count(*)")`.
pub fn sql<V>(sql: impl Into<SmolStr>) -> Sql<V> {
    Sql::new(sql)
}

pub fn raw(sql: impl Into<SmolStr>) -> Raw {
    Raw::new(sql)
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_raw_str() {
        let value = Raw::new_static("'te?st'");
        let raw = format_writer(value, Dialect::Postgres);
        assert_eq!("'te?st'", raw);
    }

    #[test]
    fn test_raw_double_quote() {
        let value = Raw::new_static("'te''? st'");
        let raw = format_writer(value, Dialect::Postgres);
        assert_eq!("'te''? st'", raw);
    }

    #[test]
    fn test_raw_bind() {
        let value = Raw::new_static("'test' = ?").bind(1);
        assert_eq!("'test' = $1", format_writer(value.clone(), Dialect::Postgres));
        assert_eq!("'test' = ?1", format_writer(value.clone(), Dialect::Sqlite));
        assert_eq!("'test' = ?", format_writer(value, Dialect::MySql));
    }

    #[test]
    fn test_raw_ident() {
        let value = Raw::new_static("\"te? ? \"\"st\" = ?").bind("x");
        let raw = format_writer(value, Dialect::Postgres);
        assert_eq!("\"te? ? \"\"st\" = $1", raw);
    }

    #[test]
    fn test_placeholder_double() {
        let value = Raw::new_static("test ?? and data ?| array['a']");
        let raw = format_writer(value, Dialect::Postgres);
        assert_eq!("test ?? and data ?| array['a']", raw);
    }

    #[test]
    fn test_placeholder_count_mismatch() {
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::Postgres);
        assert!(Raw::new_static("a = ? and b = ?").bind(1).format_writer(&mut context).is_err());
        assert!(matches!(context.take_failure(), Some(Error::Compile(_))));

        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, Dialect::Postgres);
        assert!(Raw::new_static("a = 1").bind(1).format_writer(&mut context).is_err());
    }

    #[test]
    fn test_sql_alias() {
        let count = sql::<i64>("count(*)").alias("total");
        assert_eq!(Some(Ident::new_static("total")), count.alias);
        assert_eq!("count(*)", count.raw.as_str());
    }
}
