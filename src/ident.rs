use std::{borrow::Cow, fmt, sync::Arc};

use smol_str::SmolStr;

use crate::writer::{FormatContext, FormatWriter};

/// A quoted sql identifier, such as a table alias or a cte name.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(SmolStr);

impl Ident {
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    #[inline]
    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatWriter for Ident {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.write_table(self.as_str())
    }
}

pub trait IntoIdent {
    fn into_ident(self) -> Ident;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Ident {
        self
    }
}

impl IntoIdent for char {
    fn into_ident(self) -> Ident {
        Ident::new(smol_str::format_smolstr!("{}", self))
    }
}

impl IntoIdent for &str {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for &String {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for String {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Box<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Arc<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Cow<'_, str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for SmolStr {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_format_ident_simple() {
        let ident = Ident::new_static("users");
        let ident = format_writer(ident, Dialect::Postgres);
        assert_eq!("\"users\"", ident);
        let ident = Ident::new_static("users");
        let ident = format_writer(ident, Dialect::MySql);
        assert_eq!("`users`", ident)
    }

    #[test]
    fn test_format_writer_spaces() {
        let ident = Ident::new_static("an sql table");
        let ident = format_writer(ident, Dialect::Postgres);
        assert_eq!("\"an sql table\"", ident);
    }

    #[test]
    fn test_format_writer_quote() {
        let ident = Ident::new_static("us\"ers");
        let ident = format_writer(ident, Dialect::Postgres);
        assert_eq!("\"us\"\"ers\"", ident);
        let ident = Ident::new_static("us`ers");
        let ident = format_writer(ident, Dialect::Postgres);
        assert_eq!("\"us`ers\"", ident);
        let ident = Ident::new_static("us`ers");
        let ident = format_writer(ident, Dialect::MySql);
        assert_eq!("`us``ers`", ident);
    }

    #[test]
    fn test_format_writer_dot() {
        let ident = Ident::new_static("x.y");
        let ident = format_writer(ident, Dialect::Postgres);
        assert_eq!("\"x\".\"y\"", ident);
        let ident = Ident::new_static("x.y");
        let ident = format_writer(ident, Dialect::MySql);
        assert_eq!("`x`.`y`", ident);
    }

    #[test]
    fn test_into_ident() {
        assert_eq!(Ident::new_static("p"), 'p'.into_ident());
        assert_eq!(Ident::new_static("fn"), String::from("fn").into_ident());
        assert_eq!("fn", "fn".into_ident().to_string());
    }
}
