use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    /// Guess the dialect from a connection url scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme)?;
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "mysql" | "mariadb" => Some(Self::MySql),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }

    pub(crate) fn supports_replace(self) -> bool {
        matches!(self, Self::MySql | Self::Sqlite)
    }

    pub(crate) fn begin_transaction_sql(self) -> &'static str {
        match self {
            Self::MySql => "start transaction",
            Self::Postgres | Self::Sqlite => "begin",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::MySql => f.write_str("mysql"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        assert_eq!(Some(Dialect::Postgres), Dialect::from_url("postgres://localhost/db"));
        assert_eq!(Some(Dialect::Postgres), Dialect::from_url("PostgreSQL://localhost/db"));
        assert_eq!(Some(Dialect::MySql), Dialect::from_url("mysql://root@localhost"));
        assert_eq!(Some(Dialect::Sqlite), Dialect::from_url("sqlite::memory:"));
        assert_eq!(None, Dialect::from_url("oracle://nope"));
        assert_eq!(None, Dialect::from_url("no scheme"));
    }

    #[test]
    fn test_replace_support() {
        assert!(!Dialect::Postgres.supports_replace());
        assert!(Dialect::MySql.supports_replace());
        assert!(Dialect::Sqlite.supports_replace());
    }
}
