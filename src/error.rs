use crate::dialect::Dialect;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query expected at least one row and got none
    #[error("no result")]
    NoResult,

    /// The handle has no driver attached
    #[error("no executor attached to this handle")]
    NoExecutor,

    #[error("a transaction is already running on this handle")]
    NestedTransaction,

    #[error("transaction is already committed or rolled back")]
    TransactionClosed,

    #[error("{feature} is not supported by {dialect}")]
    Unsupported {
        feature: &'static str,
        dialect: Dialect,
    },

    /// Ordering by a name that is not one of the selections
    #[error("unknown selection `{0}`")]
    UnknownSelection(String),

    #[error("insert query has no rows")]
    EmptyInsert,

    #[error("update query sets no columns")]
    EmptyUpdate,

    #[error("compile error: {0}")]
    Compile(String),

    #[error("decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    #[error("driver error: {0}")]
    Driver(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl Error {
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver(message.into())
    }

    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult)
    }
}
