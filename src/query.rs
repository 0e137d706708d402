use crate::{
    dialect::Dialect,
    error::{Error, Result},
    value::Value,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Select,
    Insert,
    Update,
    Delete,
    Raw,
}

/// Sql text plus the parameters bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub parameters: Vec<Value>,
    pub kind: QueryKind,
}

impl CompiledQuery {
    pub fn raw<T: Into<String>>(sql: T) -> Self {
        Self {
            sql: sql.into(),
            parameters: Vec::new(),
            kind: QueryKind::Raw,
        }
    }

    pub(crate) fn from_ast<T: FormatWriter>(ast: &T, dialect: Dialect, kind: QueryKind) -> Result<Self> {
        let mut sql = String::with_capacity(64);
        let mut context = FormatContext::new(&mut sql, dialect);
        if ast.format_writer(&mut context).is_err() {
            return Err(context
                .take_failure()
                .unwrap_or_else(|| Error::Compile("failed to write query".to_owned())));
        }
        let parameters = std::mem::take(&mut context.params);
        Ok(Self {
            sql,
            parameters,
            kind,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    /// Auto increment id of the last inserted row, mysql and sqlite only.
    pub insert_id: Option<i64>,
    pub num_inserted_or_updated_rows: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub num_updated_rows: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub num_deleted_rows: u64,
}
