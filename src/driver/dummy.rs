use async_trait::async_trait;

use crate::{dialect::Dialect, error::Result, query::CompiledQuery};

use super::{DatabaseConnection, Driver, QueryResult};

/// Driver that accepts every query and never returns rows. Useful for
/// compiling queries without a database.
#[derive(Debug, Clone, Copy)]
pub struct DummyDriver {
    dialect: Dialect,
}

impl DummyDriver {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

struct DummyConnection;

#[async_trait]
impl DatabaseConnection for DummyConnection {
    async fn execute_query(&mut self, _query: &CompiledQuery) -> Result<QueryResult> {
        Ok(QueryResult::default())
    }
}

#[async_trait]
impl Driver for DummyDriver {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn acquire_connection(&self) -> Result<Box<dyn DatabaseConnection>> {
        Ok(Box::new(DummyConnection))
    }
}
