//! Database drivers.
//!
//! A [`Driver`] hands out [`DatabaseConnection`]s and runs the transaction
//! statements on them. Queries arrive already compiled for the driver's
//! dialect.

use async_trait::async_trait;

use crate::{
    dialect::Dialect,
    error::Result,
    query::CompiledQuery,
    row::Row,
};

mod dummy;
#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
mod sqlx;

pub use dummy::DummyDriver;
#[cfg(any(feature = "postgres", feature = "mysql", feature = "sqlite"))]
pub use sqlx::SqlxDriver;

/// What a connection returns for one statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    pub num_affected_rows: Option<u64>,
    /// Auto increment id of the last inserted row, when the database
    /// reports one.
    pub insert_id: Option<i64>,
}

impl QueryResult {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn affected(num_affected_rows: u64) -> Self {
        Self {
            num_affected_rows: Some(num_affected_rows),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait DatabaseConnection: Send {
    async fn execute_query(&mut self, query: &CompiledQuery) -> Result<QueryResult>;
}

#[async_trait]
pub trait Driver: Send + Sync + 'static {
    fn dialect(&self) -> Dialect;

    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn acquire_connection(&self) -> Result<Box<dyn DatabaseConnection>>;

    async fn release_connection(&self, connection: Box<dyn DatabaseConnection>) -> Result<()> {
        drop(connection);
        Ok(())
    }

    async fn begin_transaction(&self, connection: &mut dyn DatabaseConnection) -> Result<()> {
        let query = CompiledQuery::raw(self.dialect().begin_transaction_sql());
        connection.execute_query(&query).await.map(|_| ())
    }

    async fn commit_transaction(&self, connection: &mut dyn DatabaseConnection) -> Result<()> {
        connection.execute_query(&CompiledQuery::raw("commit")).await.map(|_| ())
    }

    async fn rollback_transaction(&self, connection: &mut dyn DatabaseConnection) -> Result<()> {
        connection.execute_query(&CompiledQuery::raw("rollback")).await.map(|_| ())
    }

    async fn destroy(&self) -> Result<()> {
        Ok(())
    }
}
