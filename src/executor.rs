use std::{sync::Arc, time::Instant};

use tokio::sync::Mutex;

use crate::{
    config::LogConfig,
    dialect::Dialect,
    driver::{DatabaseConnection, Driver, QueryResult},
    error::{Error, Result},
    query::CompiledQuery,
};

/// Connection held by a running transaction. `None` once the transaction
/// has been committed or rolled back.
pub(crate) struct TransactionConnection {
    pub(crate) driver: Arc<dyn Driver>,
    pub(crate) connection: Mutex<Option<Box<dyn DatabaseConnection>>>,
}

#[derive(Clone)]
pub(crate) enum Provider {
    /// Compiles queries only.
    Noop,
    /// Acquires a pooled connection for every query.
    Driver(Arc<dyn Driver>),
    /// Runs every query on the connection of one transaction.
    Transaction(Arc<TransactionConnection>),
}

/// Runs compiled queries for every builder created from the same handle.
#[derive(Clone)]
pub(crate) struct QueryExecutor {
    dialect: Dialect,
    provider: Provider,
    log: LogConfig,
}

impl std::fmt::Debug for QueryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let provider = match self.provider {
            Provider::Noop => "noop",
            Provider::Driver(_) => "driver",
            Provider::Transaction(_) => "transaction",
        };
        f.debug_struct("QueryExecutor")
            .field("dialect", &self.dialect)
            .field("provider", &provider)
            .finish()
    }
}

impl QueryExecutor {
    pub(crate) fn noop(dialect: Dialect) -> Self {
        Self {
            dialect,
            provider: Provider::Noop,
            log: LogConfig::disabled(),
        }
    }

    pub(crate) fn new(driver: Arc<dyn Driver>, log: LogConfig) -> Self {
        Self {
            dialect: driver.dialect(),
            provider: Provider::Driver(driver),
            log,
        }
    }

    pub(crate) fn with_transaction(&self, transaction: Arc<TransactionConnection>) -> Self {
        Self {
            dialect: self.dialect,
            provider: Provider::Transaction(transaction),
            log: self.log.clone(),
        }
    }

    pub(crate) fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub(crate) fn provider(&self) -> &Provider {
        &self.provider
    }

    pub(crate) async fn execute(&self, query: &CompiledQuery) -> Result<QueryResult> {
        let started = Instant::now();
        let result = match &self.provider {
            Provider::Noop => Err(Error::NoExecutor),
            Provider::Driver(driver) => {
                let mut connection = driver.acquire_connection().await?;
                let result = connection.execute_query(query).await;
                // release even when the query failed
                let released = driver.release_connection(connection).await;
                match (result, released) {
                    (Ok(result), Ok(())) => Ok(result),
                    (Err(err), _) | (Ok(_), Err(err)) => Err(err),
                }
            }
            Provider::Transaction(transaction) => {
                let mut guard = transaction.connection.lock().await;
                match guard.as_mut() {
                    Some(connection) => connection.execute_query(query).await,
                    None => Err(Error::TransactionClosed),
                }
            }
        };
        self.log_query(query, started, &result);
        result
    }

    fn log_query(&self, query: &CompiledQuery, started: Instant, result: &Result<QueryResult>) {
        let elapsed = started.elapsed();
        match result {
            Ok(_) => {
                if self.log.queries {
                    tracing::debug!(
                        target: "strata.sql",
                        sql = %query.sql,
                        param_count = query.parameters.len(),
                        elapsed_us = elapsed.as_micros() as u64,
                        "query"
                    );
                }
                if let Some(threshold) = self.log.slow_query_threshold {
                    if elapsed >= threshold {
                        tracing::warn!(
                            target: "strata.sql",
                            sql = %query.sql,
                            elapsed_ms = elapsed.as_millis() as u64,
                            threshold_ms = threshold.as_millis() as u64,
                            "slow query"
                        );
                    }
                }
            }
            Err(err) => {
                if self.log.errors {
                    tracing::error!(
                        target: "strata.sql",
                        sql = %query.sql,
                        param_count = query.parameters.len(),
                        error = %err,
                        "query failed"
                    );
                }
            }
        }
    }
}
