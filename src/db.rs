use std::{ops::Deref, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    config::Config,
    creator::QueryCreator,
    dialect::Dialect,
    driver::{Driver, DummyDriver},
    error::{Error, Result},
    executor::{Provider, QueryExecutor, TransactionConnection},
};

/// Connection handle for the schema `S`. Cloning is cheap and every clone
/// shares the driver.
///
/// Queries are started through the [`QueryCreator`] methods this handle
/// dereferences to.
pub struct Db<S> {
    creator: QueryCreator<S>,
}

impl<S> Clone for Db<S> {
    fn clone(&self) -> Self {
        Self {
            creator: self.creator.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Db<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").field("creator", &self.creator).finish()
    }
}

impl<S> Deref for Db<S> {
    type Target = QueryCreator<S>;

    fn deref(&self) -> &Self::Target {
        &self.creator
    }
}

impl<S> Db<S> {
    pub fn new<D: Driver>(driver: D) -> Self {
        Self::with_config(driver, Config::default())
    }

    pub fn with_config<D: Driver>(driver: D, config: Config) -> Self {
        Self::from_driver(Arc::new(driver), config)
    }

    pub fn from_driver(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self {
            creator: QueryCreator::new(QueryExecutor::new(driver, config.log)),
        }
    }

    /// Handle backed by a [`DummyDriver`]: queries compile and execute but
    /// never return rows.
    pub fn dummy(dialect: Dialect) -> Self {
        Self::new(DummyDriver::new(dialect))
    }

    /// Handle that can compile queries but not run them.
    pub fn compile_only(dialect: Dialect) -> Self {
        Self {
            creator: QueryCreator::new(QueryExecutor::noop(dialect)),
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self.creator.executor().provider(), Provider::Transaction(_))
    }

    /// Acquire a connection and start a transaction on it. Every query of
    /// the returned handle runs on that connection.
    pub async fn begin_transaction(&self) -> Result<Transaction<S>> {
        let executor = self.creator.executor();
        let driver = match executor.provider() {
            Provider::Noop => return Err(Error::NoExecutor),
            Provider::Transaction(_) => return Err(Error::NestedTransaction),
            Provider::Driver(driver) => driver.clone(),
        };

        let mut connection = driver.acquire_connection().await?;
        if let Err(err) = driver.begin_transaction(&mut *connection).await {
            if let Err(release) = driver.release_connection(connection).await {
                tracing::warn!(target: "strata.transaction", error = %release, "failed to release connection");
            }
            return Err(err);
        }
        tracing::debug!(target: "strata.transaction", "begin");

        let transaction = Arc::new(TransactionConnection {
            driver,
            connection: Mutex::new(Some(connection)),
        });
        Ok(Transaction {
            db: Db {
                creator: QueryCreator::new(executor.with_transaction(transaction)),
            },
        })
    }

    /// Run `body` in a transaction. It is committed when `body` returns
    /// `Ok` and rolled back otherwise. A transaction `body` already
    /// finished itself is left alone.
    pub async fn transaction<T, E, B>(&self, body: B) -> Result<T, E>
    where
        B: AsyncFnOnce(Transaction<S>) -> Result<T, E>,
        E: From<Error>,
    {
        let transaction = self.begin_transaction().await?;
        match body(transaction.clone()).await {
            Ok(value) => {
                if transaction.is_open().await {
                    transaction.commit().await?;
                }
                Ok(value)
            }
            Err(err) => {
                if transaction.is_open().await {
                    if let Err(rollback) = transaction.rollback().await {
                        tracing::warn!(target: "strata.transaction", error = %rollback, "rollback failed");
                    }
                }
                Err(err)
            }
        }
    }

    /// Close the driver, for example the connection pool.
    pub async fn destroy(&self) -> Result<()> {
        match self.creator.executor().provider() {
            Provider::Noop => Ok(()),
            Provider::Driver(driver) => driver.destroy().await,
            Provider::Transaction(transaction) => transaction.driver.destroy().await,
        }
    }
}

/// A handle whose queries run inside one transaction.
///
/// It dereferences to [`Db`] and converts into one, so it can be passed
/// wherever a connection handle is expected.
pub struct Transaction<S> {
    db: Db<S>,
}

impl<S> Clone for Transaction<S> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone() }
    }
}

impl<S> std::fmt::Debug for Transaction<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction").field("db", &self.db).finish()
    }
}

impl<S> Deref for Transaction<S> {
    type Target = Db<S>;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

impl<S> From<Transaction<S>> for Db<S> {
    fn from(transaction: Transaction<S>) -> Self {
        transaction.db
    }
}

#[derive(Debug, Clone, Copy)]
enum Finish {
    Commit,
    Rollback,
}

impl<S> Transaction<S> {
    pub async fn commit(self) -> Result<()> {
        self.finish(Finish::Commit).await
    }

    pub async fn rollback(self) -> Result<()> {
        self.finish(Finish::Rollback).await
    }

    /// `false` once any clone of this transaction committed or rolled back.
    pub async fn is_open(&self) -> bool {
        match self.db.creator.executor().provider() {
            Provider::Transaction(transaction) => transaction.connection.lock().await.is_some(),
            _ => false,
        }
    }

    async fn finish(self, finish: Finish) -> Result<()> {
        let Provider::Transaction(transaction) = self.db.creator.executor().provider() else {
            return Err(Error::TransactionClosed);
        };
        let Some(mut connection) = transaction.connection.lock().await.take() else {
            return Err(Error::TransactionClosed);
        };

        let driver = &transaction.driver;
        let result = match finish {
            Finish::Commit => driver.commit_transaction(&mut *connection).await,
            Finish::Rollback => driver.rollback_transaction(&mut *connection).await,
        };
        let released = driver.release_connection(connection).await;
        match &result {
            Ok(()) => tracing::debug!(target: "strata.transaction", action = ?finish, "finished"),
            Err(err) => tracing::error!(target: "strata.transaction", action = ?finish, error = %err, "failed"),
        }
        result.and(released)
    }
}
