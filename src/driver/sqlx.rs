use async_trait::async_trait;
use sqlx::{
    Any, AnyPool, Arguments, Column as _, Row as _, ValueRef as _,
    any::{AnyArguments, AnyPoolOptions, AnyRow},
    pool::PoolConnection,
};

use crate::{
    config::ConnectionConfig,
    dialect::Dialect,
    error::{Error, Result},
    query::{CompiledQuery, QueryKind},
    row::Row,
    value::Value,
};

use super::{DatabaseConnection, Driver, QueryResult};

/// Driver backed by a sqlx `Any` pool. The dialect follows the scheme of
/// the connection url.
///
/// The `Any` driver only knows integers, floats, text, blobs and booleans.
/// Dates, times and uuids are bound as text, so Postgres needs an explicit
/// cast (`sql::<Uuid>("?::uuid").bind(id)`) for `uuid` and `timestamptz` columns.
#[derive(Debug, Clone)]
pub struct SqlxDriver {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlxDriver {
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let dialect = Dialect::from_url(&config.url)
            .ok_or_else(|| Error::Config(format!("unsupported database url `{}`", config.url)))?;
        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;
        tracing::debug!(target: "strata.driver", %dialect, max_connections = config.max_connections, "pool connected");
        Ok(Self { pool, dialect })
    }

    pub fn from_pool(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl Driver for SqlxDriver {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn acquire_connection(&self) -> Result<Box<dyn DatabaseConnection>> {
        let connection = self.pool.acquire().await?;
        Ok(Box::new(SqlxConnection { connection }))
    }

    async fn destroy(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

struct SqlxConnection {
    connection: PoolConnection<Any>,
}

#[async_trait]
impl DatabaseConnection for SqlxConnection {
    async fn execute_query(&mut self, query: &CompiledQuery) -> Result<QueryResult> {
        let arguments = bind_arguments(&query.parameters)?;
        let statement = sqlx::query_with(&query.sql, arguments);
        match query.kind {
            QueryKind::Select | QueryKind::Raw => {
                let rows = statement.fetch_all(&mut *self.connection).await?;
                let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>>>()?;
                Ok(QueryResult::with_rows(rows))
            }
            QueryKind::Insert | QueryKind::Update | QueryKind::Delete => {
                let done = statement.execute(&mut *self.connection).await?;
                Ok(QueryResult {
                    rows: Vec::new(),
                    num_affected_rows: Some(done.rows_affected()),
                    insert_id: done.last_insert_id(),
                })
            }
        }
    }
}

fn bind_arguments(parameters: &[Value]) -> Result<AnyArguments<'static>> {
    let mut arguments = AnyArguments::default();
    for value in parameters {
        let added = match value.clone() {
            Value::Null => arguments.add(Option::<String>::None),
            Value::Bool(value) => arguments.add(value),
            Value::I16(value) => arguments.add(value),
            Value::I32(value) => arguments.add(value),
            Value::I64(value) => arguments.add(value),
            Value::F32(value) => arguments.add(value),
            Value::F64(value) => arguments.add(value),
            Value::String(value) => arguments.add(value),
            Value::Bytes(value) => arguments.add(value),
        };
        added.map_err(|err| Error::driver(format!("cannot bind parameter: {err}")))?;
    }
    Ok(arguments)
}

fn decode_row(row: &AnyRow) -> Result<Row> {
    let mut out = Row::new();
    for column in row.columns() {
        let index = column.ordinal();
        let name = column.name();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            Value::Null
        } else if let Ok(value) = row.try_get::<i64, _>(index) {
            Value::I64(value)
        } else if let Ok(value) = row.try_get::<f64, _>(index) {
            Value::F64(value)
        } else if let Ok(value) = row.try_get::<String, _>(index) {
            Value::String(value)
        } else if let Ok(value) = row.try_get::<bool, _>(index) {
            Value::Bool(value)
        } else if let Ok(value) = row.try_get::<Vec<u8>, _>(index) {
            Value::Bytes(value)
        } else {
            return Err(Error::decode(name, "unsupported column type"));
        };
        out.insert(name, value);
    }
    Ok(out)
}
