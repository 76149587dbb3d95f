use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use serde_json::{Map, Value};
use sqlx::{Column, ConnectOptions, Connection, Pool, Postgres, Row, Transaction};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::helpers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_row::DatabaseRow;
use crate::database::traits::database_backend::{DatabaseBackend, DatabaseTransaction};

impl DatabaseConnectorPgSQL {
    /// Maps the pool tuning fields onto sqlx pool options, verbatim.
    ///
    /// sqlx has no timer-driven health check; a nonzero `health_check_period`
    /// enables its acquire-time liveness testing instead.
    pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions
    {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .max_lifetime(Duration::from_secs(config.max_connection_lifetime))
            .idle_timeout(Duration::from_secs(config.max_connection_idle_time))
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .test_before_acquire(config.health_check_period > 0)
    }

    pub async fn create(config: &DatabaseConfig) -> Result<Pool<Postgres>, DatabaseError>
    {
        let options = PgConnectOptions::from_str(helpers::pgsql_dsn(config).as_str())
            .map_err(|e| DatabaseError::ConnectionOpenFailed(e.to_string()))?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        Self::pool_options(config)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionOpenFailed(e.to_string()))
    }

    pub async fn database_connector(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError>
    {
        let pool = Self::create(config).await?;
        let pgsql = DatabaseConnectorPgSQL { pool };

        // The pool must answer one bounded ping before it leaves this function.
        match tokio::time::timeout(Duration::from_secs(config.ping_timeout), pgsql.ping()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                pgsql.pool.close().await;
                return Err(e);
            }
            Err(_) => {
                pgsql.pool.close().await;
                return Err(DatabaseError::LivenessCheckFailed(
                    format!("no ping response within {}s", config.ping_timeout)
                ));
            }
        }

        info!("[PgSQL] Connected to {}:{}/{}", config.host, config.port, config.database);
        Ok(DatabaseConnector {
            mysql: None,
            pgsql: Some(pgsql),
            engine: Some(DatabaseDrivers::pgsql),
        })
    }

    fn decode_row(row: &PgRow) -> DatabaseRow
    {
        let mut columns = Map::new();
        for (index, column) in row.columns().iter().enumerate() {
            let value = if let Ok(v) = row.try_get::<i64, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<i32, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<i16, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<f64, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<f32, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<bool, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get::<String, _>(index) {
                Value::from(v)
            } else {
                Value::Null
            };
            columns.insert(column.name().to_string(), value);
        }
        DatabaseRow::from(columns)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorPgSQL {
    async fn ping(&self) -> Result<(), DatabaseError> {
        let mut connection = self.pool.acquire().await
            .map_err(|e| DatabaseError::LivenessCheckFailed(e.to_string()))?;
        connection.ping().await
            .map_err(|e| DatabaseError::LivenessCheckFailed(e.to_string()))
    }

    async fn fetch_all(&self, query: &str) -> Result<Vec<DatabaseRow>, DatabaseError> {
        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(Self::decode_row).collect())
    }

    async fn fetch_one(&self, query: &str) -> Result<DatabaseRow, DatabaseError> {
        let row = sqlx::query(query).fetch_one(&self.pool).await?;
        Ok(Self::decode_row(&row))
    }

    async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        Ok(sqlx::query(query).execute(&self.pool).await?.rows_affected())
    }

    async fn begin(&self) -> Result<Box<dyn DatabaseTransaction>, DatabaseError> {
        let transaction = self.pool.begin().await?;
        Ok(Box::new(transaction))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DatabaseTransaction for Transaction<'static, Postgres> {
    async fn execute(&mut self, query: &str) -> Result<u64, DatabaseError> {
        Ok(sqlx::query(query).execute(&mut **self).await?.rows_affected())
    }

    async fn commit(self: Box<Self>) -> Result<(), DatabaseError> {
        Transaction::commit(*self).await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DatabaseError> {
        Transaction::rollback(*self).await?;
        Ok(())
    }
}
