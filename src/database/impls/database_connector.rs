use async_trait::async_trait;
use log::debug;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::helpers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_row::DatabaseRow;
use crate::database::traits::database_backend::{DatabaseBackend, DatabaseTransaction};

impl DatabaseConnector {
    /// Opens and verifies a pool for the configured driver.
    ///
    /// The dispatcher itself opens no network resources; it hands the
    /// unchanged config to the matching backend connector.
    pub async fn new(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError>
    {
        debug!("[{}] Opening connection pool for {}:{}/{}", helpers::engine_name(config.engine), config.host, config.port, config.database);
        match config.engine {
            DatabaseDrivers::pgsql => DatabaseConnectorPgSQL::database_connector(config).await,
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::database_connector(config).await,
        }
    }

    pub fn engine(&self) -> Option<DatabaseDrivers> {
        self.engine
    }

    pub fn backend(&self) -> Option<&dyn DatabaseBackend> {
        match self.engine.as_ref()? {
            DatabaseDrivers::pgsql => self.pgsql.as_ref().map(|p| p as &dyn DatabaseBackend),
            DatabaseDrivers::mysql => self.mysql.as_ref().map(|m| m as &dyn DatabaseBackend),
        }
    }

    fn active_backend(&self) -> Result<&dyn DatabaseBackend, DatabaseError> {
        self.backend().ok_or_else(|| {
            DatabaseError::ConnectionOpenFailed("no database engine configured".to_string())
        })
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnector {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.active_backend()?.ping().await
    }

    async fn fetch_all(&self, query: &str) -> Result<Vec<DatabaseRow>, DatabaseError> {
        self.active_backend()?.fetch_all(query).await
    }

    async fn fetch_one(&self, query: &str) -> Result<DatabaseRow, DatabaseError> {
        self.active_backend()?.fetch_one(query).await
    }

    async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        self.active_backend()?.execute(query).await
    }

    async fn begin(&self) -> Result<Box<dyn DatabaseTransaction>, DatabaseError> {
        self.active_backend()?.begin().await
    }

    async fn close(&self) {
        if let Some(backend) = self.backend() {
            backend.close().await;
        }
    }
}
