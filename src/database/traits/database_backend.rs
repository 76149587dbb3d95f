use async_trait::async_trait;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_row::DatabaseRow;

/// What downstream code is allowed to do with a verified pool.
///
/// Both backend connectors and the dispatching [`crate::database::structs::database_connector::DatabaseConnector`]
/// implement this, so consumers can run against a fake in tests instead of
/// a live database.
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn fetch_all(&self, query: &str) -> Result<Vec<DatabaseRow>, DatabaseError>;

    async fn fetch_one(&self, query: &str) -> Result<DatabaseRow, DatabaseError>;

    async fn execute(&self, query: &str) -> Result<u64, DatabaseError>;

    async fn begin(&self) -> Result<Box<dyn DatabaseTransaction>, DatabaseError>;

    async fn close(&self);
}

#[async_trait]
pub trait DatabaseTransaction: Send {
    async fn execute(&mut self, query: &str) -> Result<u64, DatabaseError>;

    async fn commit(self: Box<Self>) -> Result<(), DatabaseError>;

    async fn rollback(self: Box<Self>) -> Result<(), DatabaseError>;
}
