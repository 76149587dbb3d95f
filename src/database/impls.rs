//! Implementation blocks for the database connectors.

/// Driver dispatch and delegation for the unified connector.
pub mod database_connector;

/// MySQL/MariaDB pool construction and backend implementation.
pub mod database_connector_mysql;

/// PostgreSQL pool construction and backend implementation.
pub mod database_connector_pgsql;

/// Accessors for the backend-neutral row type.
pub mod database_row;
