//! Database connector structures.

/// Main database connector providing unified, driver-dispatched access.
pub mod database_connector;

/// MySQL/MariaDB-specific database connector implementation.
pub mod database_connector_mysql;

/// PostgreSQL-specific database connector implementation.
pub mod database_connector_pgsql;

/// Backend-neutral row representation returned by query operations.
pub mod database_row;
