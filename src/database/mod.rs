//! Database backend module.
//!
//! This module turns a [`crate::config::structs::database_config::DatabaseConfig`]
//! into a live, verified connection pool for one of the supported backends.
//!
//! # Supported Backends
//!
//! - **PostgreSQL**: via `sqlx::postgres`, pooled
//! - **MySQL/MariaDB**: via `sqlx::mysql`, pooled
//!
//! # Architecture
//!
//! The module uses a trait-based design:
//! - `DatabaseBackend` trait defines the minimal capability surface
//! - Each backend has its own connector implementation
//! - `DatabaseConnector` dispatches on the configured driver and provides
//!   unified access
//!
//! Opening a pool always ends with a bounded liveness probe; a pool that
//! does not answer the probe is closed again and never handed to the
//! caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use dbfactory::database::structs::database_connector::DatabaseConnector;
//!
//! let connector = DatabaseConnector::new(&config.database).await?;
//! // Query operations through the DatabaseBackend trait...
//! ```

/// Database driver enumeration (pgsql, mysql).
pub mod enums;

/// Error types for connection and query operations.
pub mod errors;

/// DSN construction and naming helpers.
pub mod helpers;

/// Implementation blocks for the connectors.
pub mod impls;

/// Data structures for database connections.
pub mod structs;

/// Database backend trait definitions.
pub mod traits;
