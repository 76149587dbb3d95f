//! # dbfactory
//!
//! A small connection factory for PostgreSQL and MySQL pools built on sqlx.
//!
//! ## Overview
//!
//! Given a [`config::structs::database_config::DatabaseConfig`], the factory
//! selects the matching backend, opens a connection pool with the configured
//! sizing and lifetimes, verifies the pool with a bounded liveness probe and
//! returns a ready-to-use handle. Query execution, transaction semantics and
//! pool internals remain the responsibility of sqlx; this crate only maps
//! configuration onto the right client library and refuses to hand back a
//! handle it has not seen answer a ping.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dbfactory::config::structs::configuration::Configuration;
//! use dbfactory::database::structs::database_connector::DatabaseConnector;
//! use dbfactory::database::traits::database_backend::DatabaseBackend;
//!
//! let config = Configuration::load_from_file("config.toml")?;
//! let connector = DatabaseConnector::new(&config.database).await?;
//! let row = connector.fetch_one("SELECT 1 AS alive").await?;
//! connector.close().await;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Backend dispatch, connectors and the capability trait
//! - [`logging`] - Console logging setup

/// Configuration management module.
///
/// Handles loading, parsing and saving configuration from TOML files,
/// with environment variable overrides on top.
pub mod config;

/// Database backend module.
///
/// Provides the driver enumeration, the PostgreSQL and MySQL connectors,
/// the unified dispatching connector and the `DatabaseBackend` trait.
pub mod database;

/// Console logging setup via fern.
pub mod logging;
