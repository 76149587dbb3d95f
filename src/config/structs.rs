//! Configuration data structures.

/// Root configuration object.
pub mod configuration;

/// Database connection and pool tuning settings.
pub mod database_config;
