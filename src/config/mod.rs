//! Configuration management module.
//!
//! This module handles loading, parsing and saving the factory configuration
//! from TOML files. Environment variables prefixed with `DBFACTORY_` are
//! applied on top of whatever the file (or the defaults) provided, so a
//! deployment can keep credentials out of the file entirely.
//!
//! # Configuration Structure
//!
//! The configuration file contains:
//! - **log_level**: Console log verbosity (`off` through `trace`)
//! - **database**: Driver selection, connection parameters and pool tuning
//!
//! # Example
//!
//! ```rust,ignore
//! use dbfactory::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, then apply DBFACTORY_* overrides.
//! let config = Configuration::load_from_file("config.toml")?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (error types).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
