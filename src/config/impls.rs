//! Implementation blocks for configuration loading/saving.

/// Loading, saving and environment overrides for [`crate::config::structs::configuration::Configuration`].
pub mod configuration;

/// Display/Error implementations for configuration errors.
pub mod configuration_error;
