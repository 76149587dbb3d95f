use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;

/// Connection parameters and pool tuning for one database.
///
/// Everything except `engine` is handed to the client library verbatim.
/// Durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_connection_lifetime: u64,
    pub max_connection_idle_time: u64,
    pub health_check_period: u64,
    pub connect_timeout: u64,
    pub ping_timeout: u64
}
