use std::fs::File;
use std::io::Write;
use std::str::FromStr;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig {
                engine: DatabaseDrivers::pgsql,
                host: String::from("localhost"),
                port: 5432,
                user: String::from("postgres"),
                password: String::from("postgres"),
                database: String::from("postgres"),
                max_connections: 10,
                min_connections: 2,
                max_connection_lifetime: 3600,
                max_connection_idle_time: 600,
                health_check_period: 30,
                connect_timeout: 5,
                ping_timeout: 3,
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads a TOML file, then applies `DBFACTORY_*` environment overrides.
    pub fn load_from_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let config = Self::load_file(path)?;
        Self::apply_env_overrides(config)
    }

    /// Starts from the defaults and applies `DBFACTORY_*` environment overrides.
    pub fn load_from_env() -> Result<Configuration, ConfigurationError> {
        Self::apply_env_overrides(Configuration::init())
    }

    pub fn apply_env_overrides(mut config: Configuration) -> Result<Configuration, ConfigurationError> {
        Self::env_override("DBFACTORY_LOG_LEVEL", &mut config.log_level)?;
        Self::env_override("DBFACTORY_DB_ENGINE", &mut config.database.engine)?;
        Self::env_override("DBFACTORY_DB_HOST", &mut config.database.host)?;
        Self::env_override("DBFACTORY_DB_PORT", &mut config.database.port)?;
        Self::env_override("DBFACTORY_DB_USER", &mut config.database.user)?;
        Self::env_override("DBFACTORY_DB_PASSWORD", &mut config.database.password)?;
        Self::env_override("DBFACTORY_DB_DATABASE", &mut config.database.database)?;
        Self::env_override("DBFACTORY_DB_MAX_CONNECTIONS", &mut config.database.max_connections)?;
        Self::env_override("DBFACTORY_DB_MIN_CONNECTIONS", &mut config.database.min_connections)?;
        Self::env_override("DBFACTORY_DB_MAX_CONNECTION_LIFETIME", &mut config.database.max_connection_lifetime)?;
        Self::env_override("DBFACTORY_DB_MAX_CONNECTION_IDLE_TIME", &mut config.database.max_connection_idle_time)?;
        Self::env_override("DBFACTORY_DB_HEALTH_CHECK_PERIOD", &mut config.database.health_check_period)?;
        Self::env_override("DBFACTORY_DB_CONNECT_TIMEOUT", &mut config.database.connect_timeout)?;
        Self::env_override("DBFACTORY_DB_PING_TIMEOUT", &mut config.database.ping_timeout)?;
        Ok(config)
    }

    fn env_override<T>(name: &str, target: &mut T) -> Result<(), ConfigurationError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        if let Ok(value) = std::env::var(name) {
            *target = value.parse::<T>()
                .map_err(|e| ConfigurationError::EnvError(format!("{}: {}", name, e)))?;
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
