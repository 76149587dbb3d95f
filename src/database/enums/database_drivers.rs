use serde::{
    Deserialize,
    Serialize
};
use std::fmt;
use std::str::FromStr;
use crate::database::errors::DatabaseError;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DatabaseDrivers {
    #[serde(alias = "postgres")]
    pgsql,
    mysql,
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
            DatabaseDrivers::mysql => write!(f, "mysql"),
        }
    }
}

impl FromStr for DatabaseDrivers {
    type Err = DatabaseError;

    /// Rejects anything that is not a known driver identifier, so unknown
    /// engines never get as far as a connection attempt.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pgsql" | "postgres" => Ok(DatabaseDrivers::pgsql),
            "mysql" => Ok(DatabaseDrivers::mysql),
            other => Err(DatabaseError::UnsupportedDriver(other.to_string())),
        }
    }
}

impl DatabaseDrivers {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            DatabaseDrivers::pgsql => "postgres://",
            DatabaseDrivers::mysql => "mysql://",
        }
    }
}
