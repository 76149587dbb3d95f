use std::time::{Duration, Instant};
use serde_json::Value;
use dbfactory::config::structs::configuration::Configuration;
use dbfactory::config::structs::database_config::DatabaseConfig;
use dbfactory::database::enums::database_drivers::DatabaseDrivers;
use dbfactory::database::errors::DatabaseError;
use dbfactory::database::structs::database_connector::DatabaseConnector;
use dbfactory::database::traits::database_backend::DatabaseBackend;

fn unreachable_config(engine: DatabaseDrivers) -> DatabaseConfig {
    let mut config = Configuration::init().database;
    config.engine = engine;
    config.host = String::from("127.0.0.1");
    config.port = 1;
    config.connect_timeout = 2;
    config.ping_timeout = 2;
    config
}

/// Builds a live test config from `DBFACTORY_TEST_<ENGINE>_*` variables.
/// Returns `None` (skipping the test) when no host is configured.
fn live_config(engine: DatabaseDrivers, prefix: &str) -> Option<DatabaseConfig> {
    let host = std::env::var(format!("{}_HOST", prefix)).ok()?;
    let mut config = Configuration::init().database;
    config.engine = engine;
    config.host = host;
    config.port = match engine {
        DatabaseDrivers::pgsql => 5432,
        DatabaseDrivers::mysql => 3306,
    };
    if let Ok(port) = std::env::var(format!("{}_PORT", prefix)) {
        config.port = port.parse().expect("test port should be numeric");
    }
    if let Ok(user) = std::env::var(format!("{}_USER", prefix)) {
        config.user = user;
    }
    if let Ok(password) = std::env::var(format!("{}_PASSWORD", prefix)) {
        config.password = password;
    }
    if let Ok(database) = std::env::var(format!("{}_DATABASE", prefix)) {
        config.database = database;
    }
    Some(config)
}

#[tokio::test]
async fn test_pgsql_unreachable_host_fails_within_bound() {
    let config = unreachable_config(DatabaseDrivers::pgsql);
    let started = Instant::now();
    let result = DatabaseConnector::new(&config).await;
    assert!(matches!(result, Err(DatabaseError::ConnectionOpenFailed(_))), "expected ConnectionOpenFailed");
    assert!(started.elapsed() < Duration::from_secs(30), "connect attempt should not hang");
}

#[tokio::test]
async fn test_mysql_unreachable_host_fails_within_bound() {
    let config = unreachable_config(DatabaseDrivers::mysql);
    let started = Instant::now();
    let result = DatabaseConnector::new(&config).await;
    assert!(matches!(result, Err(DatabaseError::ConnectionOpenFailed(_))), "expected ConnectionOpenFailed");
    assert!(started.elapsed() < Duration::from_secs(30), "connect attempt should not hang");
}

#[tokio::test]
async fn test_failed_open_holds_no_state_across_calls() {
    let config = unreachable_config(DatabaseDrivers::pgsql);

    let first = DatabaseConnector::new(&config).await;
    assert!(first.is_err(), "first attempt should fail");

    // A failed open must not leave anything behind that poisons a retry.
    let second = DatabaseConnector::new(&config).await;
    assert!(matches!(second, Err(DatabaseError::ConnectionOpenFailed(_))));
}

#[tokio::test]
async fn test_pgsql_end_to_end() {
    let Some(config) = live_config(DatabaseDrivers::pgsql, "DBFACTORY_TEST_PGSQL") else {
        return;
    };

    let connector = DatabaseConnector::new(&config).await.expect("pgsql should connect");
    assert_eq!(connector.engine(), Some(DatabaseDrivers::pgsql));
    connector.ping().await.expect("pgsql should answer ping");

    let row = connector.fetch_one("SELECT 1 AS alive").await.expect("trivial query should succeed");
    assert_eq!(row.get("alive"), Some(&Value::from(1)));

    let rows = connector.fetch_all("SELECT 1 AS a UNION ALL SELECT 2").await.expect("multi-row query should succeed");
    assert_eq!(rows.len(), 2);

    let mut transaction = connector.begin().await.expect("transaction should start");
    transaction.execute("SELECT 1").await.expect("statement inside transaction should run");
    transaction.rollback().await.expect("rollback should succeed");

    connector.close().await;
    assert!(connector.ping().await.is_err(), "closed pool should refuse to ping");
}

#[tokio::test]
async fn test_mysql_end_to_end() {
    let Some(config) = live_config(DatabaseDrivers::mysql, "DBFACTORY_TEST_MYSQL") else {
        return;
    };

    let connector = DatabaseConnector::new(&config).await.expect("mysql should connect");
    assert_eq!(connector.engine(), Some(DatabaseDrivers::mysql));
    connector.ping().await.expect("mysql should answer ping");

    let row = connector.fetch_one("SELECT 1 AS alive").await.expect("trivial query should succeed");
    assert_eq!(row.get("alive"), Some(&Value::from(1)));

    let mut transaction = connector.begin().await.expect("transaction should start");
    transaction.execute("SELECT 1").await.expect("statement inside transaction should run");
    transaction.commit().await.expect("commit should succeed");

    connector.close().await;
    assert!(connector.ping().await.is_err(), "closed pool should refuse to ping");
}
