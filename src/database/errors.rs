use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Unsupported database driver: {0}")]
    UnsupportedDriver(String),

    #[error("Connection open failed: {0}")]
    ConnectionOpenFailed(String),

    #[error("Liveness check failed: {0}")]
    LivenessCheckFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_driver_display() {
        let error = DatabaseError::UnsupportedDriver("mongodb".to_string());
        assert_eq!(format!("{}", error), "Unsupported database driver: mongodb");
    }

    #[test]
    fn test_connection_open_failed_display() {
        let error = DatabaseError::ConnectionOpenFailed("connection refused".to_string());
        assert_eq!(format!("{}", error), "Connection open failed: connection refused");
    }

    #[test]
    fn test_liveness_check_failed_display() {
        let error = DatabaseError::LivenessCheckFailed("ping timed out after 3s".to_string());
        assert_eq!(format!("{}", error), "Liveness check failed: ping timed out after 3s");
    }

    #[test]
    fn test_query_error_from_sqlx() {
        let error: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, DatabaseError::QueryError(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = DatabaseError::UnsupportedDriver("oracle".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnsupportedDriver"));
        assert!(debug_str.contains("oracle"));
    }
}
