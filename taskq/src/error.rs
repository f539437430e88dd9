//! Error type definitions
//!
//! Provides all error types a producer can hit while building or enqueuing a task.

/// Result type alias for taskq
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for taskq
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Redis-related errors
    #[error("Redis error: {0}")]
    Redis(#[from] fred::error::RedisError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Task rejected before it was written
    #[error("Task validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error came from talking to the broker rather than from the task itself
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Redis(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<rmp_serde::encode::Error> for Error {
    fn from(e: rmp_serde::encode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for Error {
    fn from(e: rmp_serde::decode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        use fred::error::RedisErrorKind;
        assert!(Error::Redis(fred::error::RedisError::new(RedisErrorKind::IO, "refused")).is_transport());
        assert!(!Error::Config("test".to_string()).is_transport());
        assert!(!Error::Validation("test".to_string()).is_transport());
        assert!(!Error::Serialization("test".to_string()).is_transport());
    }

    #[test]
    fn test_display_keeps_cause() {
        let err = Error::Validation("queue name cannot be empty".into());
        assert_eq!(err.to_string(), "Task validation error: queue name cannot be empty");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
