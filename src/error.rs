use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("stale version for {kind} {id}: expected {expected}")]
    StaleVersion {
        kind: &'static str,
        id: String,
        expected: i64,
    },

    #[error("record store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for StockroomError {
    fn from(err: toml::de::Error) -> Self {
        StockroomError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for StockroomError {
    fn from(err: toml::ser::Error) -> Self {
        StockroomError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl StockroomError {
    /// Machine-readable class for the GraphQL error list.
    pub fn code(&self) -> &'static str {
        match self {
            StockroomError::NotFound { .. } => "NOT_FOUND",
            StockroomError::Validation(_) => "VALIDATION",
            StockroomError::StaleVersion { .. } => "CONFLICT",
            StockroomError::Store(_) => "STORE_UNAVAILABLE",
            StockroomError::Config(_) => "CONFIG",
            StockroomError::Io(_) => "IO",
            StockroomError::Serialization(_) => "SERIALIZATION",
        }
    }
}

impl ErrorExtensions for StockroomError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, StockroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let not_found = StockroomError::NotFound {
            kind: "Category",
            id: "42".to_string(),
        };
        assert_eq!(not_found.code(), "NOT_FOUND");

        let stale = StockroomError::StaleVersion {
            kind: "Book",
            id: "1".to_string(),
            expected: 3,
        };
        assert_eq!(stale.code(), "CONFLICT");

        assert_eq!(
            StockroomError::Validation("title must not be empty".to_string()).code(),
            "VALIDATION"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = StockroomError::NotFound {
            kind: "Book",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Book not found: 7");
    }

    #[test]
    fn test_extensions_carry_code() {
        let err = StockroomError::Validation("id must be numeric".to_string());
        let extended = err.extend();
        let extensions = extended.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION"))
        );
    }
}
