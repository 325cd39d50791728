use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database URL (e.g., "sqlite://stockroom.db")
    pub database_url: String,

    /// Maximum connections held by the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(format!(
                "Database URL '{}' must be a SQLite URL (sqlite:...)",
                self.database_url
            ));
        }

        if self.max_connections == 0 {
            return Err("max_connections must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_validation_valid() {
        let store = StoreConfig {
            database_url: "sqlite://stockroom.db".to_string(),
            max_connections: 5,
        };

        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_store_validation_memory_url() {
        let store = StoreConfig {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };

        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_store_validation_invalid_scheme() {
        let store = StoreConfig {
            database_url: "postgres://localhost/catalog".to_string(),
            max_connections: 5,
        };

        assert!(store.validate().is_err());
    }

    #[test]
    fn test_store_validation_zero_connections() {
        let store = StoreConfig {
            database_url: "sqlite://stockroom.db".to_string(),
            max_connections: 0,
        };

        assert!(store.validate().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 4000);
        assert_eq!(server.bind, "0.0.0.0");
    }
}
