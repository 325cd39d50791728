mod types;

pub use types::{Config, ServerConfig, StoreConfig};

use crate::error::{Result, StockroomError};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StockroomError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: Config = toml::from_str(&contents)?;

    config.store.validate().map_err(StockroomError::Config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.store.validate().map_err(StockroomError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string).map_err(|e| {
        StockroomError::Config(format!("Failed to write config file '{}': {}", path, e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]
port = 4000
bind = "0.0.0.0"

[store]
database_url = "sqlite://stockroom.db"
max_connections = 5
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(config.is_ok());

        let config = config.unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.store.database_url, "sqlite://stockroom.db");
        assert_eq!(config.store.max_connections, 5);
    }

    #[test]
    fn test_load_config_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]

[store]
database_url = "sqlite://stockroom.db"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.store.max_connections, 5);
    }

    #[test]
    fn test_load_invalid_database_url() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]
port = 4000

[store]
database_url = "mysql://localhost/catalog"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(config.is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let config = Config {
            server: ServerConfig {
                port: 8080,
                bind: "127.0.0.1".to_string(),
            },
            store: StoreConfig {
                database_url: "sqlite://catalog.db".to_string(),
                max_connections: 2,
            },
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded_config = load_config(path).unwrap();

        assert_eq!(loaded_config.server.port, 8080);
        assert_eq!(loaded_config.server.bind, "127.0.0.1");
        assert_eq!(loaded_config.store.database_url, "sqlite://catalog.db");
        assert_eq!(loaded_config.store.max_connections, 2);
    }
}
