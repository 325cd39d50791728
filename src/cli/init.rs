use stockroom::config::{Config, ServerConfig, StoreConfig};
use stockroom::error::Result;

/// Run the init command to generate an example configuration
pub fn run(output: Option<String>, database_url: Option<String>) -> Result<()> {
    let database_url = database_url.unwrap_or_else(|| "sqlite://stockroom.db".to_string());

    let config = Config {
        server: ServerConfig::default(),
        store: StoreConfig {
            database_url,
            max_connections: 5,
        },
    };

    let wrote_to_file = if let Some(output_path) = output {
        stockroom::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated example configuration: {}", output_path);
        true
    } else {
        // Output to stdout
        let toml_string =
            toml::to_string_pretty(&config).map_err(stockroom::error::StockroomError::from)?;
        println!("{}", toml_string);
        false
    };

    tracing::info!("");
    tracing::info!("💡 Next steps:");
    if wrote_to_file {
        tracing::info!("   1. Review the generated configuration file");
        tracing::info!("   2. Seed sample data with 'stockroom seed --config <file>'");
        tracing::info!("   3. Start the server with 'stockroom serve --config <file>'");
    } else {
        tracing::info!("   1. Save the configuration: stockroom init --output stockroom.toml");
        tracing::info!("   2. Seed sample data with 'stockroom seed'");
        tracing::info!("   3. Start the server with 'stockroom serve'");
    }

    Ok(())
}
