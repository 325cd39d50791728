use clap::{Parser, Subcommand};
use stockroom::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version = "0.1.0")]
#[command(about = "GraphQL catalog API for a small storefront", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an example configuration file
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,

        /// Record store database URL (defaults to a local SQLite file)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Populate the record store with sample catalog data
    Seed {
        /// Config file path
        #[arg(long, default_value = "stockroom.toml")]
        config: String,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "stockroom.toml")]
        config: String,

        /// Server port
        #[arg(long, default_value_t = 4000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            output,
            database_url,
        } => {
            cli::init::run(output, database_url)?;
        }
        Commands::Seed { config } => {
            cli::seed::run(config).await?;
        }
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
    }

    Ok(())
}
