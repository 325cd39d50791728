use stockroom::error::Result;
use stockroom::schema::CatalogSchema;
use stockroom::store::Store;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: u16) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    // Load config
    let config = stockroom::config::load_config(&config_path)?;

    // Use provided port or default from config
    let server_port = if port != 4000 { port } else { config.server.port };

    tracing::info!("🗄️  Connecting to record store at {}", config.store.database_url);
    let store = Store::connect(&config.store.database_url, config.store.max_connections).await?;

    let schema = stockroom::schema::build_schema(store);

    tracing::info!("✅ Schema built successfully");
    tracing::info!("🚀 GraphQL server running on http://localhost:{}", server_port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", server_port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    // Start the HTTP server
    start_http_server(schema, &config.server.bind, server_port).await
}

async fn start_http_server(schema: CatalogSchema, bind: &str, port: u16) -> Result<()> {
    // Create the router with GraphQL endpoints
    let app = Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive());

    let ip = bind.parse().map_err(|_| {
        stockroom::error::StockroomError::Config(format!("Invalid bind address '{}'", bind))
    })?;
    let addr = SocketAddr::new(ip, port);
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        stockroom::error::StockroomError::Config(format!(
            "Failed to bind to port {}: {}. Port may be in use.",
            port, e
        ))
    })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| stockroom::error::StockroomError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(
    axum::extract::State(schema): axum::extract::State<CatalogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphql_playground() -> axum::response::Html<String> {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
