pub mod config;
pub mod error;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use config::{Config, ServerConfig, StoreConfig};
pub use error::{Result, StockroomError};
pub use schema::{build_schema, CatalogSchema};
pub use store::Store;
