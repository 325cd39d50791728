/// GraphQL schema for the catalog
///
/// This module composes the query and mutation resolvers into a single
/// executable schema, with the record store injected as schema data so
/// every resolver reaches storage the same way.

mod inputs;
mod mutation;
mod query;
mod types;

pub use inputs::BookInput;
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{Book, Category, Grocery};

use crate::store::Store;

use async_graphql::{EmptySubscription, Schema};

/// The complete catalog schema
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema backed by the given store.
pub fn build_schema(store: Store) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
