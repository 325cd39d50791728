use crate::schema::types::{Book, Category, Grocery};
use crate::store::Store;

use async_graphql::{Context, ErrorExtensions, Object};

/// Read side of the schema: whole-collection fetches, no arguments.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All categories, ordered by id ascending.
    async fn categories(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Category>> {
        let store = ctx.data_unchecked::<Store>();

        let records = store.categories().await.map_err(|e| e.extend())?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    /// All books, ordered by creation time ascending.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = ctx.data_unchecked::<Store>();

        let records = store.books().await.map_err(|e| e.extend())?;
        Ok(records.into_iter().map(Book::from).collect())
    }

    /// All groceries, ordered by creation time ascending.
    async fn groceries(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Grocery>> {
        let store = ctx.data_unchecked::<Store>();

        let records = store.groceries().await.map_err(|e| e.extend())?;
        Ok(records.into_iter().map(Grocery::from).collect())
    }
}
