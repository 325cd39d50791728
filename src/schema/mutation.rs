use crate::error::StockroomError;
use crate::schema::inputs::BookInput;
use crate::schema::types::{Book, Category};
use crate::store::Store;

use async_graphql::{Context, ErrorExtensions, Object, ID};

/// Write side of the schema: create and update for categories and books.
///
/// Updates are fetch-then-save. When the caller supplies `expectedVersion`
/// the save is conditioned on the stored version and a stale token fails
/// with a CONFLICT error; without it, the last save wins.
pub struct MutationRoot;

fn parse_id(kind: &'static str, id: &ID) -> Result<i64, StockroomError> {
    id.parse::<i64>().map_err(|_| {
        StockroomError::Validation(format!("{} id must be numeric, got '{}'", kind, id.as_str()))
    })
}

#[Object]
impl MutationRoot {
    /// Create a new category.
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        title: String,
    ) -> async_graphql::Result<Category> {
        let store = ctx.data_unchecked::<Store>();

        let title = title.trim();
        if title.is_empty() {
            return Err(
                StockroomError::Validation("title must not be empty".to_string()).extend(),
            );
        }

        let record = store.insert_category(title).await.map_err(|e| e.extend())?;

        tracing::info!("Created category {} ({})", record.id, record.title);
        Ok(record.into())
    }

    /// Overwrite a category's title.
    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: String,
        expected_version: Option<i64>,
    ) -> async_graphql::Result<Category> {
        let store = ctx.data_unchecked::<Store>();

        let key = parse_id("category", &id).map_err(|e| e.extend())?;
        let title = title.trim();
        if title.is_empty() {
            return Err(
                StockroomError::Validation("title must not be empty".to_string()).extend(),
            );
        }

        let current = store
            .category(key)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| {
                StockroomError::NotFound {
                    kind: "Category",
                    id: id.to_string(),
                }
                .extend()
            })?;

        let saved = store
            .save_category(key, title, expected_version)
            .await
            .map_err(|e| e.extend())?;

        match saved {
            Some(record) => Ok(record.into()),
            // The record existed a moment ago, so an unapplied save means
            // the version guard fired.
            None => Err(StockroomError::StaleVersion {
                kind: "Category",
                id: id.to_string(),
                expected: expected_version.unwrap_or(current.version),
            }
            .extend()),
        }
    }

    /// Create a new book from a partial payload.
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        input: BookInput,
    ) -> async_graphql::Result<Book> {
        let store = ctx.data_unchecked::<Store>();

        input.validate().map_err(|e| e.extend())?;

        let record = store
            .insert_book(&input.into_new_fields())
            .await
            .map_err(|e| e.extend())?;

        tracing::info!("Created book {} ({})", record.id, record.title);
        Ok(record.into())
    }

    /// Update a book; only fields present in the payload change.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: BookInput,
        expected_version: Option<i64>,
    ) -> async_graphql::Result<Book> {
        let store = ctx.data_unchecked::<Store>();

        let key = parse_id("book", &id).map_err(|e| e.extend())?;
        input.validate().map_err(|e| e.extend())?;

        let current = store
            .book(key)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| {
                StockroomError::NotFound {
                    kind: "Book",
                    id: id.to_string(),
                }
                .extend()
            })?;

        let fields = input.merge_into(&current);
        let saved = store
            .save_book(key, &fields, expected_version)
            .await
            .map_err(|e| e.extend())?;

        match saved {
            Some(record) => Ok(record.into()),
            None => Err(StockroomError::StaleVersion {
                kind: "Book",
                id: id.to_string(),
                expected: expected_version.unwrap_or(current.version),
            }
            .extend()),
        }
    }
}
