/// Type projection layer
///
/// One GraphQL object per record kind, each declaring the exact allow-list
/// of fields the query language may reach. Store columns outside the
/// allow-list (e.g. a grocery's raw `category_id`) stay unreachable no
/// matter what the store holds.

use crate::error::StockroomError;
use crate::store::{BookRecord, CategoryRecord, GroceryRecord, Store};

use async_graphql::{ComplexObject, Context, ErrorExtensions, SimpleObject, ID};
use chrono::{DateTime, Utc};

/// A product category
#[derive(Debug, Clone, SimpleObject)]
pub struct Category {
    pub id: ID,
    pub title: String,
    /// Optimistic concurrency token; send it back as `expectedVersion`.
    pub version: i64,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            title: record.title,
            version: record.version,
        }
    }
}

/// A book in the catalog
#[derive(Debug, Clone, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub pages: i64,
    pub price: f64,
    pub quantity: i64,
    pub description: String,
    pub imageurl: String,
    pub status: String,
    pub date_created: DateTime<Utc>,
    /// Optimistic concurrency token; send it back as `expectedVersion`.
    pub version: i64,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            pages: record.pages,
            price: record.price,
            quantity: record.quantity,
            description: record.description,
            imageurl: record.imageurl,
            status: record.status,
            date_created: record.date_created,
            version: record.version,
        }
    }
}

/// A grocery item
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Grocery {
    pub product_tag: ID,
    pub name: String,
    #[graphql(skip)]
    pub category_id: i64,
    pub price: f64,
    pub quantity: i64,
    pub imageurl: String,
    pub status: String,
    pub date_created: DateTime<Utc>,
    /// Optimistic concurrency token.
    pub version: i64,
}

#[ComplexObject]
impl Grocery {
    /// The category this grocery belongs to.
    async fn category(&self, ctx: &Context<'_>) -> async_graphql::Result<Category> {
        let store = ctx.data_unchecked::<Store>();

        let record = store
            .category(self.category_id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| {
                StockroomError::NotFound {
                    kind: "Category",
                    id: self.category_id.to_string(),
                }
                .extend()
            })?;

        Ok(record.into())
    }
}

impl From<GroceryRecord> for Grocery {
    fn from(record: GroceryRecord) -> Self {
        Self {
            product_tag: ID(record.product_tag),
            name: record.name,
            category_id: record.category_id,
            price: record.price,
            quantity: record.quantity,
            imageurl: record.imageurl,
            status: record.status,
            date_created: record.date_created,
            version: record.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_projection() {
        let record = CategoryRecord {
            id: 7,
            title: "Fiction".to_string(),
            version: 3,
        };

        let category = Category::from(record);
        assert_eq!(category.id.as_str(), "7");
        assert_eq!(category.title, "Fiction");
        assert_eq!(category.version, 3);
    }

    #[test]
    fn test_grocery_projection_keeps_raw_reference() {
        let record = GroceryRecord {
            product_tag: "PRD-0001".to_string(),
            name: "Bananas".to_string(),
            category_id: 2,
            price: 0.59,
            quantity: 150,
            imageurl: String::new(),
            status: "in_stock".to_string(),
            date_created: Utc::now(),
            version: 1,
        };

        let grocery = Grocery::from(record);
        assert_eq!(grocery.product_tag.as_str(), "PRD-0001");
        // The raw id stays available to the category resolver even though
        // it is skipped in the GraphQL field set.
        assert_eq!(grocery.category_id, 2);
    }
}
