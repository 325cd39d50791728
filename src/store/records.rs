use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A product category row
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    pub title: String,
    pub version: i64,
}

/// A book row
#[derive(Debug, Clone, FromRow)]
pub struct BookRecord {
    pub id: i64,
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
    pub version: i64,
}

/// A grocery row
#[derive(Debug, Clone, FromRow)]
pub struct GroceryRecord {
    pub product_tag: String,
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub quantity: i64,
    pub imageurl: String,
    pub status: String,
    pub date_created: DateTime<Utc>,
    pub version: i64,
}

/// Writable field set of a book. The store owns `id`, `date_created`
/// and `version`; everything else is set through this struct.
#[derive(Debug, Clone, Default)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub pages: i64,
    pub price: f64,
    pub quantity: i64,
    pub description: String,
    pub imageurl: String,
    pub status: String,
}

impl BookRecord {
    /// Current writable field values, used for merge-on-update.
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            pages: self.pages,
            price: self.price,
            quantity: self.quantity,
            description: self.description.clone(),
            imageurl: self.imageurl.clone(),
            status: self.status.clone(),
        }
    }
}

/// Writable field set of a grocery, keyed by the caller-chosen tag.
#[derive(Debug, Clone, Default)]
pub struct GroceryFields {
    pub product_tag: String,
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub quantity: i64,
    pub imageurl: String,
    pub status: String,
}
