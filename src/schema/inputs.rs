use crate::error::{Result, StockroomError};
use crate::store::{BookFields, BookRecord};

use async_graphql::InputObject;

/// Book mutation payload.
///
/// Every field is optional. Recognized options:
///
/// - `title` — book title; when provided, must be non-empty
/// - `author` — author name
/// - `pages` — page count; when provided, must be non-negative
/// - `price` — unit price; when provided, must be finite and non-negative
/// - `quantity` — stock on hand; when provided, must be non-negative
/// - `description` — free-form text
/// - `status` — availability label; when provided, must be non-empty
///
/// On create, omitted options take the store defaults (empty text, zero
/// numbers). On update, omitted options keep the record's current value.
/// `isbn` and `imageurl` are not part of the payload and are never changed
/// by these mutations.
#[derive(Debug, Clone, Default, InputObject)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub pages: Option<i64>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl BookInput {
    /// Check every provided option before any store access.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(StockroomError::Validation(
                    "title must not be empty".to_string(),
                ));
            }
        }

        if let Some(status) = &self.status {
            if status.trim().is_empty() {
                return Err(StockroomError::Validation(
                    "status must not be empty".to_string(),
                ));
            }
        }

        if let Some(pages) = self.pages {
            if pages < 0 {
                return Err(StockroomError::Validation(format!(
                    "pages must be non-negative, got {}",
                    pages
                )));
            }
        }

        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(StockroomError::Validation(format!(
                    "quantity must be non-negative, got {}",
                    quantity
                )));
            }
        }

        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(StockroomError::Validation(format!(
                    "price must be a non-negative amount, got {}",
                    price
                )));
            }
        }

        Ok(())
    }

    /// Field set for a new record: provided options over store defaults.
    pub fn into_new_fields(self) -> BookFields {
        BookFields {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            pages: self.pages.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Field set for an update: provided options over the current record.
    pub fn merge_into(self, current: &BookRecord) -> BookFields {
        let mut fields = current.fields();

        if let Some(title) = self.title {
            fields.title = title;
        }
        if let Some(author) = self.author {
            fields.author = author;
        }
        if let Some(pages) = self.pages {
            fields.pages = pages;
        }
        if let Some(price) = self.price {
            fields.price = price;
        }
        if let Some(quantity) = self.quantity {
            fields.quantity = quantity;
        }
        if let Some(description) = self.description {
            fields.description = description;
        }
        if let Some(status) = self.status {
            fields.status = status;
        }

        fields
    }
}
