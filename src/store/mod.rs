/// Relational record store
///
/// This module owns all persisted catalog state. Records are kept in three
/// SQLite tables (categories, books, groceries) reached through an async
/// connection pool. The store assigns ids, creation timestamps, and record
/// versions; callers only ever hand it writable field sets.

mod records;

pub use records::{BookFields, BookRecord, CategoryRecord, GroceryFields, GroceryRecord};

use crate::error::Result;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_CATEGORIES: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT    NOT NULL,
    version INTEGER NOT NULL DEFAULT 1
)";

const CREATE_BOOKS: &str = "
CREATE TABLE IF NOT EXISTS books (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT    NOT NULL DEFAULT '',
    author       TEXT    NOT NULL DEFAULT '',
    isbn         TEXT    NOT NULL DEFAULT '',
    pages        INTEGER NOT NULL DEFAULT 0,
    price        REAL    NOT NULL DEFAULT 0,
    quantity     INTEGER NOT NULL DEFAULT 0,
    description  TEXT    NOT NULL DEFAULT '',
    imageurl     TEXT    NOT NULL DEFAULT '',
    status       TEXT    NOT NULL DEFAULT '',
    date_created TEXT    NOT NULL,
    version      INTEGER NOT NULL DEFAULT 1
)";

const CREATE_GROCERIES: &str = "
CREATE TABLE IF NOT EXISTS groceries (
    product_tag  TEXT    PRIMARY KEY,
    name         TEXT    NOT NULL,
    category_id  INTEGER NOT NULL REFERENCES categories(id),
    price        REAL    NOT NULL DEFAULT 0,
    quantity     INTEGER NOT NULL DEFAULT 0,
    imageurl     TEXT    NOT NULL DEFAULT '',
    status       TEXT    NOT NULL DEFAULT '',
    date_created TEXT    NOT NULL,
    version      INTEGER NOT NULL DEFAULT 1
)";

/// Handle to the catalog's record store
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the store and create missing tables.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database exists per connection, so the pool must
        // stay at a single connection to see one coherent store.
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            max_connections.max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// In-memory store for tests and experiments.
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn migrate(&self) -> Result<()> {
        for ddl in [CREATE_CATEGORIES, CREATE_BOOKS, CREATE_GROCERIES] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    // --- Categories ---

    /// All categories, ordered by id ascending.
    pub async fn categories(&self) -> Result<Vec<CategoryRecord>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            "SELECT id, title, version FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Fetch a category by primary key.
    pub async fn category(&self, id: i64) -> Result<Option<CategoryRecord>> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            "SELECT id, title, version FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new category and return it with its store-assigned id.
    pub async fn insert_category(&self, title: &str) -> Result<CategoryRecord> {
        let result = sqlx::query("INSERT INTO categories (title) VALUES (?1)")
            .bind(title)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        let record = self.category(id).await?;
        record.ok_or_else(|| sqlx::Error::RowNotFound.into())
    }

    /// Overwrite a category's title.
    ///
    /// With `expected_version`, the save only applies while the stored
    /// version still matches; `Ok(None)` means no row was written (missing
    /// record or stale version, the caller distinguishes). Every applied
    /// save increments the version.
    pub async fn save_category(
        &self,
        id: i64,
        title: &str,
        expected_version: Option<i64>,
    ) -> Result<Option<CategoryRecord>> {
        let rows_affected = match expected_version {
            Some(version) => {
                sqlx::query(
                    "UPDATE categories SET title = ?1, version = version + 1 \
                     WHERE id = ?2 AND version = ?3",
                )
                .bind(title)
                .bind(id)
                .bind(version)
                .execute(&self.pool)
                .await?
                .rows_affected()
            }
            None => {
                sqlx::query("UPDATE categories SET title = ?1, version = version + 1 WHERE id = ?2")
                    .bind(title)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
                    .rows_affected()
            }
        };

        if rows_affected == 0 {
            return Ok(None);
        }

        self.category(id).await
    }

    // --- Books ---

    /// All books, ordered by creation time ascending (id breaks ties).
    pub async fn books(&self) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(
            "SELECT id, title, author, isbn, pages, price, quantity, description, \
                    imageurl, status, date_created, version \
             FROM books ORDER BY date_created, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Fetch a book by primary key.
    pub async fn book(&self, id: i64) -> Result<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            "SELECT id, title, author, isbn, pages, price, quantity, description, \
                    imageurl, status, date_created, version \
             FROM books WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new book. The store assigns id and creation timestamp.
    pub async fn insert_book(&self, fields: &BookFields) -> Result<BookRecord> {
        let result = sqlx::query(
            "INSERT INTO books \
                (title, author, isbn, pages, price, quantity, description, \
                 imageurl, status, date_created) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.isbn)
        .bind(fields.pages)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(&fields.description)
        .bind(&fields.imageurl)
        .bind(&fields.status)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let record = self.book(id).await?;
        record.ok_or_else(|| sqlx::Error::RowNotFound.into())
    }

    /// Overwrite a book's writable fields. `date_created` is never touched.
    ///
    /// Same version contract as [`Store::save_category`].
    pub async fn save_book(
        &self,
        id: i64,
        fields: &BookFields,
        expected_version: Option<i64>,
    ) -> Result<Option<BookRecord>> {
        let set_clause = "UPDATE books SET \
                title = ?1, author = ?2, isbn = ?3, pages = ?4, price = ?5, \
                quantity = ?6, description = ?7, imageurl = ?8, status = ?9, \
                version = version + 1";

        let rows_affected = match expected_version {
            Some(version) => {
                sqlx::query(&format!("{} WHERE id = ?10 AND version = ?11", set_clause))
                    .bind(&fields.title)
                    .bind(&fields.author)
                    .bind(&fields.isbn)
                    .bind(fields.pages)
                    .bind(fields.price)
                    .bind(fields.quantity)
                    .bind(&fields.description)
                    .bind(&fields.imageurl)
                    .bind(&fields.status)
                    .bind(id)
                    .bind(version)
                    .execute(&self.pool)
                    .await?
                    .rows_affected()
            }
            None => {
                sqlx::query(&format!("{} WHERE id = ?10", set_clause))
                    .bind(&fields.title)
                    .bind(&fields.author)
                    .bind(&fields.isbn)
                    .bind(fields.pages)
                    .bind(fields.price)
                    .bind(fields.quantity)
                    .bind(&fields.description)
                    .bind(&fields.imageurl)
                    .bind(&fields.status)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
                    .rows_affected()
            }
        };

        if rows_affected == 0 {
            return Ok(None);
        }

        self.book(id).await
    }

    // --- Groceries ---

    /// All groceries, ordered by creation time ascending (tag breaks ties).
    pub async fn groceries(&self) -> Result<Vec<GroceryRecord>> {
        let records = sqlx::query_as::<_, GroceryRecord>(
            "SELECT product_tag, name, category_id, price, quantity, imageurl, \
                    status, date_created, version \
             FROM groceries ORDER BY date_created, product_tag",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Fetch a grocery by its product tag.
    pub async fn grocery(&self, product_tag: &str) -> Result<Option<GroceryRecord>> {
        let record = sqlx::query_as::<_, GroceryRecord>(
            "SELECT product_tag, name, category_id, price, quantity, imageurl, \
                    status, date_created, version \
             FROM groceries WHERE product_tag = ?1",
        )
        .bind(product_tag)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new grocery. The category reference must resolve; the
    /// foreign-key constraint rejects dangling ids.
    pub async fn insert_grocery(&self, fields: &GroceryFields) -> Result<GroceryRecord> {
        sqlx::query(
            "INSERT INTO groceries \
                (product_tag, name, category_id, price, quantity, imageurl, \
                 status, date_created) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&fields.product_tag)
        .bind(&fields.name)
        .bind(fields.category_id)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(&fields.imageurl)
        .bind(&fields.status)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let record = self.grocery(&fields.product_tag).await?;
        record.ok_or_else(|| sqlx::Error::RowNotFound.into())
    }

    /// Number of categories; used by the seeder to avoid double-seeding.
    pub async fn category_count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_fetch_category() {
        let store = Store::in_memory().await.unwrap();

        let created = store.insert_category("Fiction").await.unwrap();
        assert_eq!(created.title, "Fiction");
        assert_eq!(created.version, 1);

        let fetched = store.category(created.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().title, "Fiction");
    }

    #[tokio::test]
    async fn test_categories_ordered_by_id() {
        let store = Store::in_memory().await.unwrap();

        store.insert_category("Produce").await.unwrap();
        store.insert_category("Dairy").await.unwrap();
        store.insert_category("Bakery").await.unwrap();

        let all = store.categories().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_save_category_increments_version() {
        let store = Store::in_memory().await.unwrap();

        let created = store.insert_category("Ficiton").await.unwrap();
        let saved = store
            .save_category(created.id, "Fiction", None)
            .await
            .unwrap()
            .expect("row written");

        assert_eq!(saved.title, "Fiction");
        assert_eq!(saved.version, 2);
    }

    #[tokio::test]
    async fn test_save_category_stale_version() {
        let store = Store::in_memory().await.unwrap();

        let created = store.insert_category("Fiction").await.unwrap();
        let stale = store
            .save_category(created.id, "Sci-Fi", Some(created.version + 1))
            .await
            .unwrap();
        assert!(stale.is_none());

        // The record is unchanged
        let current = store.category(created.id).await.unwrap().unwrap();
        assert_eq!(current.title, "Fiction");
        assert_eq!(current.version, 1);
    }

    #[tokio::test]
    async fn test_save_category_missing_row() {
        let store = Store::in_memory().await.unwrap();

        let saved = store.save_category(999, "Nothing", None).await.unwrap();
        assert!(saved.is_none());
    }

    #[tokio::test]
    async fn test_insert_book_defaults() {
        let store = Store::in_memory().await.unwrap();

        let created = store.insert_book(&BookFields::default()).await.unwrap();
        assert_eq!(created.title, "");
        assert_eq!(created.isbn, "");
        assert_eq!(created.pages, 0);
        assert_eq!(created.price, 0.0);
        assert_eq!(created.version, 1);
    }

    #[tokio::test]
    async fn test_save_book_keeps_date_created() {
        let store = Store::in_memory().await.unwrap();

        let created = store
            .insert_book(&BookFields {
                title: "Dune".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut fields = created.fields();
        fields.quantity = 12;
        let saved = store
            .save_book(created.id, &fields, Some(created.version))
            .await
            .unwrap()
            .expect("row written");

        assert_eq!(saved.quantity, 12);
        assert_eq!(saved.title, "Dune");
        assert_eq!(saved.date_created, created.date_created);
        assert_eq!(saved.version, created.version + 1);
    }

    #[tokio::test]
    async fn test_books_ordered_by_creation() {
        let store = Store::in_memory().await.unwrap();

        for title in ["first", "second", "third"] {
            store
                .insert_book(&BookFields {
                    title: title.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let all = store.books().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_grocery_requires_existing_category() {
        let store = Store::in_memory().await.unwrap();

        let orphan = store
            .insert_grocery(&GroceryFields {
                product_tag: "PRD-0001".to_string(),
                name: "Bananas".to_string(),
                category_id: 42,
                ..Default::default()
            })
            .await;

        assert!(orphan.is_err(), "dangling category reference must fail");
    }

    #[tokio::test]
    async fn test_insert_and_fetch_grocery() {
        let store = Store::in_memory().await.unwrap();

        let category = store.insert_category("Produce").await.unwrap();
        let created = store
            .insert_grocery(&GroceryFields {
                product_tag: "PRD-0001".to_string(),
                name: "Bananas".to_string(),
                category_id: category.id,
                price: 0.59,
                quantity: 150,
                status: "in_stock".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Bananas");
        assert_eq!(created.category_id, category.id);

        let fetched = store.grocery("PRD-0001").await.unwrap();
        assert!(fetched.is_some());
    }
}
