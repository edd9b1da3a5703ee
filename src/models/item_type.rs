//! Item type model (catalog definitions).
//!
//! The source schema modelled `ItemType` as an abstract base with joined
//! inheritance. Here the hierarchy is flattened to a single `item_types`
//! table with a `kind` text discriminator, and the Rust side is a closed
//! sum type with one case per concrete subtype.

use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use utoipa::ToSchema;

/// Discriminator value stored in the `kind` column for book titles
pub const KIND_BOOK_TITLE: &str = "book_title";

/// Catalog definition of an inventory item.
///
/// `BookTitle` is currently the only concrete subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemType {
    BookTitle(BookTitle),
}

/// A published book title, optionally tied to a rule system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookTitle {
    /// Surrogate key, assigned on persist
    #[serde(default)]
    pub id: Option<i64>,
    pub product_number: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Key of the rule system this title belongs to, if any
    pub rule_system_id: Option<i64>,
}

impl ItemType {
    /// Surrogate key of the underlying record
    pub fn id(&self) -> Option<i64> {
        match self {
            ItemType::BookTitle(book) => book.id,
        }
    }

    /// Discriminator string as stored in the database
    pub fn kind(&self) -> &'static str {
        match self {
            ItemType::BookTitle(_) => KIND_BOOK_TITLE,
        }
    }

    /// Overwrite the surrogate key of the underlying record
    pub fn set_id(&mut self, id: Option<i64>) {
        match self {
            ItemType::BookTitle(book) => book.id = id,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for ItemType {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("kind")?;
        match kind.as_str() {
            KIND_BOOK_TITLE => Ok(ItemType::BookTitle(BookTitle {
                id: row.try_get("id")?,
                product_number: row.try_get("product_number")?,
                title: row.try_get("title")?,
                author: row.try_get("author")?,
                isbn: row.try_get("isbn")?,
                rule_system_id: row.try_get("rule_system_id")?,
            })),
            other => Err(sqlx::Error::ColumnDecode {
                index: "kind".into(),
                source: format!("unknown item type kind: {}", other).into(),
            }),
        }
    }
}
