//! Storage binding for [`ItemType`].
//!
//! The flattened inheritance table stores the discriminator in `kind`;
//! the bind order matches `COLUMNS` with the discriminator first.

use crate::models::ItemType;

use super::generic::{Entity, PgQuery, PgQueryAs};

impl Entity for ItemType {
    type Key = i64;

    const TABLE: &'static str = "item_types";
    const COLUMNS: &'static [&'static str] = &[
        "kind",
        "product_number",
        "title",
        "author",
        "isbn",
        "rule_system_id",
    ];

    fn id(&self) -> Option<i64> {
        ItemType::id(self)
    }

    fn bind_insert<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        match self {
            ItemType::BookTitle(book) => query
                .bind(self.kind())
                .bind(&book.product_number)
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.isbn)
                .bind(book.rule_system_id),
        }
    }

    fn bind_update<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        match self {
            ItemType::BookTitle(book) => query
                .bind(self.kind())
                .bind(&book.product_number)
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.isbn)
                .bind(book.rule_system_id),
        }
    }
}
