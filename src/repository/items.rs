//! Storage binding for [`Item`]

use crate::models::Item;

use super::generic::{Entity, PgQuery, PgQueryAs};

impl Entity for Item {
    type Key = i64;

    const TABLE: &'static str = "items";
    const COLUMNS: &'static [&'static str] =
        &["type_id", "owner_id", "holder_id", "condition_descr"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_insert<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.type_id)
            .bind(self.owner_id)
            .bind(self.holder_id)
            .bind(&self.condition_descr)
    }

    fn bind_update<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.type_id)
            .bind(self.owner_id)
            .bind(self.holder_id)
            .bind(&self.condition_descr)
    }
}
