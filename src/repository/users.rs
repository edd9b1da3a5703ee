//! Storage binding for [`User`]

use crate::models::User;

use super::generic::{Entity, PgQuery, PgQueryAs};

impl Entity for User {
    type Key = i64;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "email"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_insert<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
    }

    fn bind_update<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
    }
}
