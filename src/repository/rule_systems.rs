//! Storage binding for [`RuleSystem`]

use crate::models::RuleSystem;

use super::generic::{Entity, PgQuery, PgQueryAs};

impl Entity for RuleSystem {
    type Key = i64;

    const TABLE: &'static str = "rule_systems";
    const COLUMNS: &'static [&'static str] = &["name", "symbol"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_insert<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name).bind(&self.symbol)
    }

    fn bind_update<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.name).bind(&self.symbol)
    }
}
