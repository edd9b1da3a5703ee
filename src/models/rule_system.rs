//! Rule system model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A tabletop rule system (e.g. "Dungeons & Dragons", symbol "DnD").
///
/// Book titles reference the rule system they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RuleSystem {
    /// Surrogate key, assigned on persist
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub symbol: String,
}
