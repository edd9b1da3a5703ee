//! Item model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One physical copy in the inventory.
///
/// `type_id` points at the catalog definition ([`super::ItemType`]),
/// `owner_id` at the user who owns the copy and `holder_id` at the user
/// currently in possession of it. Owner and holder may be the same user;
/// a differing holder models a running loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    /// Surrogate key, assigned on persist
    #[serde(default)]
    pub id: Option<i64>,
    pub type_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub holder_id: Option<i64>,
    /// Free-text description of the physical condition
    pub condition_descr: Option<String>,
}
