//! Repository layer for database operations

pub mod generic;
pub mod item_types;
pub mod items;
pub mod rule_systems;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::models::{Item, ItemType, RuleSystem, User};

pub use generic::{CrudRepository, Entity, PgRepository};

/// Main repository struct holding one typed CRUD repository per entity
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: PgRepository<User>,
    pub rule_systems: PgRepository<RuleSystem>,
    pub item_types: PgRepository<ItemType>,
    pub items: PgRepository<Item>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: PgRepository::new(pool.clone()),
            rule_systems: PgRepository::new(pool.clone()),
            item_types: PgRepository::new(pool.clone()),
            items: PgRepository::new(pool.clone()),
            pool,
        }
    }
}
