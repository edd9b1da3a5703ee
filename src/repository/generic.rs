//! Generic CRUD repository.
//!
//! One implementation, [`PgRepository`], parameterized over the entity type.
//! Per-entity SQL knowledge (table name, column list, value binding) lives in
//! the [`Entity`] trait, implemented next to each model; the repository
//! assembles the actual statements from it. The entity type is bound
//! explicitly through the type parameter at construction.

use std::fmt::Display;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Encode, FromRow, PgPool, Postgres, Type};

use crate::error::{AppError, AppResult};

/// A `query_as` statement being bound for entity `E`
pub type PgQueryAs<'q, E> = sqlx::query::QueryAs<'q, Postgres, E, PgArguments>;

/// A plain statement being bound
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// Storage mapping for a persisted entity type.
///
/// `COLUMNS` lists the non-key columns in bind order; `bind_insert` and
/// `bind_update` must bind the corresponding values in exactly that order.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin {
    /// Primary-key type
    type Key: for<'q> Encode<'q, Postgres> + Type<Postgres> + Copy + Display + Send + 'static;

    /// Table this entity is stored in
    const TABLE: &'static str;

    /// Non-key columns, in bind order
    const COLUMNS: &'static [&'static str];

    /// Key of this instance, `None` until persisted
    fn id(&self) -> Option<Self::Key>;

    /// Bind the `COLUMNS` values onto an INSERT statement
    fn bind_insert<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Bind the `COLUMNS` values onto an UPDATE statement
    fn bind_update<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// Type-safe CRUD access to one persisted entity type.
///
/// Every operation is a single atomic round trip to the database; errors are
/// surfaced to the caller, never swallowed or retried here.
#[async_trait]
pub trait CrudRepository {
    type Entity: Entity;

    /// Store a new, not-yet-identified instance and return it with its key assigned
    async fn persist(&self, object: Self::Entity) -> AppResult<Self::Entity>;

    /// Look up a previously persisted instance by primary key
    async fn find(
        &self,
        id: <Self::Entity as Entity>::Key,
    ) -> AppResult<Option<Self::Entity>>;

    /// Save changes made to a previously persisted instance
    async fn update(&self, object: &Self::Entity) -> AppResult<()>;

    /// Remove a persisted instance
    async fn delete(&self, object: &Self::Entity) -> AppResult<()>;
}

/// The one generic [`CrudRepository`] implementation, backed by Postgres.
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn insert_sql() -> String {
        let placeholders = (1..=E::COLUMNS.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        )
    }

    fn select_sql() -> String {
        format!("SELECT * FROM {} WHERE id = $1", E::TABLE)
    }

    fn update_sql() -> String {
        let sets = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{} = ${}", col, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE id = ${}",
            E::TABLE,
            sets,
            E::COLUMNS.len() + 1
        )
    }

    fn delete_sql() -> String {
        format!("DELETE FROM {} WHERE id = $1", E::TABLE)
    }
}

/// Map backend errors at the repository boundary.
///
/// Broken referential integrity or uniqueness becomes `ConstraintViolation`;
/// everything else stays a `Database` error for the caller to see as-is.
fn map_db_error(err: sqlx::Error, table: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::ConstraintViolation(format!("{}: {}", table, db.message()))
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::ConstraintViolation(format!("{}: {}", table, db.message()))
        }
        _ => AppError::Database(err),
    }
}

#[async_trait]
impl<E: Entity + 'static> CrudRepository for PgRepository<E> {
    type Entity = E;

    async fn persist(&self, object: E) -> AppResult<E> {
        if let Some(id) = object.id() {
            return Err(AppError::BadRequest(format!(
                "cannot persist {} {}: instance already carries an identifier",
                E::TABLE,
                id
            )));
        }

        let sql = Self::insert_sql();
        let query = object.bind_insert(sqlx::query_as::<Postgres, E>(&sql));
        let created = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, E::TABLE))?;

        tracing::debug!(table = E::TABLE, "persisted entity");
        Ok(created)
    }

    async fn find(&self, id: E::Key) -> AppResult<Option<E>> {
        let sql = Self::select_sql();
        let found = sqlx::query_as::<Postgres, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found)
    }

    async fn update(&self, object: &E) -> AppResult<()> {
        let id = object.id().ok_or_else(|| {
            AppError::BadRequest(format!(
                "cannot update {}: instance carries no identifier",
                E::TABLE
            ))
        })?;

        let sql = Self::update_sql();
        let result = object
            .bind_update(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, E::TABLE))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} {} not found", E::TABLE, id)));
        }
        Ok(())
    }

    async fn delete(&self, object: &E) -> AppResult<()> {
        let id = object.id().ok_or_else(|| {
            AppError::BadRequest(format!(
                "cannot delete {}: instance carries no identifier",
                E::TABLE
            ))
        })?;

        let sql = Self::delete_sql();
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, E::TABLE))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} {} not found", E::TABLE, id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemType, RuleSystem, User};

    #[test]
    fn insert_sql_lists_all_columns() {
        assert_eq!(
            PgRepository::<User>::insert_sql(),
            "INSERT INTO users (first_name, last_name, email) \
             VALUES ($1, $2, $3) RETURNING *"
        );
        assert_eq!(
            PgRepository::<ItemType>::insert_sql(),
            "INSERT INTO item_types (kind, product_number, title, author, isbn, rule_system_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        );
    }

    #[test]
    fn update_sql_binds_key_last() {
        assert_eq!(
            PgRepository::<RuleSystem>::update_sql(),
            "UPDATE rule_systems SET name = $1, symbol = $2 WHERE id = $3"
        );
        assert_eq!(
            PgRepository::<Item>::update_sql(),
            "UPDATE items SET type_id = $1, owner_id = $2, holder_id = $3, \
             condition_descr = $4 WHERE id = $5"
        );
    }

    #[test]
    fn key_lookups_select_by_id() {
        assert_eq!(
            PgRepository::<Item>::select_sql(),
            "SELECT * FROM items WHERE id = $1"
        );
        assert_eq!(
            PgRepository::<User>::delete_sql(),
            "DELETE FROM users WHERE id = $1"
        );
    }

    #[test]
    fn key_column_is_never_writable() {
        assert!(!User::COLUMNS.contains(&"id"));
        assert!(!RuleSystem::COLUMNS.contains(&"id"));
        assert!(!ItemType::COLUMNS.contains(&"id"));
        assert!(!Item::COLUMNS.contains(&"id"));
    }
}
