//! Item type (catalog definition) endpoints.
//!
//! Bodies are tagged by `kind`; `book_title` is the only kind today.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::ItemType,
    repository::CrudRepository,
};

/// Get item type by ID
#[utoipa::path(
    get,
    path = "/item-types/{id}",
    tag = "item-types",
    params(
        ("id" = i64, Path, description = "Item type ID")
    ),
    responses(
        (status = 200, description = "Item type details", body = ItemType),
        (status = 404, description = "Item type not found")
    )
)]
pub async fn get_item_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ItemType>> {
    let item_type = state
        .repository
        .item_types
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item type {} not found", id)))?;
    Ok(Json(item_type))
}

/// Create a new item type
#[utoipa::path(
    post,
    path = "/item-types",
    tag = "item-types",
    request_body = ItemType,
    responses(
        (status = 201, description = "Item type created", body = ItemType),
        (status = 400, description = "Instance already carries an identifier"),
        (status = 409, description = "Referenced rule system does not exist")
    )
)]
pub async fn create_item_type(
    State(state): State<crate::AppState>,
    Json(item_type): Json<ItemType>,
) -> AppResult<(StatusCode, Json<ItemType>)> {
    let created = state.repository.item_types.persist(item_type).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing item type
#[utoipa::path(
    put,
    path = "/item-types/{id}",
    tag = "item-types",
    params(
        ("id" = i64, Path, description = "Item type ID")
    ),
    request_body = ItemType,
    responses(
        (status = 204, description = "Item type updated"),
        (status = 404, description = "Item type not found"),
        (status = 409, description = "Referenced rule system does not exist")
    )
)]
pub async fn update_item_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(mut item_type): Json<ItemType>,
) -> AppResult<StatusCode> {
    item_type.set_id(Some(id));
    state.repository.item_types.update(&item_type).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item type
#[utoipa::path(
    delete,
    path = "/item-types/{id}",
    tag = "item-types",
    params(
        ("id" = i64, Path, description = "Item type ID")
    ),
    responses(
        (status = 204, description = "Item type deleted"),
        (status = 404, description = "Item type not found"),
        (status = 409, description = "Items still reference this type")
    )
)]
pub async fn delete_item_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let item_type = state
        .repository
        .item_types
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item type {} not found", id)))?;
    state.repository.item_types.delete(&item_type).await?;
    Ok(StatusCode::NO_CONTENT)
}
