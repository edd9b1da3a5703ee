//! Inventory item endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::Item,
    repository::CrudRepository,
};

/// Get item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = Item),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    let item = state
        .repository
        .items
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Instance already carries an identifier"),
        (status = 409, description = "Referenced type, owner or holder does not exist")
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    Json(item): Json<Item>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let created = state.repository.items.persist(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = Item,
    responses(
        (status = 204, description = "Item updated"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Referenced type, owner or holder does not exist")
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(mut item): Json<Item>,
) -> AppResult<StatusCode> {
    item.id = Some(id);
    state.repository.items.update(&item).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let item = state
        .repository
        .items
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;
    state.repository.items.delete(&item).await?;
    Ok(StatusCode::NO_CONTENT)
}
