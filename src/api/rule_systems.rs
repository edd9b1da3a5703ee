//! Rule system endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::RuleSystem,
    repository::CrudRepository,
};

/// Get rule system by ID
#[utoipa::path(
    get,
    path = "/rule-systems/{id}",
    tag = "rule-systems",
    params(
        ("id" = i64, Path, description = "Rule system ID")
    ),
    responses(
        (status = 200, description = "Rule system details", body = RuleSystem),
        (status = 404, description = "Rule system not found")
    )
)]
pub async fn get_rule_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RuleSystem>> {
    let rule_system = state
        .repository
        .rule_systems
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rule system {} not found", id)))?;
    Ok(Json(rule_system))
}

/// Create a new rule system
#[utoipa::path(
    post,
    path = "/rule-systems",
    tag = "rule-systems",
    request_body = RuleSystem,
    responses(
        (status = 201, description = "Rule system created", body = RuleSystem),
        (status = 400, description = "Instance already carries an identifier")
    )
)]
pub async fn create_rule_system(
    State(state): State<crate::AppState>,
    Json(rule_system): Json<RuleSystem>,
) -> AppResult<(StatusCode, Json<RuleSystem>)> {
    let created = state.repository.rule_systems.persist(rule_system).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing rule system
#[utoipa::path(
    put,
    path = "/rule-systems/{id}",
    tag = "rule-systems",
    params(
        ("id" = i64, Path, description = "Rule system ID")
    ),
    request_body = RuleSystem,
    responses(
        (status = 204, description = "Rule system updated"),
        (status = 404, description = "Rule system not found")
    )
)]
pub async fn update_rule_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(mut rule_system): Json<RuleSystem>,
) -> AppResult<StatusCode> {
    rule_system.id = Some(id);
    state.repository.rule_systems.update(&rule_system).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a rule system
#[utoipa::path(
    delete,
    path = "/rule-systems/{id}",
    tag = "rule-systems",
    params(
        ("id" = i64, Path, description = "Rule system ID")
    ),
    responses(
        (status = 204, description = "Rule system deleted"),
        (status = 404, description = "Rule system not found"),
        (status = 409, description = "Book titles still reference this rule system")
    )
)]
pub async fn delete_rule_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let rule_system = state
        .repository
        .rule_systems
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rule system {} not found", id)))?;
    state.repository.rule_systems.delete(&rule_system).await?;
    Ok(StatusCode::NO_CONTENT)
}
