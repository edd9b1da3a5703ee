//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, item_types, items, rule_systems, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Liberation API",
        version = "0.1.0",
        description = "RPG library inventory tracker REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "RPG Librarium Aachen", email = "vorstand@rpg-librarium.de")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Rule systems
        rule_systems::get_rule_system,
        rule_systems::create_rule_system,
        rule_systems::update_rule_system,
        rule_systems::delete_rule_system,
        // Item types
        item_types::get_item_type,
        item_types::create_item_type,
        item_types::update_item_type,
        item_types::delete_item_type,
        // Items
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::RuleSystem,
            crate::models::ItemType,
            crate::models::BookTitle,
            crate::models::Item,
            crate::error::ErrorResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "Library members"),
        (name = "rule-systems", description = "Tabletop rule systems"),
        (name = "item-types", description = "Catalog definitions"),
        (name = "items", description = "Physical inventory copies")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the generated document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
