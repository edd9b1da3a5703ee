//! API handlers for the Liberation REST endpoints

pub mod health;
pub mod item_types;
pub mod items;
pub mod openapi;
pub mod rule_systems;
pub mod users;
