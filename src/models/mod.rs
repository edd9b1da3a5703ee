//! Entity model: plain data records with identity and associations

pub mod item;
pub mod item_type;
pub mod rule_system;
pub mod user;

pub use item::Item;
pub use item_type::{BookTitle, ItemType};
pub use rule_system::RuleSystem;
pub use user::User;
