//! Entity definitions served by the bundled HTTP endpoints.
//!
//! Each entity is a plain value with an integer `Id` and its own fields,
//! serialized with PascalCase field names. camelCase names are accepted on
//! input. Every field defaults when absent, so an update body that omits a
//! field resets it.

mod address;
mod order;
mod product;
mod task_item;
mod user;

pub use address::Address;
pub use order::{Order, OrderDate};
pub use product::Product;
pub use task_item::TaskItem;
pub use user::User;
