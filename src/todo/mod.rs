//! In-memory to-do collection: items, the snapshot reducer, and seed loading.

pub mod error;
pub mod item;
pub mod seed;
pub mod store;

pub use item::{TodoId, TodoItem, MAX_TITLE_LEN};
pub use store::{TodoSnapshot, TodoStore};
