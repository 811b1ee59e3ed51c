//! Seed data loaded at session start.
//!
//! The list is either the built-in default or a TOML file of the form:
//!
//! ```toml
//! [[todos]]
//! id = 1
//! title = "Water the plants"
//! completed = false
//! ```

use super::error::SeedError;
use super::item::{title_len, TodoItem, MAX_TITLE_LEN};
use super::store::TodoSnapshot;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    todos: Vec<TodoItem>,
}

const DEFAULT_SEED: &[(u64, &str, bool)] = &[
    (1, "Learn the keybindings (Tab switches focus)", true),
    (2, "Buy groceries", false),
    (3, "Call the dentist", false),
    (4, "Read a chapter of a book", false),
    (5, "Go for a walk", true),
];

pub fn default_seed() -> Vec<TodoItem> {
    DEFAULT_SEED
        .iter()
        .map(|(id, title, completed)| TodoItem {
            id: *id,
            title: title.to_string(),
            completed: *completed,
        })
        .collect()
}

pub fn parse_seed(contents: &str) -> Result<Vec<TodoItem>, SeedError> {
    let file: SeedFile = toml::from_str(contents)?;
    Ok(file.todos)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<TodoItem>, SeedError> {
    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Validate seed records and build the initial snapshot.
pub fn snapshot_from_seed(items: Vec<TodoItem>) -> Result<TodoSnapshot, SeedError> {
    let mut seen = HashSet::new();
    for item in &items {
        if item.id == 0 {
            return Err(SeedError::ZeroId);
        }
        if !seen.insert(item.id) {
            return Err(SeedError::DuplicateId(item.id));
        }
        let len = title_len(&item.title);
        if len > MAX_TITLE_LEN {
            return Err(SeedError::TitleTooLong { id: item.id, len });
        }
    }
    Ok(TodoSnapshot::from_items(items))
}
