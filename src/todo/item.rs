use serde::{Deserialize, Serialize};

pub type TodoId = u64;

/// Longest title the input box accepts, in characters.
pub const MAX_TITLE_LEN: usize = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_title(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

pub fn title_len(title: &str) -> usize {
    title.chars().count()
}
