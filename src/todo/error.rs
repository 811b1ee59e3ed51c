use super::item::{TodoId, MAX_TITLE_LEN};
use thiserror::Error;

/// Rejections raised by the strict store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("title is empty")]
    BlankTitle,
    #[error("title is {len} characters, the limit is {MAX_TITLE_LEN}")]
    TitleTooLong { len: usize },
    #[error("no item is selected for edit")]
    NoSelection,
}

/// Problems found in a seed list before the session starts.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed item ids must be positive")]
    ZeroId,
    #[error("seed item id {0} appears more than once")]
    DuplicateId(TodoId),
    #[error("seed item {id} has a {len}-character title, the limit is {MAX_TITLE_LEN}")]
    TitleTooLong { id: TodoId, len: usize },
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),
}
