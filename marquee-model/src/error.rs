use std::fmt::{self, Display};

use crate::ids::ItemId;

/// Errors produced by catalog validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateItemId(ItemId),
    EmptyTitle { section: usize, item: Option<ItemId> },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::DuplicateItemId(id) => {
                write!(f, "duplicate item id: {id}")
            }
            ModelError::EmptyTitle {
                section,
                item: Some(id),
            } => write!(f, "item {id} in section {section} has an empty title"),
            ModelError::EmptyTitle { section, item: None } => {
                write!(f, "section {section} has an empty title")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
