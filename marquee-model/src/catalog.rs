use std::collections::HashSet;

use crate::error::{ModelError, Result};
use crate::ids::ItemId;

/// A single catalog entry rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    /// Poster URL
    pub image: String,
}

impl ContentItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
        }
    }
}

/// A titled row of items on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ContentItem>,
}

/// The whole catalog, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl ContentCatalog {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Every item across all sections, in section order.
    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    pub fn find(&self, id: ItemId) -> Option<&ContentItem> {
        self.items().find(|item| item.id == id)
    }

    /// Checks that section and item titles are non-empty and that item ids
    /// are unique across the catalog.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.item_count());
        for (index, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(ModelError::EmptyTitle {
                    section: index,
                    item: None,
                });
            }
            for item in &section.items {
                if item.title.trim().is_empty() {
                    return Err(ModelError::EmptyTitle {
                        section: index,
                        item: Some(item.id),
                    });
                }
                if !seen.insert(item.id) {
                    return Err(ModelError::DuplicateItemId(item.id));
                }
            }
        }
        Ok(())
    }
}
