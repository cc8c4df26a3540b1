//! Tripled item sequence backing an infinite carousel

use std::ops::Range;

use super::band::Band;

/// An item placed on the track, tagged with whether it is a clone.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackItem<T> {
    pub item: T,
    pub is_clone: bool,
}

/// `[reversed clones] + [originals] + [forward clones]`, `3 * N` long.
///
/// The middle band always holds the original values in their original order;
/// the leading band is reversed so that cards adjacent to the real band look
/// like a continuation of it when scrolled past its start.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    items: Vec<TrackItem<T>>,
    original_count: usize,
}

impl<T: Clone> Track<T> {
    /// Builds the tripled track. Returns `None` when `originals` is empty.
    pub fn build(originals: Vec<T>) -> Option<Self> {
        let n = originals.len();
        if n == 0 {
            return None;
        }

        let mut items = Vec::with_capacity(n * 3);
        items.extend(originals.iter().rev().map(|item| TrackItem {
            item: item.clone(),
            is_clone: true,
        }));
        let trailing: Vec<TrackItem<T>> = originals
            .iter()
            .map(|item| TrackItem {
                item: item.clone(),
                is_clone: true,
            })
            .collect();
        items.extend(originals.into_iter().map(|item| TrackItem {
            item,
            is_clone: false,
        }));
        items.extend(trailing);

        Some(Self {
            items,
            original_count: n,
        })
    }

    /// A track without clones, used by finite carousels.
    pub fn flat(originals: Vec<T>) -> Option<Self> {
        if originals.is_empty() {
            return None;
        }
        let original_count = originals.len();
        Some(Self {
            items: originals
                .into_iter()
                .map(|item| TrackItem {
                    item,
                    is_clone: false,
                })
                .collect(),
            original_count,
        })
    }
}

impl<T> Track<T> {
    /// Total mounted items, clones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of original (non-clone) items, `N`.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn is_tripled(&self) -> bool {
        self.items.len() == self.original_count * 3
    }

    pub fn items(&self) -> &[TrackItem<T>] {
        &self.items
    }

    /// Index range of a band. A flat track only has a real band.
    pub fn band_range(&self, band: Band) -> Range<usize> {
        let n = self.original_count;
        if !self.is_tripled() {
            return match band {
                Band::Real => 0..n,
                Band::Leading | Band::Trailing => 0..0,
            };
        }
        match band {
            Band::Leading => 0..n,
            Band::Real => n..2 * n,
            Band::Trailing => 2 * n..3 * n,
        }
    }

    pub fn band(&self, band: Band) -> &[TrackItem<T>] {
        &self.items[self.band_range(band)]
    }

    /// The original values, in original order.
    pub fn originals(&self) -> impl Iterator<Item = &T> {
        self.band(Band::Real).iter().map(|entry| &entry.item)
    }

    /// Count of items not tagged as clones.
    pub fn non_clone_count(&self) -> usize {
        self.items.iter().filter(|entry| !entry.is_clone).count()
    }
}
