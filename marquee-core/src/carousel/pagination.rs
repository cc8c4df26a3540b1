//! Page indicator state mirrored alongside carousel moves.
//!
//! The carousel itself has no notion of pages; it only travels a fixed number
//! of cards per move. The mirror counts pages from the number of original
//! cards and wraps at both ends in lockstep with the moves its owner issues.

use super::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationMirror {
    total_pages: usize,
    current_page: usize,
}

impl PaginationMirror {
    /// `ceil(item_count / items_per_page)` pages, starting on the first.
    pub fn new(item_count: usize, items_per_page: usize) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            item_count.div_ceil(items_per_page)
        };
        Self {
            total_pages,
            current_page: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Steps one page, wrapping past either end. Returns the new page.
    pub fn advance(&mut self, direction: Direction) -> usize {
        if self.total_pages == 0 {
            return 0;
        }
        let last = self.total_pages - 1;
        self.current_page = match direction {
            Direction::Next if self.current_page < last => self.current_page + 1,
            Direction::Next => 0,
            Direction::Prev if self.current_page > 0 => self.current_page - 1,
            Direction::Prev => last,
        };
        self.current_page
    }

    /// One flag per indicator dot; `true` marks the active page.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.total_pages)
            .map(|page| page == self.current_page)
            .collect()
    }

    /// Direction and number of single-page slides needed to reach `page`.
    ///
    /// `None` for out-of-range pages; zero steps when already there.
    pub fn plan_jump(&self, page: usize) -> Option<(Direction, usize)> {
        if page >= self.total_pages {
            return None;
        }
        if page >= self.current_page {
            Some((Direction::Next, page - self.current_page))
        } else {
            Some((Direction::Prev, self.current_page - page))
        }
    }
}
