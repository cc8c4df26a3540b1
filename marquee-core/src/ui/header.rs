//! Sticky header reacting to page scroll, and the top navigation links.

/// Page offset past which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;
/// Page offset past which scrolling down hides the header.
pub const HIDE_THRESHOLD: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    scrolled: bool,
    hidden: bool,
    last_y: f64,
}

impl HeaderState {
    pub fn new(initial_y: f64) -> Self {
        Self {
            scrolled: initial_y > SCROLLED_THRESHOLD,
            hidden: false,
            last_y: initial_y,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feeds the current page offset. Scrolling down past
    /// [`HIDE_THRESHOLD`] hides the header; any other movement shows it.
    pub fn on_page_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLLED_THRESHOLD;
        self.hidden = y > self.last_y && y > HIDE_THRESHOLD;
        self.last_y = y;
    }
}

/// Top navigation. Exactly one link is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinks {
    labels: Vec<String>,
    active: usize,
}

impl NavLinks {
    /// `None` when there are no links to show.
    pub fn new<I, L>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        (!labels.is_empty()).then_some(Self { labels, active: 0 })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &str {
        &self.labels[self.active]
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Makes `index` the active link. Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_style_follows_threshold() {
        let mut header = HeaderState::default();
        header.on_page_scroll(100.0);
        assert!(!header.is_scrolled());
        header.on_page_scroll(101.0);
        assert!(header.is_scrolled());
        header.on_page_scroll(20.0);
        assert!(!header.is_scrolled());
    }

    #[test]
    fn hides_only_when_scrolling_down_past_threshold() {
        let mut header = HeaderState::default();
        header.on_page_scroll(150.0);
        assert!(!header.is_hidden(), "below hide threshold");
        header.on_page_scroll(250.0);
        assert!(header.is_hidden());
        header.on_page_scroll(240.0);
        assert!(!header.is_hidden(), "scrolling up reveals the header");
        header.on_page_scroll(240.0);
        assert!(!header.is_hidden(), "no movement keeps it visible");
    }

    #[test]
    fn nav_links_keep_a_single_active_entry() {
        assert!(NavLinks::new(Vec::<String>::new()).is_none());
        let mut nav = NavLinks::new(["Home", "Series", "Movies"]).expect("links");
        assert_eq!(nav.active_label(), "Home");
        assert!(nav.activate(2));
        assert_eq!(nav.active_label(), "Movies");
        assert!(!nav.activate(3));
        assert_eq!(nav.active(), 2);
    }
}
