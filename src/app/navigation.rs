//! Current page and drawer visibility

use crate::constants::COMPACT_BREAKPOINT;
use crate::types::Page;

/// True when a window of this width should use the compact layout
pub fn is_compact(width: f32) -> bool {
    width <= COMPACT_BREAKPOINT
}

#[derive(Debug, Default)]
pub struct Navigation {
    page: Page,
    drawer_open: bool,
}

impl Navigation {
    pub fn page(&self) -> Page {
        self.page
    }

    /// Only meaningful in the compact layout; the wide layout always shows the drawer.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn select(&mut self, page: Page, compact: bool) {
        self.page = page;
        if compact {
            self.drawer_open = false;
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_home_with_drawer_closed() {
        let nav = Navigation::default();
        assert_eq!(nav.page(), Page::Home);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn test_compact_select_closes_drawer() {
        let mut nav = Navigation::default();
        nav.toggle_drawer();
        assert!(nav.drawer_open());

        nav.select(Page::Instructions, true);
        assert_eq!(nav.page(), Page::Instructions);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn test_wide_select_leaves_drawer() {
        let mut nav = Navigation::default();
        nav.toggle_drawer();
        nav.select(Page::Instructions, false);
        assert_eq!(nav.page(), Page::Instructions);
        assert!(nav.drawer_open());
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_compact(768.0));
        assert!(is_compact(400.0));
        assert!(!is_compact(769.0));
    }
}
