/// Mobile navigation menu and in-page anchor scrolling.

#[cfg(target_arch = "wasm32")]
pub mod render;

/// Open/closed state of the mobile menu.
#[derive(Debug, Default)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Value for the toggle control's `aria-expanded` attribute.
pub fn aria_expanded(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// `href` values handled by in-page scrolling.
pub fn is_fragment(href: &str) -> bool {
    href.starts_with('#')
}

/// Document scroll position that brings a target just below the fixed header.
///
/// `target_top` is the target's top edge relative to the viewport and
/// `scroll_y` the current document scroll offset.
pub fn scroll_target(target_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (target_top + scroll_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut nav = NavState::new();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(!nav.toggle());
    }

    #[test]
    fn close_reports_previous_state() {
        let mut nav = NavState::new();
        assert!(!nav.close());
        nav.toggle();
        assert!(nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn aria_mirrors_state() {
        assert_eq!(aria_expanded(true), "true");
        assert_eq!(aria_expanded(false), "false");
    }

    #[test]
    fn only_fragment_links_scroll() {
        assert!(is_fragment("#projects"));
        assert!(is_fragment("#"));
        assert!(!is_fragment("/blog"));
        assert!(!is_fragment("https://example.com/#about"));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(500.0, 1000.0, 110.0), 1390.0);
    }

    #[test]
    fn scroll_target_clamps_to_top() {
        assert_eq!(scroll_target(40.0, 0.0, 110.0), 0.0);
        assert_eq!(scroll_target(-300.0, 100.0, 110.0), 0.0);
    }
}
