//! "Read more" panels (publications, experience) and the page-level group
//! toggles (awards, volunteering).

#[cfg(target_arch = "wasm32")]
pub mod render;

use crate::disclosure::{Disclosure, ToggleLabels};

/// `max-height` applied to a collapsed panel.
pub const COLLAPSED_HEIGHT: &str = "0px";

/// Selectors describing one family of read-more panels.
#[derive(Debug, Clone, Copy)]
pub struct PanelKind {
    pub toggle: &'static str,
    /// Closest ancestor of the toggle that holds the extra region.
    pub container: &'static str,
    pub extra: &'static str,
}

/// Result of toggling a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame<'a> {
    pub open: bool,
    pub max_height: String,
    pub label: &'a str,
}

#[derive(Debug, Default)]
pub struct Panel {
    open: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel. `natural_height` is the extra region's content height
    /// (px) measured at click time.
    pub fn toggle<'a>(&mut self, natural_height: i32, labels: &'a ToggleLabels) -> PanelFrame<'a> {
        self.open = !self.open;
        if self.open {
            PanelFrame {
                open: true,
                max_height: format!("{}px", natural_height.max(0)),
                label: &labels.less,
            }
        } else {
            PanelFrame {
                open: false,
                max_height: COLLAPSED_HEIGHT.to_string(),
                label: &labels.more,
            }
        }
    }
}

/// A list whose pre-marked items are revealed and hidden together by one
/// page-level button.
pub struct Group {
    items: Disclosure,
    marked: Vec<bool>,
    labels: ToggleLabels,
}

impl Group {
    /// `hidden[i]` is true for items the markup hides initially.
    pub fn new(hidden: Vec<bool>, labels: ToggleLabels) -> Self {
        Self {
            items: Disclosure::from_hidden_marks(&hidden),
            marked: hidden,
            labels,
        }
    }

    /// Nothing to reveal means the button stays inert.
    pub fn is_collapsible(&self) -> bool {
        self.items.has_overflow()
    }

    pub fn label(&self) -> &str {
        self.items.label(&self.labels)
    }

    /// Flip the group. Returns `(index, visible)` for every pre-marked item;
    /// the other items are never touched.
    pub fn toggle(&mut self) -> Vec<(usize, bool)> {
        self.items.toggle();
        self.items
            .visibility()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| self.marked[*i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_labels() -> ToggleLabels {
        ToggleLabels {
            more: "Read More".to_string(),
            less: "Read Less".to_string(),
        }
    }

    fn award_labels() -> ToggleLabels {
        ToggleLabels {
            more: "Show More Awards".to_string(),
            less: "Show Less Awards".to_string(),
        }
    }

    #[test]
    fn panel_opens_to_measured_height() {
        let labels = read_labels();
        let mut panel = Panel::new();
        let frame = panel.toggle(240, &labels);
        assert_eq!(
            frame,
            PanelFrame {
                open: true,
                max_height: "240px".to_string(),
                label: "Read Less",
            }
        );
        assert!(panel.is_open());
    }

    #[test]
    fn panel_closes_to_zero() {
        let labels = read_labels();
        let mut panel = Panel::new();
        panel.toggle(240, &labels);
        let frame = panel.toggle(240, &labels);
        assert!(!frame.open);
        assert_eq!(frame.max_height, "0px");
        assert_eq!(frame.label, "Read More");
    }

    #[test]
    fn panel_height_is_measured_every_time() {
        let labels = read_labels();
        let mut panel = Panel::new();
        panel.toggle(100, &labels);
        panel.toggle(100, &labels);
        assert_eq!(panel.toggle(180, &labels).max_height, "180px");
    }

    #[test]
    fn panels_are_independent() {
        let labels = read_labels();
        let mut a = Panel::new();
        let b = Panel::new();
        a.toggle(10, &labels);
        assert!(a.is_open());
        assert!(!b.is_open());
    }

    #[test]
    fn group_reveals_only_marked_items() {
        let mut group = Group::new(vec![false, false, true, true], award_labels());
        assert!(group.is_collapsible());
        assert_eq!(group.label(), "Show More Awards");

        assert_eq!(group.toggle(), vec![(2, true), (3, true)]);
        assert_eq!(group.label(), "Show Less Awards");

        assert_eq!(group.toggle(), vec![(2, false), (3, false)]);
        assert_eq!(group.label(), "Show More Awards");
    }

    #[test]
    fn group_without_hidden_items_is_inert() {
        let group = Group::new(vec![false, false], award_labels());
        assert!(!group.is_collapsible());
    }
}
