//! Project grid: category filter buttons plus a "show more" toggle.

#[cfg(target_arch = "wasm32")]
pub mod render;

use crate::disclosure::{Disclosure, Filter, Page, ToggleLabels};

/// What the grid should look like after an interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    /// Per card, in document order.
    pub cards: Vec<bool>,
    /// Label of the toggle control, `None` when it should be hidden.
    pub toggle: Option<String>,
}

pub struct ProjectGrid {
    cards: Disclosure,
    labels: ToggleLabels,
}

impl ProjectGrid {
    pub fn new(categories: Vec<Option<String>>, page_size: usize, labels: ToggleLabels) -> Self {
        Self {
            cards: Disclosure::new(categories, Page::First(page_size)),
            labels,
        }
    }

    pub fn filter(&self) -> &Filter {
        self.cards.filter()
    }

    /// Apply a filter button's `data-filter` value.
    pub fn select(&mut self, filter: &str) -> GridView {
        self.cards.apply_filter(Filter::parse(filter));
        self.view()
    }

    pub fn toggle(&mut self) -> GridView {
        self.cards.toggle();
        self.view()
    }

    pub fn view(&self) -> GridView {
        GridView {
            cards: self.cards.visibility(),
            toggle: self
                .cards
                .has_overflow()
                .then(|| self.cards.label(&self.labels).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(categories: &[&str]) -> ProjectGrid {
        ProjectGrid::new(
            categories.iter().map(|c| Some(c.to_string())).collect(),
            3,
            ToggleLabels {
                more: "Show More Projects".to_string(),
                less: "Hide Projects".to_string(),
            },
        )
    }

    fn shown(view: &GridView) -> usize {
        view.cards.iter().filter(|v| **v).count()
    }

    #[test]
    fn starts_on_all() {
        let g = grid(&["web", "ai"]);
        assert_eq!(g.filter(), &Filter::All);
        assert_eq!(g.view().cards, vec![true, true]);
        assert_eq!(g.view().toggle, None);
    }

    #[test]
    fn five_web_projects() {
        let mut g = grid(&["web", "web", "ai", "web", "web", "web", "ml"]);
        let view = g.select("web");
        assert_eq!(shown(&view), 3);
        assert_eq!(view.toggle.as_deref(), Some("Show More Projects"));

        let view = g.toggle();
        assert_eq!(shown(&view), 5);
        assert_eq!(view.toggle.as_deref(), Some("Hide Projects"));

        let view = g.toggle();
        assert_eq!(shown(&view), 3);
        assert_eq!(view.toggle.as_deref(), Some("Show More Projects"));
    }

    #[test]
    fn selecting_a_filter_resets_expansion() {
        let mut g = grid(&["web", "web", "web", "web", "ai", "ai", "ai", "ai"]);
        g.toggle();
        let view = g.select("ai");
        assert_eq!(shown(&view), 3);
        assert_eq!(view.toggle.as_deref(), Some("Show More Projects"));
        assert_eq!(view.cards[..4], [false; 4]);
    }

    #[test]
    fn unknown_category_hides_everything_and_the_toggle() {
        let mut g = grid(&["web", "ai", "ml", "web"]);
        let view = g.select("robotics");
        assert_eq!(shown(&view), 0);
        assert_eq!(view.toggle, None);
    }

    #[test]
    fn exactly_three_matches_hides_toggle() {
        let mut g = grid(&["web", "web", "web", "ai"]);
        let view = g.select("web");
        assert_eq!(shown(&view), 3);
        assert_eq!(view.toggle, None);
    }
}
