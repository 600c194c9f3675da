//! Paginated disclosure: a list of items where only a page is shown until
//! the user expands it.
//!
//! The project grid, the awards list and the volunteering list all follow
//! this model. The only difference is how the collapsed page is chosen:
//!
//! - [`Page::First`] shows the first `n` items matching the active filter
//!   (projects).
//! - [`Page::Marked`] shows the items the markup did not pre-mark as hidden
//!   (awards, community work).
//!
//! Expanding shows every item matching the active filter. Changing the filter
//! always collapses again.

/// Category filter applied to the items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Sentinel value used by the "all" filter button.
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => category == Some(c.as_str()),
        }
    }
}

/// Which matching items are shown while collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// The first `n` matches in document order.
    First(usize),
    /// Per item: `true` if shown while collapsed.
    Marked(Vec<bool>),
}

/// Texts for the toggle control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    pub more: String,
    pub less: String,
}

#[derive(Clone, Debug)]
pub struct Disclosure {
    categories: Vec<Option<String>>,
    page: Page,
    filter: Filter,
    expanded: bool,
}

impl Disclosure {
    /// `categories` holds one entry per item, in document order.
    pub fn new(categories: Vec<Option<String>>, page: Page) -> Self {
        Self {
            categories,
            page,
            filter: Filter::All,
            expanded: false,
        }
    }

    /// Disclosure over uncategorised items where `hidden[i]` marks the items
    /// kept out of the collapsed view.
    pub fn from_hidden_marks(hidden: &[bool]) -> Self {
        Self::new(
            vec![None; hidden.len()],
            Page::Marked(hidden.iter().map(|h| !h).collect()),
        )
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Switch the active filter. Always collapses.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.expanded = false;
    }

    /// Flip between collapsed and expanded. Returns the new expanded flag.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Indices of items matching the active filter, in document order.
    pub fn matching(&self) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| self.filter.matches(c.as_deref()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Visibility of every item under the current filter and expansion.
    pub fn visibility(&self) -> Vec<bool> {
        let mut visible = vec![false; self.categories.len()];
        for (rank, i) in self.matching().into_iter().enumerate() {
            visible[i] = self.expanded || self.in_page(rank, i);
        }
        visible
    }

    pub fn visible_count(&self) -> usize {
        self.visibility().iter().filter(|v| **v).count()
    }

    /// Matching items kept out of the collapsed view.
    pub fn overflow(&self) -> usize {
        self.matching()
            .into_iter()
            .enumerate()
            .filter(|(rank, i)| !self.in_page(*rank, *i))
            .count()
    }

    /// The toggle control is only useful when something is held back.
    pub fn has_overflow(&self) -> bool {
        self.overflow() > 0
    }

    pub fn label<'a>(&self, labels: &'a ToggleLabels) -> &'a str {
        if self.expanded {
            &labels.less
        } else {
            &labels.more
        }
    }

    fn in_page(&self, rank: usize, index: usize) -> bool {
        match &self.page {
            Page::First(n) => rank < *n,
            Page::Marked(shown) => shown.get(index).copied().unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(categories: &[&str]) -> Disclosure {
        Disclosure::new(
            categories.iter().map(|c| Some(c.to_string())).collect(),
            Page::First(3),
        )
    }

    fn labels() -> ToggleLabels {
        ToggleLabels {
            more: "Show More Projects".to_string(),
            less: "Hide Projects".to_string(),
        }
    }

    #[test]
    fn all_filter_shows_first_three() {
        let d = cards(&["web", "ai", "web", "ml", "web"]);
        assert_eq!(d.visibility(), vec![true, true, true, false, false]);
        assert_eq!(d.overflow(), 2);
        assert!(d.has_overflow());
    }

    #[test]
    fn web_filter_five_matches_scenario() {
        let mut d = cards(&["web", "ai", "web", "web", "ml", "web", "web"]);
        d.apply_filter(Filter::parse("web"));
        assert_eq!(d.visible_count(), 3);
        assert_eq!(d.label(&labels()), "Show More Projects");
        assert_eq!(
            d.visibility(),
            vec![true, false, true, true, false, false, false]
        );

        d.toggle();
        assert_eq!(d.visible_count(), 5);
        assert_eq!(d.label(&labels()), "Hide Projects");
        assert_eq!(
            d.visibility(),
            vec![true, false, true, true, false, true, true]
        );
    }

    #[test]
    fn filter_change_collapses() {
        let mut d = cards(&["web", "web", "web", "web", "ai"]);
        d.toggle();
        assert!(d.is_expanded());
        d.apply_filter(Filter::Category("ai".to_string()));
        assert!(!d.is_expanded());
        d.toggle();
        d.apply_filter(Filter::All);
        assert!(!d.is_expanded());
        assert_eq!(d.visible_count(), 3);
    }

    #[test]
    fn no_matches_shows_nothing() {
        let mut d = cards(&["web", "ai"]);
        d.apply_filter(Filter::parse("mobile"));
        assert_eq!(d.visible_count(), 0);
        assert!(!d.has_overflow());
    }

    #[test]
    fn three_or_fewer_matches_has_no_overflow() {
        let d = cards(&["web", "ai", "ml"]);
        assert_eq!(d.visible_count(), 3);
        assert!(!d.has_overflow());
    }

    #[test]
    fn uncategorised_items_only_match_all() {
        let mut d = Disclosure::new(vec![None, Some("web".to_string())], Page::First(3));
        assert_eq!(d.visible_count(), 2);
        d.apply_filter(Filter::parse("web"));
        assert_eq!(d.visibility(), vec![false, true]);
    }

    #[test]
    fn marked_page_hides_marked_items_until_expanded() {
        let mut d = Disclosure::from_hidden_marks(&[false, false, true, true]);
        assert_eq!(d.visibility(), vec![true, true, false, false]);
        assert_eq!(d.overflow(), 2);
        d.toggle();
        assert_eq!(d.visibility(), vec![true, true, true, true]);
        d.toggle();
        assert_eq!(d.visibility(), vec![true, true, false, false]);
    }

    #[test]
    fn marked_page_without_hidden_items_has_no_overflow() {
        let d = Disclosure::from_hidden_marks(&[false, false]);
        assert!(!d.has_overflow());
    }

    #[test]
    fn parse_all_sentinel() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("All"), Filter::Category("All".to_string()));
    }
}
