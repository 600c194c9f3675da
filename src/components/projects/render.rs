use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::{GridView, ProjectGrid};
use crate::config::SiteConfig;
use crate::disclosure::{Filter, ToggleLabels};
use crate::dom;
use crate::error::Result;
use crate::selectors::{
    ACTIVE_CLASS, DATA_CATEGORY, DATA_FILTER, FILTER_BUTTONS, PROJECTS_TOGGLE,
    PROJECT_CARDS, PROJECT_HIDDEN_CLASS, PROJECT_VISIBLE_CLASS,
};

struct ProjectsDom {
    cards: Vec<Element>,
    toggle: Option<Element>,
}

impl ProjectsDom {
    fn paint(&self, view: &GridView) {
        for (card, &visible) in self.cards.iter().zip(&view.cards) {
            let _ = dom::set_style(card, "display", if visible { "flex" } else { "none" });
            let _ = dom::set_class(card, PROJECT_VISIBLE_CLASS, visible);
            let _ = dom::set_class(card, PROJECT_HIDDEN_CLASS, !visible);
        }
        if let Some(toggle) = &self.toggle {
            match &view.toggle {
                Some(label) => {
                    let _ = dom::set_style(toggle, "display", "inline-block");
                    dom::set_text(toggle, label);
                }
                None => {
                    let _ = dom::set_style(toggle, "display", "none");
                }
            }
        }
    }
}

pub fn mount(config: &SiteConfig) -> Result<()> {
    let cards = dom::query_all(PROJECT_CARDS)?;
    if cards.is_empty() {
        return Ok(());
    }
    let categories = cards.iter().map(|c| c.get_attribute(DATA_CATEGORY)).collect();
    let grid = Rc::new(RefCell::new(ProjectGrid::new(
        categories,
        config.projects_page_size,
        ToggleLabels {
            more: config.labels.projects_more.clone(),
            less: config.labels.projects_less.clone(),
        },
    )));
    let page = Rc::new(ProjectsDom {
        cards,
        toggle: dom::query(PROJECTS_TOGGLE)?,
    });

    page.paint(&grid.borrow_mut().select(Filter::ALL));

    let buttons = Rc::new(dom::query_all(FILTER_BUTTONS)?);
    for button in buttons.iter() {
        let buttons = buttons.clone();
        let button_ref = button.clone();
        let grid = grid.clone();
        let page = page.clone();
        dom::on_click(button, move |_| {
            for b in buttons.iter() {
                let _ = dom::set_class(b, ACTIVE_CLASS, false);
            }
            let _ = dom::set_class(&button_ref, ACTIVE_CLASS, true);
            let filter = button_ref
                .get_attribute(DATA_FILTER)
                .unwrap_or_else(|| Filter::ALL.to_string());
            let view = grid.borrow_mut().select(&filter);
            page.paint(&view);
        })?;
    }

    if let Some(toggle) = &page.toggle {
        let grid = grid.clone();
        let page = page.clone();
        dom::on_click(toggle, move |_| {
            let view = grid.borrow_mut().toggle();
            page.paint(&view);
        })?;
    }

    Ok(())
}
