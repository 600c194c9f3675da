use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::{aria_expanded, is_fragment, scroll_target, NavState};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::selectors::{NAV, NAV_OPEN_CLASS, NAV_ROUTE_LINKS, NAV_TOGGLE};

pub fn mount(config: &SiteConfig) -> Result<()> {
    let nav = dom::query(NAV)?;
    let toggle = dom::query(NAV_TOGGLE)?;
    let state = Rc::new(RefCell::new(NavState::new()));

    if let Some(toggle_el) = &toggle {
        let nav = nav.clone();
        let toggle_ref = toggle_el.clone();
        let state = state.clone();
        dom::on_click(toggle_el, move |_| {
            let open = state.borrow_mut().toggle();
            paint(nav.as_ref(), Some(&toggle_ref), open);
        })?;
    }

    let header_offset = config.header_offset;
    for link in dom::query_all(NAV_ROUTE_LINKS)? {
        let nav = nav.clone();
        let toggle = toggle.clone();
        let state = state.clone();
        let link_ref = link.clone();
        dom::on_click(&link, move |event| {
            if let Some(href) = link_ref.get_attribute("href") {
                if is_fragment(&href) {
                    event.prevent_default();
                    if let Err(e) = scroll_to(&href, header_offset) {
                        web_sys::console::warn_1(&format!("nav: cannot scroll to {href}: {e}").into());
                    }
                }
            }
            if state.borrow_mut().close() {
                paint(nav.as_ref(), toggle.as_ref(), false);
            }
        })?;
    }

    Ok(())
}

fn paint(nav: Option<&Element>, toggle: Option<&Element>, open: bool) {
    if let Some(nav) = nav {
        let _ = dom::set_class(nav, NAV_OPEN_CLASS, open);
    }
    if let Some(toggle) = toggle {
        let _ = toggle.set_attribute("aria-expanded", aria_expanded(open));
    }
}

fn scroll_to(fragment: &str, header_offset: f64) -> Result<()> {
    let Some(target) = dom::query(fragment)? else {
        return Ok(());
    };
    let window = dom::window()?;
    let top = scroll_target(
        target.get_bounding_client_rect().top(),
        window.scroll_y()?,
        header_offset,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
