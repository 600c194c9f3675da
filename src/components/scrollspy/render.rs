use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{ScrollSpy, SpyEntry};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::selectors::{ACTIVE_CLASS, NAV_SPY_LINKS, SECTIONS};

pub fn mount(config: &SiteConfig) -> Result<()> {
    let links = dom::query_all(NAV_SPY_LINKS)?;

    // Drop focus right after a click so the link does not stay highlighted.
    for link in &links {
        let link_ref = link.clone();
        dom::on_click(link, move |_| {
            if let Some(html) = link_ref.dyn_ref::<HtmlElement>() {
                let _ = html.blur();
            }
        })?;
    }

    let sections = dom::query_all(SECTIONS)?;
    if sections.is_empty() {
        return Ok(());
    }

    let spy = Rc::new(RefCell::new(ScrollSpy::new(
        links.iter().map(|l| l.get_attribute("href")).collect(),
    )));
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        let batch: Vec<(Option<String>, bool)> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|e| (e.target().get_attribute("id"), e.is_intersecting()))
            .collect();
        let entries: Vec<SpyEntry<'_>> = batch
            .iter()
            .map(|(id, intersecting)| SpyEntry {
                id: id.as_deref(),
                intersecting: *intersecting,
            })
            .collect();

        let mut spy = spy.borrow_mut();
        if spy.observe(&entries) {
            for (i, link) in links.iter().enumerate() {
                let _ = dom::set_class(link, ACTIVE_CLASS, spy.active() == Some(i));
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.scroll_spy_root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
