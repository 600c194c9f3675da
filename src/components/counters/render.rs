use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{format_count, parse_target, Counter, CounterStep};
use crate::config::{CounterConfig, SiteConfig};
use crate::dom;
use crate::error::Result;
use crate::selectors::{COUNTER, DATA_TARGET, STATS_SECTION};
use crate::task;

pub fn mount(config: &SiteConfig) -> Result<()> {
    let Some(section) = dom::query(STATS_SECTION)? else {
        return Ok(());
    };

    let settings = config.counters.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            match dom::query_all_in(&target, COUNTER) {
                Ok(counters) => counters.into_iter().for_each(|c| animate(c, &settings)),
                Err(e) => web_sys::console::warn_1(&format!("counters: {e}").into()),
            }
            // Runs once per page view.
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(config.counters.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observer.observe(&section);
    Ok(())
}

fn animate(el: Element, settings: &CounterConfig) {
    let raw = el.get_attribute(DATA_TARGET);
    let target = parse_target(raw.as_deref()).unwrap_or_else(|| {
        web_sys::console::warn_1(
            &format!("counters: data-target {:?} is not a number, using 0", raw).into(),
        );
        0.0
    });
    dom::set_text(&el, "0");

    let mut counter = Counter::new(target, settings.steps);
    let tick_ms = settings.tick_ms;
    task::spawn_loop(move || match counter.tick() {
        CounterStep::Continue(v) => {
            dom::set_text(&el, &format_count(v));
            Some(tick_ms)
        }
        CounterStep::Done(v) => {
            dom::set_text(&el, &format_count(v));
            None
        }
    });
}
