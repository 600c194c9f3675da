use std::cell::RefCell;
use std::rc::Rc;

use super::PhraseCycle;
use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::selectors::TYPEWRITER_TEXT;
use crate::task::{self, TaskHandle};

pub fn mount(config: &SiteConfig) -> Result<()> {
    let Some(cycle) = PhraseCycle::new(&config.typewriter) else {
        return Ok(());
    };
    let cycle = Rc::new(RefCell::new(cycle));
    let handle = Rc::new(RefCell::new(start(cycle.clone())));

    // Pause while the page sits in the back/forward cache, resume where it
    // left off when shown again.
    let window = dom::window()?;
    {
        let handle = handle.clone();
        dom::on_event(&window, "pagehide", move |_| handle.borrow().stop())?;
    }
    dom::on_event(&window, "pageshow", move |_| {
        if handle.borrow().is_stopped() {
            *handle.borrow_mut() = start(cycle.clone());
        }
    })
}

/// Start the typing loop. The text element is looked up on every tick; the
/// loop ends as soon as it is gone.
pub fn start(cycle: Rc<RefCell<PhraseCycle>>) -> TaskHandle {
    task::spawn_loop(move || {
        let target = dom::query(TYPEWRITER_TEXT).ok().flatten()?;
        let step = cycle.borrow_mut().tick();
        dom::set_text(&target, &step.text);
        Some(step.delay_ms)
    })
}
