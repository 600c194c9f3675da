/// Page components. Each one owns its state; `render` submodules bind that
/// state to the DOM and only exist on wasm.

pub mod contact;
pub mod counters;
#[cfg(target_arch = "wasm32")]
pub mod footer;
pub mod modals;
pub mod nav;
pub mod panels;
pub mod projects;
pub mod scrollspy;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
use crate::{config::SiteConfig, error::Result};

/// Mounts a component against the live document.
#[cfg(target_arch = "wasm32")]
pub type Mount = fn(&SiteConfig) -> Result<()>;

/// Every component, in mount order. A failing component is logged and
/// skipped; the rest still mount.
#[cfg(target_arch = "wasm32")]
pub fn all() -> [(&'static str, Mount); 9] {
    [
        ("nav", nav::render::mount),
        ("typewriter", typewriter::render::mount),
        ("projects", projects::render::mount),
        ("panels", panels::render::mount),
        ("modals", modals::render::mount),
        ("scrollspy", scrollspy::render::mount),
        ("counters", counters::render::mount),
        ("contact", contact::render::mount),
        ("footer", footer::mount),
    ]
}
