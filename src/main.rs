// Everything but the pure state modules is wasm-only; keep host builds quiet.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod components;
mod config;
mod disclosure;
mod error;
mod selectors;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod task;

fn main() {
    #[cfg(target_arch = "wasm32")]
    start();
}

#[cfg(target_arch = "wasm32")]
fn start() {
    console_error_panic_hook::set_once();

    let ready = dom::on_ready(|| {
        let config = config::SiteConfig::load();
        for (name, mount) in components::all() {
            if let Err(e) = mount(&config) {
                web_sys::console::error_1(&format!("{name}: {e}").into());
            }
        }
        web_sys::console::log_1(&"portfolio: behaviors mounted".into());
    });
    if let Err(e) = ready {
        web_sys::console::error_1(&format!("portfolio: cannot start: {e}").into());
    }
}
