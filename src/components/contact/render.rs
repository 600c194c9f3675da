use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlFormElement};

use super::relay::EmailRelay;
use super::SubmitButton;
use crate::config::SiteConfig;
use crate::dom;
use crate::error::{PageError, Result};
use crate::selectors::{CONTACT_FORM_ID, SUBMIT_BUTTON_ID};
use crate::task;

pub fn mount(config: &SiteConfig) -> Result<()> {
    let Some(form) = dom::by_id(CONTACT_FORM_ID)?.and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let button = dom::by_id(SUBMIT_BUTTON_ID)?
        .and_then(|b| b.dyn_into::<HtmlElement>().ok())
        .ok_or(PageError::MissingElement("#submit-btn"))?;

    let contact = Rc::new(config.contact.clone());
    if let Err(e) = EmailRelay::init(&contact.public_key) {
        // Submissions will fail and tell the visitor.
        web_sys::console::warn_1(&format!("contact: email relay unavailable: {e}").into());
    }
    let relay = Rc::new(EmailRelay::new(&contact));
    let state = Rc::new(RefCell::new(SubmitButton::new(button.inner_text())));

    let form_ref = form.clone();
    dom::on_event(&form, "submit", move |event| {
        event.prevent_default();
        let Some(label) = state.borrow_mut().begin(&contact).map(str::to_owned) else {
            return;
        };
        button.set_inner_text(&label);

        let (form, button, state, relay, contact) = (
            form_ref.clone(),
            button.clone(),
            state.clone(),
            relay.clone(),
            contact.clone(),
        );
        spawn_local(async move {
            let result = relay.send_form(&form).await;
            let outcome = state.borrow_mut().finish(result.is_ok(), &contact);
            button.set_inner_text(&outcome.label);

            if let Some(message) = &outcome.alert {
                if let Ok(window) = dom::window() {
                    let _ = window.alert_with_message(message);
                }
            }
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("contact: sending failed: {e}").into());
            }
            if outcome.reset_form {
                form.reset();
            }
            if let Some(delay_ms) = outcome.revert_after_ms {
                task::after(delay_ms, move || {
                    if let Some(original) = state.borrow_mut().revert() {
                        button.set_inner_text(original);
                    }
                });
            }
        });
    })
}
