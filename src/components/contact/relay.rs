//! Bindings to the EmailJS browser SDK loaded by the page as the global
//! `emailjs`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlFormElement;

use crate::config::ContactConfig;
use crate::error::Result;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = init)]
    fn emailjs_init(public_key: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &HtmlFormElement,
    ) -> std::result::Result<js_sys::Promise, JsValue>;
}

pub struct EmailRelay {
    service_id: String,
    template_id: String,
}

impl EmailRelay {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
        }
    }

    /// Fails when the SDK script is missing or rejects the key.
    pub fn init(public_key: &str) -> Result<()> {
        emailjs_init(public_key)?;
        Ok(())
    }

    /// Send the form's fields through the configured template.
    pub async fn send_form(&self, form: &HtmlFormElement) -> Result<()> {
        let promise = emailjs_send_form(&self.service_id, &self.template_id, form)?;
        JsFuture::from(promise).await?;
        Ok(())
    }
}
