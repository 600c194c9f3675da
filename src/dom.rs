//! Thin helpers over `web_sys` shared by every component binding.
//!
//! Lookups return `Result<Option<_>>`: `Err` for a JavaScript exception
//! (e.g. an invalid selector), `Ok(None)` for an element the page simply
//! does not have.

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{PageError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(PageError::MissingElement("document"))
}

pub fn query(selector: &str) -> Result<Option<Element>> {
    Ok(document()?.query_selector(selector)?)
}

pub fn query_in(parent: &Element, selector: &str) -> Result<Option<Element>> {
    Ok(parent.query_selector(selector)?)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document()?.query_selector_all(selector)?))
}

pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(parent.query_selector_all(selector)?))
}

pub fn by_id(id: &str) -> Result<Option<Element>> {
    Ok(document()?.get_element_by_id(id))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<()> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

fn listen<E>(target: &EventTarget, event: &str, handler: Closure<dyn FnMut(E)>) -> Result<()>
where
    dyn FnMut(E): WasmClosure,
{
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

pub fn on_click(target: &EventTarget, handler: impl FnMut(web_sys::MouseEvent) + 'static) -> Result<()> {
    listen(
        target,
        "click",
        Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>),
    )
}

pub fn on_keydown(
    target: &EventTarget,
    handler: impl FnMut(web_sys::KeyboardEvent) + 'static,
) -> Result<()> {
    listen(
        target,
        "keydown",
        Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::KeyboardEvent)>),
    )
}

pub fn on_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<()> {
    listen(
        target,
        event,
        Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>),
    )
}

/// Run `f` once the document has been parsed.
pub fn on_ready(f: impl FnOnce() + 'static) -> Result<()> {
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    on_event(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
