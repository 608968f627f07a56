//! Narrow DOM lookup helpers.
//!
//! Everything returns Option so missing page structure disables effects
//! instead of raising into page scripts.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn first_by_class(class: &str) -> Option<Element> {
    document()?.get_elements_by_class_name(class).item(0)
}

pub fn all_by_class(class: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let list = document.get_elements_by_class_name(class);
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn into_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

/// Current viewport size in px.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Current vertical scroll offset of the page.
pub fn scroll_top() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
