//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to a no-op (or `None`) when the API is unavailable.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up an element by id as an `HtmlElement`.
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Distance from the top of the document to the element with `id`.
pub fn offset_top(id: &str) -> Option<f64> {
    html_element_by_id(id).map(|el| f64::from(el.offset_top()))
}

/// Smoothly scroll the window to a vertical position.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Uniform random number in `[0, 1)`.
#[inline]
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Current calendar year in local time.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) -> HtmlElement {
        let doc = document().expect("document");
        let el = doc
            .create_element("div")
            .expect("create div")
            .dyn_into::<HtmlElement>()
            .expect("html element");
        el.set_id(id);
        doc.body().expect("body").append_child(&el).expect("append");
        el
    }

    #[wasm_bindgen_test]
    fn test_offset_top_missing_element() {
        assert_eq!(offset_top("no-such-section"), None);
    }

    #[wasm_bindgen_test]
    fn test_html_element_by_id() {
        let el = mount("dom-test-section");
        assert!(html_element_by_id("dom-test-section").is_some());
        assert!(offset_top("dom-test-section").is_some());
        el.remove();
    }

    #[wasm_bindgen_test]
    fn test_focus_element() {
        assert!(!focus_element("#missing-input"));
    }

    #[wasm_bindgen_test]
    fn test_random_range() {
        let r = random();
        assert!((0.0..1.0).contains(&r));
    }
}
