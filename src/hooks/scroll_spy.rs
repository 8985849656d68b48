//! Scroll spy hook.
//!
//! Observes every configured section with one `IntersectionObserver` and
//! forwards each batch of entries to the [`SectionTracker`].

use folio_core::{IntersectionEntry, SectionTracker};
use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SECTION_VISIBILITY_THRESHOLD;
use crate::utils::dom;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Start tracking which section is in view.
///
/// The observer is created after mount, once the sections exist in the
/// document, and disconnected when the owning component is disposed.
pub fn use_scroll_spy(tracker: RwSignal<SectionTracker>) {
    Effect::new(move |_| {
        let (sections, margin) =
            tracker.with_untracked(|t| (t.sections().to_vec(), t.root_margin()));

        let on_entries = move |entries: Array, _: IntersectionObserver| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                .collect();
            tracker.update(|t| {
                t.observe(&batch);
            });
        };
        let callback: ObserverCallback = Closure::new(on_entries);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin);
        options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                dom::warn("scroll spy: IntersectionObserver unavailable");
                return;
            }
        };

        let document = dom::document();
        for id in &sections {
            match document.as_ref().and_then(|d| d.get_element_by_id(id)) {
                Some(element) => observer.observe(&element),
                None => dom::warn(&format!("scroll spy: no element with id '{}'", id)),
            }
        }

        let handle = StoredValue::new_local((observer, callback));
        on_cleanup(move || {
            handle.try_with_value(|(observer, _)| observer.disconnect());
        });
    });
}

/// Smoothly scroll so the section's top sits just below the fixed header.
///
/// Unknown ids and sections missing from the document are silently ignored.
pub fn scroll_to_section(tracker: RwSignal<SectionTracker>, id: &str) {
    if let Some(top) = tracker.with_untracked(|t| t.scroll_target(id, dom::offset_top)) {
        dom::smooth_scroll_to(top);
    }
}
