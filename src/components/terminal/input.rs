//! Terminal prompt line.

use folio_core::HistoryDirection;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Single-line command input.
///
/// Enter submits the buffer; the arrow keys step through history. The
/// buffer itself lives in the session, so `value` is the only source of
/// truth for what is displayed.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    on_submit: Callback<()>,
    on_history_nav: Callback<HistoryDirection>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => on_submit.run(()),
        "ArrowUp" => {
            ev.prevent_default();
            on_history_nav.run(HistoryDirection::Up);
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            on_history_nav.run(HistoryDirection::Down);
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_edit.run(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>"$"</span>
            <input
                id="terminal-input"
                node_ref=input_ref
                type="text"
                class=css::input
                placeholder="Type 'help' for available commands..."
                autocomplete="off"
                spellcheck="false"
                prop:value=value
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <span class="typing-cursor"></span>
        </div>
    }
}
