//! Terminal view component.
//!
//! The hero terminal: transcript, prompt line and quick-command buttons.

use folio_core::config::{PROMPT, QUICK_COMMANDS};
use folio_core::{HistoryDirection, TerminalSession};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::components::window::WindowBar;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Keep the newest transcript line in view.
fn setup_autoscroll_effect(
    session: RwSignal<TerminalSession>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let terminal = ctx.terminal;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(terminal.session, output_ref);

    // Callbacks
    let on_submit = Callback::new(move |_: ()| {
        terminal.submit();
    });
    let on_history_nav =
        Callback::new(move |direction: HistoryDirection| terminal.navigate_history(direction));
    let on_edit = Callback::new(move |text: String| terminal.set_input(text));
    let value = Signal::derive(move || terminal.input());

    let handle_click = move |_| {
        dom::focus_element("#terminal-input");
    };

    let quick_commands = QUICK_COMMANDS
        .iter()
        .map(|&cmd| {
            view! {
                <button class=css::quick on:click=move |_| terminal.run_quick(cmd)>
                    {cmd}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=css::container>
            <div class=format!("{} hover-glow", css::window)>
                <WindowBar title=PROMPT />
                <div node_ref=output_ref class=css::output on:click=handle_click>
                    <For
                        each=move || terminal.session.with(|s| s.lines().to_vec())
                        key=|line| line.id
                        children=|line| view! { <Output line=line /> }
                    />
                    <Input
                        value=value
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_edit=on_edit
                    />
                </div>
            </div>

            <div class=css::quickCommands>{quick_commands}</div>
        </div>
    }
}
