use folio_core::TranscriptLine;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// One transcript entry: the echoed command (if any) and its output.
#[component]
pub fn Output(line: TranscriptLine) -> impl IntoView {
    let command = (!line.command.is_empty()).then(|| {
        view! {
            <div class=css::command>
                <span class=css::sign>"$"</span>
                <span class=css::commandText>{line.command}</span>
            </div>
        }
    });

    view! {
        <div class=css::entry>
            {command}
            <pre class=css::text>{line.output}</pre>
        </div>
    }
}
