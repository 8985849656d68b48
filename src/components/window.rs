//! Terminal-window chrome shared by every section.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/window.module.css");

/// Title bar with the three window dots and a file-name title.
///
/// Children render right-aligned after the title (status badges, close
/// buttons).
#[component]
pub fn WindowBar(
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=css::bar>
            <span class=format!("{} {}", css::dot, css::dotRed)></span>
            <span class=format!("{} {}", css::dot, css::dotYellow)></span>
            <span class=format!("{} {}", css::dot, css::dotGreen)></span>
            <span class=css::title>{title}</span>
            {children.map(|c| view! { <div class=css::trailing>{c()}</div> })}
        </div>
    }
}

/// Centered section title with a gradient heading and a lead paragraph.
#[component]
pub fn SectionHeading(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class=css::heading>
            <h2 class=css::headingTitle>
                <span class="text-gradient">{title}</span>
            </h2>
            <p class=css::headingLead>{lead}</p>
        </div>
    }
}

/// `$ command` prompt line used inside window bodies.
#[component]
pub fn PromptLine(text: &'static str) -> impl IntoView {
    view! {
        <p class=css::prompt>
            <span class=css::promptSign>"$ "</span>
            <span class=css::promptText>{text}</span>
        </p>
    }
}
