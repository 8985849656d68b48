//! Page footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::header::Wordmark;
use crate::components::icons as ic;
use crate::components::window::{PromptLine, WindowBar};
use crate::config::{BUILT_WITH, FOOTER_LINKS, OWNER, PROFILE_LINKS};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let quick_links = FOOTER_LINKS
        .iter()
        .map(|&(id, label)| {
            view! {
                <li>
                    <button class=css::quickLink on:click=move |_| ctx.navigate_to(id)>
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    let profiles = PROFILE_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    class=css::profile
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                >
                    <Icon icon=ic::for_link(link.label) />
                </a>
            }
        })
        .collect_view();

    let built_with = BUILT_WITH
        .iter()
        .map(|name| view! { <span class=css::badge>{*name}</span> })
        .collect_view();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::grid>
                    <div class=css::brand>
                        <div class=css::logo>
                            <span class=css::logoIcon><Icon icon=ic::TERMINAL /></span>
                            <Wordmark />
                        </div>
                        <p class=css::tagline>
                            "Platform Engineer & DevOps Specialist passionate about building scalable, reliable infrastructure and automating everything."
                        </p>
                        <div class=css::status>
                            <WindowBar title="status.log" />
                            <div class=css::statusBody>
                                <p class=css::statusLine>
                                    <span class=css::statusDot></span>
                                    "Available for new opportunities"
                                </p>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h3 class=css::heading>"Quick Links"</h3>
                        <ul class=css::list>{quick_links}</ul>
                    </div>

                    <div>
                        <h3 class=css::heading>"Connect"</h3>
                        <div class=css::profiles>{profiles}</div>
                        <h4 class=css::subheading>"Built With"</h4>
                        <div class=css::badges>{built_with}</div>
                    </div>
                </div>

                <div class=css::bottom>
                    <p class=css::copyright>
                        {format!("© {} {}. Made with ", dom::current_year(), OWNER)}
                        <span class=css::heart><Icon icon=ic::HEART /></span>
                        " and lots of ☕"
                    </p>
                    <div class=css::thanks>
                        <PromptLine text="./thank_you.sh" />
                    </div>
                </div>
            </div>
        </footer>
    }
}
