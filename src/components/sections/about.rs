//! About section.

use folio_core::content::{CURRENT_FOCUS, HIGHLIGHTS, STATS};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::shared;
use crate::components::icons as ic;
use crate::components::window::{PromptLine, SectionHeading, WindowBar};

stylance::import_crate_style!(css, "src/components/sections/about.module.css");

const STAT_ICONS: [IconData; 4] = [ic::ZAP, ic::CODE, ic::CLOUD, ic::USERS];
const HIGHLIGHT_ICONS: [IconData; 4] = [ic::GRADUATION, ic::CLOUD, ic::CODE, ic::AWARD];

#[component]
pub fn About() -> impl IntoView {
    let stats = STATS
        .iter()
        .zip(STAT_ICONS)
        .map(|(stat, icon)| {
            view! {
                <div class=format!("{} {}", css::stat, shared::windowGlow)>
                    <span class=css::statIcon><Icon icon=icon /></span>
                    <div class=css::statValue>{stat.value}</div>
                    <div class=css::statLabel>{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let focus = CURRENT_FOCUS
        .iter()
        .map(|item| view! { <li class=shared::bullet>{*item}</li> })
        .collect_view();

    let highlights = HIGHLIGHTS
        .iter()
        .zip(HIGHLIGHT_ICONS)
        .enumerate()
        .map(|(i, (highlight, icon))| {
            view! {
                <div
                    class=format!("{} {} {}", shared::card, shared::windowGlow, css::highlight)
                    style=format!("animation-delay: {}ms", i * 100)
                >
                    <span class=css::highlightIcon><Icon icon=icon /></span>
                    <h3 class=css::highlightTitle>{highlight.title}</h3>
                    <p class=css::highlightText>{highlight.description}</p>
                    <p class=css::highlightDetail>{highlight.detail}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class=shared::section>
            <div class=shared::container>
                <SectionHeading
                    title="About Me"
                    lead="Passionate Platform Engineer building scalable, resilient infrastructure that enables developers to ship faster and more reliably."
                />

                <div class=css::grid>
                    <div class=shared::window>
                        <WindowBar title="about.md" />
                        <div class=format!("{} {}", shared::body, css::intro)>
                            <p class=css::lead>
                                <span class=css::hash>"# "</span>
                                "Hello! I'm Jyothi Ram, a Platform Engineer passionate about creating infrastructure that just works."
                            </p>
                            <p>
                                "Currently pursuing my BTech at NIT Karnataka while working on cutting-edge DevOps projects that reduce deployment times, improve system reliability, and enable teams to focus on what they do best - building amazing products."
                            </p>
                            <p>
                                "My journey spans from implementing Kubernetes clusters and CI/CD pipelines to optimizing cloud costs and building monitoring solutions. I believe that great infrastructure should be invisible to developers but rock-solid in production."
                            </p>
                            <PromptLine text="Philosophy: \"Automate everything, fail fast, learn faster\"" />
                        </div>
                    </div>

                    <div class=css::side>
                        <div class=css::stats>{stats}</div>
                        <div class=shared::card>
                            <h3 class=css::focusTitle>"Current Focus"</h3>
                            <ul class=shared::bullets>{focus}</ul>
                        </div>
                    </div>
                </div>

                <div class=css::highlights>{highlights}</div>
            </div>
        </section>
    }
}
