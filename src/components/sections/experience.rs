//! Experience timeline.

use folio_core::content::{EXPERIENCES, ExperienceEntry};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::shared;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::window::{SectionHeading, WindowBar};

stylance::import_crate_style!(css, "src/components/sections/experience.module.css");

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry, index: usize) -> impl IntoView {
    let side = if index % 2 == 0 { css::left } else { css::right };

    let achievements = entry
        .achievements
        .iter()
        .map(|a| view! { <li class=shared::bullet>{*a}</li> })
        .collect_view();

    let technologies = entry
        .technologies
        .iter()
        .map(|t| view! { <span class=shared::tag>{*t}</span> })
        .collect_view();

    view! {
        <div class=format!("{} {}", css::item, side) style=format!("animation-delay: {}ms", index * 150)>
            <span class=css::dot>
                {entry.current.then(|| view! { <span class=css::pulse></span> })}
            </span>

            <div class=format!("{} {} {}", shared::window, shared::windowGlow, css::card)>
                <WindowBar title=entry.file_label()>
                    {entry.current.then(|| view! { <span class=css::current>"Current"</span> })}
                </WindowBar>

                <div class=format!("{} {}", shared::body, css::cardBody)>
                    <div class=css::cardHeader>
                        <div>
                            <h3 class=css::company>
                                <Icon icon=ic::BUILDING />
                                {entry.company}
                            </h3>
                            <p class=css::role>{entry.role}</p>
                        </div>
                        <div class=css::meta>
                            <div class=css::period>
                                <Icon icon=ic::CALENDAR />
                                {entry.period}
                            </div>
                            <div>{entry.location}</div>
                        </div>
                    </div>

                    <p class=css::description>{entry.description}</p>

                    <div>
                        <h4 class=shared::subheading>
                            <span class=css::accentIcon><Icon icon=ic::GIT_BRANCH /></span>
                            "Key Achievements"
                        </h4>
                        <ul class=shared::bullets>{achievements}</ul>
                    </div>

                    <div>
                        <h4 class=shared::subheading>"Technologies"</h4>
                        <div class=shared::tags>{technologies}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let entries = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(index, entry)| view! { <ExperienceCard entry=entry index=index /> })
        .collect_view();

    view! {
        <section id="experience" class=format!("{} {}", shared::section, shared::sectionTinted)>
            <div class=shared::container>
                <SectionHeading
                    title="Professional Experience"
                    lead="My journey in DevOps and Platform Engineering, building scalable infrastructure and enabling development teams."
                />

                <div class=css::timeline>
                    <div class=css::line></div>
                    {entries}
                </div>

                <div class=shared::cta>
                    <div class=format!("{} {}", shared::window, css::next)>
                        <WindowBar title="career.next" />
                        <div class=shared::body>
                            <p class=css::seeking>
                                <span class=css::sign>"$ "</span>
                                "Looking for the next challenge..."
                            </p>
                            <button class=shared::button on:click=move |_| ctx.navigate_to("contact")>
                                "Let's Connect"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
