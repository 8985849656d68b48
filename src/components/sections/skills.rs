//! Skills with category filter, level bars and certifications.

use folio_core::content::{
    CERTIFICATIONS, CURRENTLY_LEARNING, Filter, SKILLS, SkillCategory, skills_in,
};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{class_if, shared};
use crate::components::icons as ic;
use crate::components::window::{SectionHeading, WindowBar};

stylance::import_crate_style!(css, "src/components/sections/skills.module.css");

fn category_icon(category: SkillCategory) -> IconData {
    match category {
        SkillCategory::Languages => ic::CODE,
        SkillCategory::Cloud => ic::CLOUD,
        SkillCategory::Devops => ic::GIT_BRANCH,
        SkillCategory::Databases => ic::DATABASE,
        SkillCategory::Monitoring => ic::MONITOR,
        SkillCategory::Security => ic::SHIELD,
    }
}

/// Filter buttons: "All Skills" first, then every category.
fn filters() -> Vec<(Filter<SkillCategory>, &'static str, IconData)> {
    std::iter::once((Filter::All, "All Skills", ic::CODE))
        .chain(
            SkillCategory::ALL
                .into_iter()
                .map(|c| (Filter::Only(c), c.label(), category_icon(c))),
        )
        .collect()
}

#[component]
pub fn Skills() -> impl IntoView {
    let active = RwSignal::new(Filter::<SkillCategory>::All);

    let filter_buttons = filters()
        .into_iter()
        .map(|(value, label, icon)| {
            let class =
                move || class_if(shared::filter, shared::filterActive, active.get() == value);
            view! {
                <button class=class on:click=move |_| active.set(value)>
                    <Icon icon=icon />
                    {label}
                </button>
            }
        })
        .collect_view();

    let skill_list = move || {
        skills_in(active.get())
            .enumerate()
            .map(|(i, skill)| {
                view! {
                    <div class=css::skill style=format!("animation-delay: {}ms", i * 60)>
                        <div class=css::skillHeader>
                            <div>
                                <h3 class=css::skillName>{skill.name}</h3>
                                <p class=css::skillDescription>{skill.description}</p>
                            </div>
                            <span class=css::level>{format!("{}%", skill.level)}</span>
                        </div>
                        <div class=css::track>
                            <div class=css::bar style=format!("--level: {}%", skill.level)></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let certifications = CERTIFICATIONS
        .iter()
        .map(|cert| {
            view! {
                <div class=css::cert>
                    <div>
                        <h4 class=css::certName>{cert.name}</h4>
                        <p class=css::certMeta>{cert.issuer}</p>
                        <p class=css::certMeta>{cert.year}</p>
                        {cert.score.map(|score| view! { <p class=css::certScore>{score}</p> })}
                    </div>
                    {cert.verified.then(|| view! {
                        <span class=css::verified title="Verified">"✓"</span>
                    })}
                </div>
            }
        })
        .collect_view();

    let learning = CURRENTLY_LEARNING
        .iter()
        .map(|topic| {
            view! {
                <div class=css::learning>
                    <span class=css::learningMark>"⚡"</span>
                    <span>{*topic}</span>
                </div>
            }
        })
        .collect_view();

    let quick_stats = [
        (SKILLS.len().to_string(), "Skills", css::statPrimary),
        (CERTIFICATIONS.len().to_string(), "Certifications", css::statAccent),
        ("2+".to_string(), "Years Exp.", css::statSuccess),
        ("24/7".to_string(), "Learning", css::statWarning),
    ]
    .into_iter()
    .map(|(value, label, class)| {
        view! {
            <div>
                <div class=class>{value}</div>
                <div class=css::statLabel>{label}</div>
            </div>
        }
    })
    .collect_view();

    view! {
        <section id="skills" class=format!("{} {}", shared::section, shared::sectionTinted)>
            <div class=shared::container>
                <SectionHeading
                    title="Technical Skills"
                    lead="A comprehensive overview of my technical expertise in DevOps, cloud computing, and software development."
                />

                <div class=shared::filters>{filter_buttons}</div>

                <div class=css::layout>
                    <div class=format!("{} {}", shared::window, css::main)>
                        <WindowBar title=Signal::derive(move || format!("skills_{}.json", active.get().id())) />
                        <div class=format!("{} {}", shared::body, css::list)>{skill_list}</div>
                    </div>

                    <div class=css::aside>
                        <div class=shared::window>
                            <WindowBar title="certifications.json" />
                            <div class=shared::body>
                                <h3 class=css::asideTitle>"Certifications"</h3>
                                {certifications}
                            </div>
                        </div>

                        <div class=shared::window>
                            <WindowBar title="learning.log" />
                            <div class=shared::body>
                                <h3 class=css::asideTitle>"Currently Learning"</h3>
                                {learning}
                            </div>
                        </div>

                        <div class=shared::card>
                            <h3 class=css::asideTitle>"Quick Stats"</h3>
                            <div class=css::stats>{quick_stats}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
