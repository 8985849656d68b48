//! Achievements grid and career summary.

use folio_core::content::{ACHIEVEMENTS, Achievement, AchievementCategory};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::shared;
use crate::components::icons as ic;
use crate::components::window::{PromptLine, SectionHeading, WindowBar};
use crate::config::ACHIEVEMENT_DETAILS_SHOWN;

stylance::import_crate_style!(css, "src/components/sections/achievements.module.css");

const CAREER_STATS: [(&str, &str); 4] = [
    ("75th", "Top Coder Rank"),
    ("45K", "KodeKloud XP"),
    ("40%", "Deploy Time Cut"),
    ("2+", "Years Experience"),
];

fn icon_for(id: &str) -> IconData {
    match id {
        "titan-top75" => ic::TROPHY,
        "aws-certified" => ic::CLOUD,
        "kodekloud-engineer" => ic::CODE,
        "platform-optimization" => ic::ZAP,
        "cloud-architecture" => ic::STAR,
        "team-leadership" => ic::USERS,
        _ => ic::AWARD,
    }
}

fn category_class(category: AchievementCategory) -> &'static str {
    match category {
        AchievementCategory::Hackathon => css::badgeHackathon,
        AchievementCategory::Certification => css::badgeCertification,
        AchievementCategory::Project => css::badgeProject,
        AchievementCategory::Recognition => css::badgeRecognition,
    }
}

#[component]
fn AchievementCard(achievement: &'static Achievement, index: usize) -> impl IntoView {
    let details = achievement
        .details
        .iter()
        .take(ACHIEVEMENT_DETAILS_SHOWN)
        .map(|d| view! { <li class=shared::bullet>{*d}</li> })
        .collect_view();

    view! {
        <div
            class=format!("{} {}", shared::window, shared::windowGlow)
            style=format!("animation-delay: {}ms", index * 100)
        >
            <WindowBar title=format!("achievement_{}.json", achievement.id)>
                <span class=format!("{} {}", css::badge, category_class(achievement.category))>
                    {achievement.category.as_str()}
                </span>
            </WindowBar>

            <div class=shared::body>
                <div class=css::header>
                    <span class=css::icon><Icon icon=icon_for(achievement.id) /></span>
                    <div>
                        <h3 class=css::title>{achievement.title}</h3>
                        <span class=css::date>
                            <Icon icon=ic::CALENDAR />
                            {achievement.date}
                        </span>
                    </div>
                </div>

                <p class=css::description>{achievement.description}</p>

                <h4 class=shared::subheading>
                    <Icon icon=ic::TARGET />
                    "Key Highlights:"
                </h4>
                <ul class=shared::bullets>{details}</ul>
            </div>
        </div>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let cards = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            view! { <AchievementCard achievement=achievement index=index /> }
        })
        .collect_view();

    let stats = CAREER_STATS
        .into_iter()
        .map(|(value, label)| {
            view! {
                <div>
                    <div class=css::statValue>{value}</div>
                    <div class=css::statLabel>{label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="achievements" class=shared::section>
            <div class=shared::container>
                <SectionHeading
                    title="Achievements & Recognition"
                    lead="Milestones and recognition earned through dedication, continuous learning, and delivering impactful solutions."
                />

                <div class=css::grid>{cards}</div>

                <div class=format!("{} {}", shared::window, css::summary)>
                    <WindowBar title="career_stats.summary" />
                    <div class=shared::body>
                        <div class=css::stats>{stats}</div>
                        <div class=css::echo>
                            <PromptLine text="echo \"Always learning, always growing\"" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
