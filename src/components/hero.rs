//! Landing section.
//!
//! ASCII logo, typed title and subtitle, headline badges, the interactive
//! terminal and a falling-digit background.

use folio_core::TypingConfig;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::terminal::Terminal;
use crate::config::{ASCII_LOGO, hero, matrix};
use crate::hooks::use_typing_effect;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero.module.css");

/// One falling digit of the background.
#[derive(Clone, Debug)]
struct RainDrop {
    left_pct: f64,
    delay_s: f64,
    duration_s: f64,
    digit: char,
}

impl RainDrop {
    fn random() -> Self {
        Self {
            left_pct: dom::random() * 100.0,
            delay_s: dom::random() * matrix::MAX_DELAY_S,
            duration_s: matrix::MIN_DURATION_S + dom::random() * matrix::DURATION_SPREAD_S,
            digit: if dom::random() > 0.5 { '1' } else { '0' },
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.delay_s, self.duration_s
        )
    }
}

#[component]
fn MatrixRain() -> impl IntoView {
    let drops: Vec<RainDrop> = (0..matrix::COLUMNS).map(|_| RainDrop::random()).collect();
    view! {
        <div class=css::matrix aria-hidden="true">
            {drops
                .into_iter()
                .map(|drop| {
                    view! {
                        <span class=css::drop style=drop.style()>{drop.digit.to_string()}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = use_typing_effect(
        hero::TITLE.to_string(),
        TypingConfig::new(hero::TITLE_SPEED_MS, hero::TITLE_DELAY_MS, false).unwrap_or_default(),
        None,
    );

    // Badges appear once the subtitle has been typed.
    let intro_done = RwSignal::new(false);
    let subtitle = use_typing_effect(
        hero::SUBTITLE.to_string(),
        TypingConfig::new(hero::SUBTITLE_SPEED_MS, hero::SUBTITLE_DELAY_MS, false)
            .unwrap_or_default(),
        Some(Callback::new(move |_| intro_done.set(true))),
    );

    let badges = hero::BADGES
        .iter()
        .enumerate()
        .map(|(i, &(label, value))| {
            let value_class = match i {
                0 => css::badgePrimary,
                1 => css::badgeAccent,
                _ => css::badgeSuccess,
            };
            view! {
                <div class=css::badge>
                    <span class=css::badgeLabel>{label}</span>
                    <span class=value_class>{value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="hero" class=css::hero>
            <div class=css::backdrop></div>
            <MatrixRain />

            <div class=css::content>
                <div class=css::intro>
                    <pre class=css::logo>{ASCII_LOGO}</pre>

                    <h1 class=css::title>
                        <span class="text-gradient">{title.displayed}</span>
                        <Show when=move || !title.is_complete.get()>
                            <span class="typing-cursor"></span>
                        </Show>
                    </h1>

                    <p class=css::subtitle>
                        {subtitle.displayed}
                        // Cursor moves here once the title is done.
                        <Show when=move || title.is_complete.get() || subtitle.is_typing.get()>
                            <span class="typing-cursor"></span>
                        </Show>
                    </p>

                    <div class=move || {
                        if intro_done.get() {
                            format!("{} {}", css::badges, css::badgesVisible)
                        } else {
                            css::badges.to_string()
                        }
                    }>
                        {badges}
                    </div>
                </div>

                <div class=css::terminalSlot>
                    <Terminal />
                </div>

                <button class=css::scrollHint on:click=move |_| ctx.navigate_to("about")>
                    <span>"Scroll to explore"</span>
                    <Icon icon=ic::CHEVRON_DOWN />
                </button>
            </div>
        </section>
    }
}
