//! Fixed site header.
//!
//! Wordmark, section navigation highlighted by the scroll spy, profile links
//! and a collapsible menu for narrow screens.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BRAND, NAV_ITEMS, PROFILE_LINKS};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// `jyothi` `ram` `.dev` in three colours.
#[component]
pub fn Wordmark() -> impl IntoView {
    let [first, second, suffix] = BRAND;
    view! {
        <span class=css::wordmark>
            <span class=css::brandPrimary>{first}</span>
            <span class=css::brandAccent>{second}</span>
            <span class=css::brandMuted>{suffix}</span>
        </span>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let menu_open = ctx.menu_open;

    // The drawer only exists below the desktop breakpoint.
    let is_desktop = use_media_query("(min-width: 768px)");
    Effect::new(move |_| {
        if is_desktop.get() {
            menu_open.set(false);
        }
    });

    let is_active = move |id: &'static str| ctx.sections.with(|t| t.is_active(id));

    let desktop_nav = NAV_ITEMS
        .iter()
        .map(|&(id, label)| {
            let class = move || {
                if is_active(id) {
                    format!("{} {}", css::navItem, css::navItemActive)
                } else {
                    css::navItem.to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| ctx.navigate_to(id)>
                    {label}
                    <Show when=move || is_active(id)>
                        <span class=css::underline></span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    let mobile_nav = move || {
        NAV_ITEMS
            .iter()
            .map(|&(id, label)| {
                let class = move || {
                    if is_active(id) {
                        format!("{} {}", css::mobileItem, css::mobileItemActive)
                    } else {
                        css::mobileItem.to_string()
                    }
                };
                view! {
                    <button class=class on:click=move |_| ctx.navigate_to(id)>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let profile_links = move || {
        PROFILE_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        class=css::social
                        href=link.href
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=link.label
                    >
                        <Icon icon=ic::for_link(link.label) />
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=css::header>
            <div class=css::inner>
                <button class=css::logo on:click=move |_| ctx.navigate_to("hero")>
                    <span class=css::logoIcon><Icon icon=ic::TERMINAL /></span>
                    <Wordmark />
                </button>

                <nav class=css::nav>{desktop_nav}</nav>

                <div class=css::socials>{profile_links()}</div>

                <button
                    class=css::menuButton
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class=css::mobileMenu>
                    {mobile_nav()}
                    <div class=css::mobileSocials>{profile_links()}</div>
                </div>
            </Show>
        </header>
    }
}
