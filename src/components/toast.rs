//! Transient notifications.
//!
//! Shows the toast held in [`AppContext`] and dismisses it after
//! [`TOAST_DURATION_MS`]. A newer toast replaces the current one and
//! restarts the countdown.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toast = ctx.toast;
    let dismiss_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let armed = toast.with(Option::is_some).then(|| {
            Timeout::new(TOAST_DURATION_MS, move || {
                toast.try_set(None);
            })
        });
        dismiss_timer.try_set_value(armed);
    });

    move || {
        toast.get().map(|t| {
            let class = if t.is_error {
                format!("{} {}", css::toast, css::toastError)
            } else {
                css::toast.to_string()
            };
            view! {
                <div class=css::viewport role="status" aria-live="polite">
                    <div class=class>
                        <div class=css::content>
                            <p class=css::title>{t.title}</p>
                            <p class=css::description>{t.description}</p>
                        </div>
                        <button class=css::close aria-label="Dismiss" on:click=move |_| toast.set(None)>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </div>
            }
        })
    }
}
