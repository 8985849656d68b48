//! Typing effect hook.
//!
//! Wraps a [`TypingRevealer`] in a signal and feeds it ticks from
//! `gloo_timers` timeouts. Only one timeout is pending at a time; replacing
//! or dropping the stored handle cancels it.

use folio_core::{Tick, TypingConfig, TypingRevealer};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

type TimerSlot = StoredValue<Option<Timeout>, LocalStorage>;

/// Read side of a running typing effect.
#[derive(Clone, Copy)]
pub struct TypingEffect {
    /// Revealed prefix of the text.
    pub displayed: Signal<String>,
    pub is_typing: Signal<bool>,
    pub is_complete: Signal<bool>,
}

/// Reveal `text` one character at a time.
///
/// Restarts from empty whenever `text` changes. `on_complete` runs each time
/// the last character appears, once per cycle when repeating. Timers stop
/// when the owning component is disposed.
pub fn use_typing_effect(
    text: impl Into<Signal<String>>,
    config: TypingConfig,
    on_complete: Option<Callback<()>>,
) -> TypingEffect {
    let text = text.into();
    let revealer = RwSignal::new(TypingRevealer::new(config));
    let timer: TimerSlot = StoredValue::new_local(None);

    Effect::new(move |_| {
        let source = text.get();
        let first = revealer.try_update(|r| r.start(source)).flatten();
        schedule(revealer, timer, on_complete, first);
    });

    TypingEffect {
        displayed: Signal::derive(move || revealer.with(|r| r.displayed().to_string())),
        is_typing: Signal::derive(move || revealer.with(|r| r.is_typing())),
        is_complete: Signal::derive(move || revealer.with(|r| r.is_complete())),
    }
}

/// Arm a timeout for `tick`, replacing whatever was pending.
fn schedule(
    revealer: RwSignal<TypingRevealer>,
    timer: TimerSlot,
    on_complete: Option<Callback<()>>,
    tick: Option<Tick>,
) {
    let pending = tick.map(|tick| {
        Timeout::new(tick.after_ms, move || {
            // None once the component is gone.
            let Some(outcome) = revealer.try_update(|r| r.tick(tick.epoch)) else {
                return;
            };
            if outcome.is_completed()
                && let Some(callback) = on_complete
            {
                callback.run(());
            }
            schedule(revealer, timer, on_complete, outcome.next());
        })
    });
    timer.try_set_value(pending);
}
