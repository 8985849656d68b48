//! Reactive hooks bridging `folio_core` state machines to the browser.
//!
//! - [`use_typing_effect`] - Character-by-character reveal driven by timers
//! - [`use_scroll_spy`] - Active section tracking with IntersectionObserver

mod scroll_spy;
mod typing;

pub use scroll_spy::{scroll_to_section, use_scroll_spy};
pub use typing::{TypingEffect, use_typing_effect};
