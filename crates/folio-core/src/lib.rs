//! Core logic for the portfolio site.
//!
//! Everything here is platform independent and driven by explicit calls, so
//! the browser front end and the CLI share one implementation:
//!
//! - [`commands`] - Command registry and line parsing
//! - [`session`] - Terminal transcript, input buffer and history recall
//! - [`typing`] - Character-by-character reveal state machines
//! - [`scroll_spy`] - Active-section tracking and scroll targets
//! - [`content`] - Portfolio content tables
//! - [`contact`] - Contact form validation

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod scroll_spy;
pub mod session;
pub mod typing;

pub use commands::{Command, CommandOutput, Invocation, run_line};
pub use contact::ContactForm;
pub use error::{ContactError, RevealError, TrackerError};
pub use scroll_spy::{IntersectionEntry, SectionTracker};
pub use session::{
    Clock, CommandHistory, ExecuteOutcome, HistoryDirection, SessionEvent, SystemClock,
    TerminalSession, TranscriptLine,
};
pub use typing::{MultiOutcome, MultiTyping, Tick, TickOutcome, TypingConfig, TypingRevealer};
