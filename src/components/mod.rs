//! UI components built with Leptos.
//!
//! - [`header`] - Fixed navigation bar with scroll-spy highlighting
//! - [`hero`] - Landing section with typing title and the terminal
//! - [`terminal`] - Interactive portfolio terminal
//! - [`sections`] - About, experience, projects, skills, achievements, contact
//! - [`footer`] - Page footer
//! - [`toast`] - Transient notifications
//! - [`window`] - Shared terminal-window chrome
//! - [`icons`] - Centralized icon definitions

pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod sections;
pub mod terminal;
pub mod toast;
pub mod window;

pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use sections::{About, Achievements, Contact, Experience, Projects, Skills};
pub use toast::Toaster;
