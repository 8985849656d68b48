//! Page sections below the hero.
//!
//! Each section renders a `folio_core::content` table. Ids match
//! `folio_core::config::SECTIONS` so the scroll spy can find them.

mod about;
mod achievements;
mod contact;
mod experience;
mod projects;
mod skills;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use experience::Experience;
pub use projects::Projects;
pub use skills::Skills;

stylance::import_crate_style!(pub shared, "src/components/sections/shared.module.css");

/// `class` plus `active_class` when `active` holds.
pub(crate) fn class_if(class: &str, active_class: &str, active: bool) -> String {
    if active {
        format!("{} {}", class, active_class)
    } else {
        class.to_string()
    }
}
