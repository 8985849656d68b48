//! Error types for fallible setup.
//!
//! Terminal operations never fail; these cover configuration of the
//! scroll spy and typing effect, and contact form validation:
//!
//! - [`TrackerError`] - Section tracker configuration and navigation
//! - [`RevealError`] - Typing effect configuration
//! - [`ContactError`] - Contact form field validation

use thiserror::Error;

/// Section tracker errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// No section ids were given.
    #[error("section list is empty")]
    NoSections,
    /// The same section id appears twice.
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    /// Offset is negative or not a finite number.
    #[error("invalid scroll offset: {0}")]
    InvalidOffset(f64),
}

/// Typing effect configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// A zero speed would reveal the whole text in a busy loop.
    #[error("typing speed must be at least 1ms")]
    ZeroSpeed,
}

/// Contact form validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("subject is required")]
    MissingSubject,
    #[error("message is required")]
    MissingMessage,
}
