//! Browser helpers.
//!
//! - [`dom`] - Safe access to window, document and scrolling APIs

pub mod dom;
