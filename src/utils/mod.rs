//! Utility modules for browser access.
//!
//! Provides:
//! - [`HashHistory`] - Hash-fragment addressing rooted at the base path
//! - [`dom`] - Window, location and history helpers
//! - [`log`] - Console logging

pub mod dom;
pub mod history;
pub mod log;

pub use history::HashHistory;
