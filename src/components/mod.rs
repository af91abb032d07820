//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`pages`] - Login, home, profile and not-found pages

pub mod pages;
pub mod router;

pub use router::AppRouter;
