//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - Page identities targeted by the route table
//! - [`AppRoute`], [`ProfileParams`], [`UserId`] - Typed routes for hash-based navigation

mod page;
mod route;

pub use page::Page;
pub use route::{AppRoute, ProfileParams, UserId};
