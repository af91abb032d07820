//! Core routing logic.
//!
//! This module provides:
//! - [`PathPattern`](pattern::PathPattern) template parsing and matching
//! - [`Params`] and [`FromParams`] for captured segments
//! - [`RouteTable`] construction, [`resolve`](RouteTable::resolve) and
//!   [`navigate`](RouteTable::navigate)

pub mod error;
mod params;
mod pattern;
mod table;

pub use params::{FromParams, Params};
#[cfg(test)]
pub use table::RouteEntry;
pub use table::{Resolved, RouteRequest, RouteTable};
