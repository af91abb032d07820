//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each routing stage:
//!
//! - [`PatternError`] - Malformed path templates
//! - [`RouteTableError`] - Route table construction and definition loading
//! - [`ResolveError`] - Path resolution and redirect following
//! - [`ParamError`] - Typed parameter extraction from captured segments

use thiserror::Error;

/// Path template parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Template does not start with '/'
    #[error("pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    /// `:` or `*` without a name
    #[error("pattern '{pattern}' has an unnamed capture segment")]
    EmptyCaptureName { pattern: String },
    /// Catch-all segment followed by more segments
    #[error("pattern '{pattern}' has a catch-all segment that is not last")]
    CatchAllNotLast { pattern: String },
    /// The same capture name bound twice
    #[error("pattern '{pattern}' binds '{name}' more than once")]
    DuplicateCapture { pattern: String, name: String },
}

/// Route table construction errors.
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// A template failed to parse.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// Static route definition could not be deserialized.
    #[error("invalid route definition: {0}")]
    Definition(#[from] toml::de::Error),
    /// Entry declares both a page and a redirect, or neither.
    #[error("route '{pattern}' must declare exactly one of `page` or `redirect`")]
    AmbiguousTarget { pattern: String },
    /// Two non-redirect entries share the same shape.
    #[error("route '{pattern}' is declared more than once")]
    DuplicatePattern { pattern: String },
    /// No entry matches `/`.
    #[error("no route matches the root path")]
    MissingRoot,
    /// More than one entry matches `/`, or the root entry renders a page.
    #[error("root path must be matched by exactly one redirect route, found '{pattern}'")]
    InvalidRoot { pattern: String },
    /// Catch-all entry declared before other entries.
    #[error("catch-all route '{pattern}' must be declared last")]
    CatchAllNotLast { pattern: String },
}

/// Path resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No entry matches the path
    #[error("no route matches '{path}'")]
    NoMatch { path: String },
    /// Redirect rules kept pointing at each other
    #[error("too many redirects starting from '{path}' ({hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}

/// Typed parameter extraction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Required capture not present in the match
    #[error("missing route parameter '{name}'")]
    Missing { name: &'static str },
    /// Capture present but rejected by the typed contract
    #[error("invalid route parameter '{name}' = '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}
