//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The route definition is loaded at compile time using `include_str!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the document title suffix.
pub const APP_NAME: &str = "WASAPhoto";

// =============================================================================
// Routing Configuration
// =============================================================================

/// Static route table definition.
pub const ROUTES_TOML: &str = include_str!("../assets/routes.toml");

/// Base path the app is served from, supplied by the build environment
/// through `BASE_URL`. Defaults to `/`.
pub const BASE_PATH: &str = match option_env!("BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Maximum redirect hops followed for one navigation.
pub const MAX_REDIRECTS: usize = 8;
