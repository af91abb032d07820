//! Page identities the route table can resolve to.

use serde::Deserialize;

/// Renderable page identity.
///
/// The route table treats this as an opaque target; the router component
/// decides how each page is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Home,
    Profile,
    NotFound,
}

impl Page {
    /// Human-readable title, used for `document.title`.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::NotFound => "Not Found",
        }
    }
}
