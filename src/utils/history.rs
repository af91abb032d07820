//! Hash-based history.
//!
//! The application route lives in the URL fragment: `{base}#{path}`,
//! e.g. `/webui/#/profile/42`. The server only ever sees `base`; navigation
//! inside the app only ever touches the fragment.

use crate::config::BASE_PATH;
use crate::utils::dom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashHistory {
    base: String,
}

impl HashHistory {
    /// Create a history rooted at `base`.
    ///
    /// The base is normalized to start and end with '/', and any fragment
    /// already present on it is dropped.
    pub fn new(base: &str) -> Self {
        let base = base.split('#').next().unwrap_or_default().trim();
        let mut normalized = String::with_capacity(base.len() + 2);
        if !base.starts_with('/') {
            normalized.push('/');
        }
        normalized.push_str(base);
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        Self { base: normalized }
    }

    /// History rooted at the base path supplied by the build environment.
    pub fn from_env() -> Self {
        Self::new(BASE_PATH)
    }

    /// In-page link for a route path (`/login` -> `#/login`).
    ///
    /// Only the fragment changes, so following it never reloads the page.
    pub fn href(path: &str) -> String {
        format!("#{}", Self::path_from_hash(path))
    }

    /// Absolute-path URL for a route, rooted at the base path.
    ///
    /// For links handed outside the running app, e.g. a shared permalink.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, Self::href(path))
    }

    /// Route path carried by a location hash (`#/login` -> `/login`).
    pub fn path_from_hash(hash: &str) -> String {
        let path = hash.trim_start_matches('#');
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }

    /// Route path of the current browser location.
    pub fn current(&self) -> String {
        Self::path_from_hash(&dom::get_hash())
    }

    /// Navigate to `path`, creating a history entry.
    pub fn push(&self, path: &str) {
        dom::set_hash(&Self::href(path));
    }

    /// Rewrite the current entry to `path` without creating a new one.
    ///
    /// Only the fragment is replaced; the document path stays as served.
    pub fn replace(&self, path: &str) {
        dom::replace_url(&Self::href(path));
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pathname() -> String {
        dom::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_push_and_replace_update_location() {
        // base deliberately differs from the runner's path
        let history = HashHistory::new("/elsewhere/");
        let served_from = pathname();

        history.push("/home");
        assert_eq!(history.current(), "/home");

        history.replace("/profile/abc123");
        assert_eq!(history.current(), "/profile/abc123");
        assert_eq!(pathname(), served_from);
    }
}
