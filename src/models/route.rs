//! Typed application routes for hash-based navigation.
//!
//! The route table hands back opaque captures; [`AppRoute`] turns a
//! resolution into a typed value with validated parameters per page.

use percent_encoding::percent_decode_str;

use crate::core::error::ParamError;
use crate::core::{FromParams, Params, Resolved};
use crate::models::Page;

// ============================================================================
// Parameter Contracts
// ============================================================================

/// User identifier captured from `/profile/:user_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    const MAX_LEN: usize = 64;

    pub fn parse(value: &str) -> Result<Self, ParamError> {
        let invalid = |reason: &'static str| ParamError::Invalid {
            name: "user_id",
            value: value.to_string(),
            reason,
        };

        if value.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(invalid("longer than 64 characters"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(invalid("only letters, digits, '_' and '-' are allowed"));
        }

        Ok(Self(value.to_string()))
    }

}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of the profile page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileParams {
    pub user_id: UserId,
}

impl FromParams for ProfileParams {
    fn from_params(params: &Params) -> Result<Self, ParamError> {
        let raw = params.require("user_id")?;
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| ParamError::Invalid {
                name: "user_id",
                value: raw.to_string(),
                reason: "not valid UTF-8 after percent-decoding",
            })?;
        Ok(Self {
            user_id: UserId::parse(&decoded)?,
        })
    }
}

// ============================================================================
// AppRoute
// ============================================================================

/// Application routes.
///
/// URL format: `#/login`, `#/home`, `#/profile/{user_id}`.
/// Anything else lands on [`AppRoute::NotFound`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Home,
    Profile(ProfileParams),
    NotFound {
        /// Requested path that failed to resolve
        path: String,
        /// Why, when resolution produced an error rather than the fallback
        reason: Option<String>,
    },
}

impl AppRoute {
    /// Build a typed route from a table resolution.
    pub fn from_resolved(resolved: &Resolved<Page>) -> Result<Self, ParamError> {
        Ok(match resolved.target {
            Page::Login => Self::Login,
            Page::Home => Self::Home,
            Page::Profile => Self::Profile(ProfileParams::from_params(&resolved.params)?),
            Page::NotFound => Self::NotFound {
                path: resolved.request.path.clone(),
                reason: None,
            },
        })
    }

    /// Not-found route carrying an error description.
    pub fn failed(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::NotFound {
            path: path.into(),
            reason: Some(reason.to_string()),
        }
    }

    pub fn profile(user_id: UserId) -> Self {
        Self::Profile(ProfileParams { user_id })
    }

    pub fn page(&self) -> Page {
        match self {
            Self::Login => Page::Login,
            Self::Home => Page::Home,
            Self::Profile(_) => Page::Profile,
            Self::NotFound { .. } => Page::NotFound,
        }
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Home => "/home".to_string(),
            Self::Profile(params) => format!("/profile/{}", params.user_id),
            Self::NotFound { path, .. } => path.clone(),
        }
    }

    /// Convert route to URL hash, usable as an in-page link
    pub fn to_hash(&self) -> String {
        format!("#{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteRequest;

    fn resolved(target: Page, path: &str, params: Params) -> Resolved<Page> {
        Resolved {
            target,
            params,
            request: RouteRequest::new(path),
            redirects: Vec::new(),
        }
    }

    #[test]
    fn test_user_id_validation() {
        assert_eq!(UserId::parse("abc123").unwrap().to_string(), "abc123");
        assert!(UserId::parse("user_1-b").is_ok());
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("has space").is_err());
        assert!(UserId::parse(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_profile_from_resolution() {
        let params: Params = [("user_id", "abc123")].into_iter().collect();
        let route = AppRoute::from_resolved(&resolved(Page::Profile, "/profile/abc123", params))
            .unwrap();
        assert_eq!(route, AppRoute::profile(UserId::parse("abc123").unwrap()));
        assert_eq!(route.page(), Page::Profile);
    }

    #[test]
    fn test_profile_rejects_invalid_capture() {
        let params: Params = [("user_id", "bad%20id")].into_iter().collect();
        let err = AppRoute::from_resolved(&resolved(Page::Profile, "/profile/bad%20id", params))
            .unwrap_err();
        assert!(matches!(err, ParamError::Invalid { name: "user_id", .. }));

        let params: Params = [("user_id", "%FF")].into_iter().collect();
        let err = AppRoute::from_resolved(&resolved(Page::Profile, "/profile/%FF", params))
            .unwrap_err();
        assert!(matches!(err, ParamError::Invalid { name: "user_id", .. }));

        let err = AppRoute::from_resolved(&resolved(Page::Profile, "/profile", Params::new()))
            .unwrap_err();
        assert_eq!(err, ParamError::Missing { name: "user_id" });
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Login.to_hash(), "#/login");
        assert_eq!(AppRoute::Home.to_hash(), "#/home");
        assert_eq!(
            AppRoute::profile(UserId::parse("42").unwrap()).to_hash(),
            "#/profile/42"
        );
        assert_eq!(
            AppRoute::failed("/missing", "nope").to_hash(),
            "#/missing"
        );
    }

    #[test]
    fn test_profile_id_is_percent_decoded() {
        let params: Params = [("user_id", "abc%2D1")].into_iter().collect();
        let route = AppRoute::from_resolved(&resolved(Page::Profile, "/profile/abc%2D1", params))
            .unwrap();
        assert_eq!(route, AppRoute::profile(UserId::parse("abc-1").unwrap()));
        assert_eq!(route.to_path(), "/profile/abc-1");
    }
}
