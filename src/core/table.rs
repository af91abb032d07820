//! Ordered route table.
//!
//! Entries are tested in declaration order and the first structural match
//! wins. The table is validated once at construction and never mutated
//! afterwards, so a clone can be handed to anything that resolves paths.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::MAX_REDIRECTS;
use crate::core::error::{ResolveError, RouteTableError};
use crate::core::params::Params;
use crate::core::pattern::{PathPattern, normalize};

// ============================================================================
// Requests and Redirects
// ============================================================================

/// A normalized navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    /// Normalized path (always starts with '/').
    pub path: String,
    /// Raw query string without the leading '?'.
    pub query: Option<String>,
}

impl RouteRequest {
    pub fn new(raw: &str) -> Self {
        let (path, query) = normalize(raw);
        Self { path, query }
    }
}

/// Computes the replacement path when a redirect entry matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectRule {
    to: String,
}

impl RedirectRule {
    pub fn to(path: impl Into<String>) -> Self {
        Self { to: path.into() }
    }

    /// Replacement path for `request`.
    ///
    /// The request's query is carried over unless the target declares its own.
    pub fn apply(&self, request: &RouteRequest) -> String {
        match &request.query {
            Some(query) if !self.to.contains('?') => format!("{}?{}", self.to, query),
            _ => self.to.clone(),
        }
    }
}

impl From<&str> for RedirectRule {
    fn from(path: &str) -> Self {
        Self::to(path)
    }
}

// ============================================================================
// Entries
// ============================================================================

#[derive(Clone, Debug)]
enum RouteTarget<T> {
    Page(T),
    Redirect(RedirectRule),
}

/// One navigable path: a template bound to a page or a redirect.
#[derive(Clone, Debug)]
pub struct RouteEntry<T> {
    pattern: PathPattern,
    target: RouteTarget<T>,
}

impl<T> RouteEntry<T> {
    pub fn page(template: &str, target: T) -> Result<Self, RouteTableError> {
        Ok(Self {
            pattern: PathPattern::parse(template)?,
            target: RouteTarget::Page(target),
        })
    }

    pub fn redirect(template: &str, rule: impl Into<RedirectRule>) -> Result<Self, RouteTableError> {
        Ok(Self {
            pattern: PathPattern::parse(template)?,
            target: RouteTarget::Redirect(rule.into()),
        })
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}

// ============================================================================
// Resolution Results
// ============================================================================

/// Outcome of a single resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Match<T> {
    Page {
        target: T,
        params: Params,
        request: RouteRequest,
    },
    Redirect {
        from: RouteRequest,
        to: String,
    },
}

/// Final page reached after following redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<T> {
    pub target: T,
    pub params: Params,
    pub request: RouteRequest,
    /// Paths that were redirected away from, in order.
    pub redirects: Vec<String>,
}

impl<T> Resolved<T> {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

// ============================================================================
// RouteTable
// ============================================================================

#[derive(Clone, Debug)]
pub struct RouteTable<T> {
    entries: Vec<RouteEntry<T>>,
}

impl<T: Clone> RouteTable<T> {
    /// Build a table, enforcing its invariants:
    /// - no two page entries share a shape
    /// - exactly one non-fallback entry matches `/`, and it redirects
    /// - a catch-all entry can only be last
    pub fn new(entries: Vec<RouteEntry<T>>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.pattern.is_catch_all() && i + 1 != entries.len() {
                return Err(RouteTableError::CatchAllNotLast {
                    pattern: entry.pattern.to_string(),
                });
            }

            if !entry.is_redirect()
                && entries[..i]
                    .iter()
                    .any(|earlier| !earlier.is_redirect() && earlier.pattern.same_shape(&entry.pattern))
            {
                return Err(RouteTableError::DuplicatePattern {
                    pattern: entry.pattern.to_string(),
                });
            }
        }

        let mut root_entries = entries
            .iter()
            .filter(|e| !e.pattern.is_catch_all() && e.pattern.matches("/").is_some());
        match (root_entries.next(), root_entries.next()) {
            (None, _) => return Err(RouteTableError::MissingRoot),
            (Some(root), None) if root.is_redirect() => {}
            (Some(root), None) | (Some(_), Some(root)) => {
                return Err(RouteTableError::InvalidRoot {
                    pattern: root.pattern.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Load a table from its TOML definition.
    ///
    /// ```toml
    /// [[route]]
    /// path = "/login"
    /// page = "login"
    ///
    /// [[route]]
    /// path = "/"
    /// redirect = "/login"
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, RouteTableError>
    where
        T: DeserializeOwned,
    {
        let definition: RouteDefinition<T> = toml::from_str(source)?;
        let entries = definition
            .routes
            .into_iter()
            .map(RouteSpec::into_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Resolve one step: the first matching entry decides.
    pub fn resolve(&self, path: &str) -> Option<Match<T>> {
        let request = RouteRequest::new(path);

        self.entries.iter().find_map(|entry| {
            let params = entry.pattern.matches(&request.path)?;
            Some(match &entry.target {
                RouteTarget::Page(target) => Match::Page {
                    target: target.clone(),
                    params,
                    request: request.clone(),
                },
                RouteTarget::Redirect(rule) => Match::Redirect {
                    to: rule.apply(&request),
                    from: request.clone(),
                },
            })
        })
    }

    /// Resolve `path`, re-resolving redirect targets until a page is reached.
    pub fn navigate(&self, path: &str) -> Result<Resolved<T>, ResolveError> {
        let mut current = path.to_string();
        let mut redirects = Vec::new();

        loop {
            match self.resolve(&current) {
                Some(Match::Page {
                    target,
                    params,
                    request,
                }) => {
                    return Ok(Resolved {
                        target,
                        params,
                        request,
                        redirects,
                    });
                }
                Some(Match::Redirect { from, to }) => {
                    if redirects.len() >= MAX_REDIRECTS {
                        return Err(ResolveError::RedirectLoop {
                            path: RouteRequest::new(path).path,
                            hops: redirects.len(),
                        });
                    }
                    redirects.push(from.path);
                    current = to;
                }
                None => {
                    return Err(ResolveError::NoMatch {
                        path: RouteRequest::new(&current).path,
                    });
                }
            }
        }
    }
}

// ============================================================================
// Static Definition
// ============================================================================

#[derive(Deserialize)]
struct RouteDefinition<T> {
    #[serde(rename = "route", default = "Vec::new")]
    routes: Vec<RouteSpec<T>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteSpec<T> {
    path: String,
    page: Option<T>,
    redirect: Option<String>,
}

impl<T> RouteSpec<T> {
    fn into_entry(self) -> Result<RouteEntry<T>, RouteTableError> {
        match (self.page, self.redirect) {
            (Some(page), None) => RouteEntry::page(&self.path, page),
            (None, Some(to)) => RouteEntry::redirect(&self.path, RedirectRule::to(to)),
            _ => Err(RouteTableError::AmbiguousTarget { pattern: self.path }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: Vec<RouteEntry<&'static str>>) -> RouteTable<&'static str> {
        RouteTable::new(entries).unwrap()
    }

    fn sample() -> RouteTable<&'static str> {
        table(vec![
            RouteEntry::page("/login", "login").unwrap(),
            RouteEntry::page("/home", "home").unwrap(),
            RouteEntry::page("/profile/:user_id", "profile").unwrap(),
            RouteEntry::redirect("/", "/login").unwrap(),
        ])
    }

    fn page_of(m: Option<Match<&'static str>>) -> (&'static str, Params) {
        match m {
            Some(Match::Page { target, params, .. }) => (target, params),
            other => panic!("expected a page match, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_paths_resolve_without_redirect() {
        let t = sample();
        for (path, page) in [("/login", "login"), ("/home", "home")] {
            let (target, params) = page_of(t.resolve(path));
            assert_eq!(target, page);
            assert_eq!(params, Params::new());
        }
    }

    #[test]
    fn test_root_redirects_to_login() {
        let t = sample();
        for path in ["/", ""] {
            match t.resolve(path) {
                Some(Match::Redirect { to, from }) => {
                    assert_eq!(to, "/login");
                    assert_eq!(from.path, "/");
                }
                other => panic!("expected redirect for {:?}, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_profile_capture() {
        let (target, params) = page_of(sample().resolve("/profile/abc123"));
        assert_eq!(target, "profile");
        assert_eq!(params.get("user_id"), Some("abc123"));
    }

    #[test]
    fn test_query_is_split_from_path() {
        match sample().resolve("/profile/7?tab=posts") {
            Some(Match::Page { request, params, .. }) => {
                assert_eq!(request.path, "/profile/7");
                assert_eq!(request.query.as_deref(), Some("tab=posts"));
                assert_eq!(params.get("user_id"), Some("7"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_earlier_entry_wins() {
        let t = table(vec![
            RouteEntry::page("/profile/me", "own-profile").unwrap(),
            RouteEntry::page("/profile/:user_id", "profile").unwrap(),
            RouteEntry::redirect("/", "/profile/me").unwrap(),
        ]);
        assert_eq!(page_of(t.resolve("/profile/me")).0, "own-profile");
        assert_eq!(page_of(t.resolve("/profile/someone")).0, "profile");

        let t = table(vec![
            RouteEntry::page("/profile/:user_id", "profile").unwrap(),
            RouteEntry::page("/profile/me", "own-profile").unwrap(),
            RouteEntry::redirect("/", "/login").unwrap(),
        ]);
        assert_eq!(page_of(t.resolve("/profile/me")).0, "profile");
    }

    #[test]
    fn test_unmatched_without_fallback() {
        let t = sample();
        assert!(t.resolve("/nonexistent").is_none());
        assert_eq!(
            t.navigate("/nonexistent/"),
            Err(ResolveError::NoMatch {
                path: "/nonexistent".to_string()
            })
        );
    }

    #[test]
    fn test_catch_all_fallback() {
        let t = table(vec![
            RouteEntry::page("/login", "login").unwrap(),
            RouteEntry::redirect("/", "/login").unwrap(),
            RouteEntry::page("/*path", "not-found").unwrap(),
        ]);
        let (target, params) = page_of(t.resolve("/nonexistent/deep"));
        assert_eq!(target, "not-found");
        assert_eq!(params.get("path"), Some("nonexistent/deep"));
        // the root redirect is declared first
        assert!(matches!(t.resolve("/"), Some(Match::Redirect { .. })));
    }

    #[test]
    fn test_navigate_follows_redirects() {
        let resolved = sample().navigate("/").unwrap();
        assert_eq!(resolved.target, "login");
        assert_eq!(resolved.request.path, "/login");
        assert_eq!(resolved.redirects, ["/"]);
        assert!(resolved.was_redirected());

        let resolved = sample().navigate("/home").unwrap();
        assert!(!resolved.was_redirected());
    }

    #[test]
    fn test_redirect_keeps_query() {
        match sample().resolve("/?next=home") {
            Some(Match::Redirect { to, from }) => {
                assert_eq!(to, "/login?next=home");
                assert_eq!(from.query.as_deref(), Some("next=home"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let resolved = sample().navigate("/?next=home").unwrap();
        assert_eq!(resolved.target, "login");
        assert_eq!(resolved.request.path, "/login");
        assert_eq!(resolved.request.query.as_deref(), Some("next=home"));
    }

    #[test]
    fn test_redirect_with_own_query_wins() {
        let rule = RedirectRule::to("/login?from=root");
        assert_eq!(rule.apply(&RouteRequest::new("/?next=home")), "/login?from=root");
        assert_eq!(RedirectRule::to("/login").apply(&RouteRequest::new("/")), "/login");
    }

    #[test]
    fn test_redirect_loop_is_reported() {
        let t = table(vec![
            RouteEntry::redirect("/", "/a").unwrap(),
            RouteEntry::redirect("/a", "/b").unwrap(),
            RouteEntry::redirect("/b", "/a").unwrap(),
        ]);
        assert_eq!(
            t.navigate("/"),
            Err(ResolveError::RedirectLoop {
                path: "/".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_page_patterns() {
        let result = RouteTable::new(vec![
            RouteEntry::page("/profile/:user_id", "profile").unwrap(),
            RouteEntry::page("/profile/:id", "other").unwrap(),
            RouteEntry::redirect("/", "/login").unwrap(),
        ]);
        assert!(matches!(
            result,
            Err(RouteTableError::DuplicatePattern { pattern }) if pattern == "/profile/:id"
        ));
    }

    #[test]
    fn test_root_invariants() {
        let missing = RouteTable::new(vec![RouteEntry::page("/login", "login").unwrap()]);
        assert!(matches!(missing, Err(RouteTableError::MissingRoot)));

        let page_root = RouteTable::new(vec![RouteEntry::page("/", "home").unwrap()]);
        assert!(matches!(page_root, Err(RouteTableError::InvalidRoot { .. })));

        let two_roots = RouteTable::<&str>::new(vec![
            RouteEntry::redirect("/", "/login").unwrap(),
            RouteEntry::redirect("/", "/home").unwrap(),
        ]);
        assert!(matches!(two_roots, Err(RouteTableError::InvalidRoot { .. })));
    }

    #[test]
    fn test_catch_all_must_be_last() {
        let result = RouteTable::new(vec![
            RouteEntry::redirect("/", "/login").unwrap(),
            RouteEntry::page("/*path", "not-found").unwrap(),
            RouteEntry::page("/login", "login").unwrap(),
        ]);
        assert!(matches!(result, Err(RouteTableError::CatchAllNotLast { .. })));
    }

    #[test]
    fn test_from_toml() {
        let t: RouteTable<String> = RouteTable::from_toml(
            r#"
            [[route]]
            path = "/login"
            page = "login"

            [[route]]
            path = "/"
            redirect = "/login"
            "#,
        )
        .unwrap();
        assert_eq!(t.navigate("/").unwrap().target, "login");
    }

    #[test]
    fn test_from_toml_rejects_ambiguous_entries() {
        let result: Result<RouteTable<String>, _> = RouteTable::from_toml(
            r#"
            [[route]]
            path = "/"
            page = "home"
            redirect = "/login"
            "#,
        );
        assert!(matches!(result, Err(RouteTableError::AmbiguousTarget { .. })));

        let result: Result<RouteTable<String>, _> = RouteTable::from_toml("[[route]]\npath = 1\n");
        assert!(matches!(result, Err(RouteTableError::Definition(_))));
    }
}
