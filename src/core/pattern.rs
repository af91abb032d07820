//! Path templates and structural matching.
//!
//! Template syntax:
//! - `/login` - static segments, compared ASCII-case-insensitively
//! - `/profile/:user_id` - named capture, binds exactly one non-empty segment
//! - `/*path` - catch-all, final segment only, binds the rest of the path

use crate::core::error::PatternError;
use crate::core::params::Params;

// ============================================================================
// Path Normalization
// ============================================================================

/// Split a requested path into its normalized form and optional query.
///
/// - empty input becomes `/`
/// - a missing leading `/` is added
/// - a single trailing `/` is dropped (except for the root)
/// - everything after the first `?` is returned as the query
pub fn normalize(raw: &str) -> (String, Option<String>) {
    let (path, query) = match raw.split_once('?') {
        Some((path, query)) => (path, Some(query).filter(|q| !q.is_empty())),
        None => (raw, None),
    };
    let path = path.trim();

    let mut out = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }

    (out, query.map(str::to_string))
}

/// Segments of an already-normalized path. The root has none.
fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

// ============================================================================
// PathPattern
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Capture(String),
    CatchAll(String),
}

/// A parsed path template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        if !template.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(template.to_string()));
        }

        let (normalized, _) = normalize(template);
        let raw = segments(&normalized);
        let mut parsed: Vec<Segment> = Vec::with_capacity(raw.len());

        for (i, part) in raw.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                Segment::Capture(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if i + 1 != raw.len() {
                    return Err(PatternError::CatchAllNotLast {
                        pattern: template.to_string(),
                    });
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };

            if let Segment::Capture(name) | Segment::CatchAll(name) = &segment {
                if name.is_empty() {
                    return Err(PatternError::EmptyCaptureName {
                        pattern: template.to_string(),
                    });
                }
                if parsed.iter().any(|s| s.capture_name() == Some(name.as_str())) {
                    return Err(PatternError::DuplicateCapture {
                        pattern: template.to_string(),
                        name: name.clone(),
                    });
                }
            }

            parsed.push(segment);
        }

        Ok(Self {
            source: normalized,
            segments: parsed,
        })
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Whether two templates match exactly the same set of paths.
    ///
    /// Capture names are irrelevant: `/a/:x` and `/a/:y` have the same shape.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Capture(_), Segment::Capture(_)) => true,
                    (Segment::CatchAll(_), Segment::CatchAll(_)) => true,
                    _ => false,
                })
    }

    /// Match a normalized path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts = segments(path);
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(literal) => {
                    if !parts.get(i)?.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Segment::Capture(name) => {
                    let value = parts.get(i)?;
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), *value);
                }
                Segment::CatchAll(name) => {
                    let rest = parts.get(i..).unwrap_or_default().join("/");
                    params.insert(name.as_str(), rest);
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

impl Segment {
    fn capture_name(&self) -> Option<&str> {
        match self {
            Self::Capture(name) | Self::CatchAll(name) => Some(name),
            Self::Static(_) => None,
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
