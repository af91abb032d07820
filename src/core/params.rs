//! Captured route parameters.
//!
//! [`Params`] is the opaque bag the route table fills from named capture
//! segments. Values are stored verbatim; interpreting them is the job of a
//! [`FromParams`] implementation owned by the page that consumes them.

use crate::core::error::ParamError;

/// Ordered name/value pairs captured while matching a path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), but a missing capture is an error.
    pub fn require(&self, name: &'static str) -> Result<&str, ParamError> {
        self.get(name).ok_or(ParamError::Missing { name })
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Typed parameter contract for a single route.
///
/// Implementors validate and parse the raw captures at resolution time so
/// pages receive well-formed values instead of strings.
pub trait FromParams: Sized {
    fn from_params(params: &Params) -> Result<Self, ParamError>;
}
