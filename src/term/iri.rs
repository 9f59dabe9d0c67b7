//! IRI representation

use std::fmt;

/// An IRI reference
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Create a new IRI
    pub fn new(value: String) -> Self {
        Iri { value }
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the namespace (everything up to and including the last # or /)
    pub fn namespace(&self) -> &str {
        match self.value.rfind(['#', '/']) {
            Some(pos) => &self.value[..=pos],
            None => &self.value,
        }
    }

    /// Get the local name (fragment or last path segment)
    pub fn local_name(&self) -> &str {
        match self.value.rfind(['#', '/']) {
            Some(pos) => &self.value[pos + 1..],
            None => &self.value,
        }
    }

    /// Check whether a raw string can stand as an IRI reference.
    ///
    /// Only the characters RDF serializations forbid inside `<...>` are rejected;
    /// no scheme or authority check is made.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && !value
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s.to_string())
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri::new(s)
    }
}
