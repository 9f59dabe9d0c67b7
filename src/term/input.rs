//! Entry term coercion
//!
//! Callers name the start node and the path entry either as a raw IRI string or
//! as an already constructed term. Both shapes are resolved once, here, into a
//! node term; nothing downstream sees the raw input.

use crate::error::{PathError, PathResult};
use super::{Iri, Term};

/// A start node or path entry as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeInput {
    /// A raw string, read as an IRI
    Raw(String),
    /// A term; only IRIs and blank nodes are accepted
    Term(Term),
}

impl NodeInput {
    /// Resolve into a node term.
    ///
    /// `role` names the argument in the error message (`object entry`,
    /// `path entry`).
    pub fn into_node(self, role: &'static str) -> PathResult<Term> {
        match self {
            NodeInput::Raw(raw) => {
                if raw.is_empty() {
                    return Err(PathError::invalid_input(role, "empty string"));
                }
                if !Iri::is_valid(&raw) {
                    return Err(PathError::invalid_input(role, format!("'{}' is not a valid IRI", raw)));
                }
                Ok(Term::iri(raw))
            }
            NodeInput::Term(term) => match term {
                Term::Iri(ref iri) if !Iri::is_valid(iri.as_str()) => Err(PathError::invalid_input(
                    role,
                    format!("{} is not a valid IRI", term),
                )),
                Term::BlankNode(ref blank) if blank.label().is_empty() => {
                    Err(PathError::invalid_input(role, "blank node without a label"))
                }
                Term::Iri(_) | Term::BlankNode(_) => Ok(term),
                Term::Literal(_) => Err(PathError::invalid_input(
                    role,
                    format!("{} terms cannot be entry points", term.kind_name()),
                )),
            },
        }
    }
}

impl From<&str> for NodeInput {
    fn from(s: &str) -> Self {
        NodeInput::Raw(s.to_string())
    }
}

impl From<String> for NodeInput {
    fn from(s: String) -> Self {
        NodeInput::Raw(s)
    }
}

impl From<Term> for NodeInput {
    fn from(term: Term) -> Self {
        NodeInput::Term(term)
    }
}

impl From<&Term> for NodeInput {
    fn from(term: &Term) -> Self {
        NodeInput::Term(term.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_raw_string_becomes_iri() {
        let node = NodeInput::from("http://ex.org/5").into_node("object entry").unwrap();
        assert_eq!(node, Term::iri("http://ex.org/5"));
    }

    #[test]
    fn test_iri_and_blank_terms_pass_through() {
        let iri = Term::iri("http://ex.org/5");
        assert_eq!(NodeInput::from(&iri).into_node("object entry").unwrap(), iri);

        let blank = Term::blank("relation");
        assert_eq!(NodeInput::from(blank.clone()).into_node("path entry").unwrap(), blank);
    }

    #[test]
    fn test_literal_rejected() {
        let err = NodeInput::from(Term::literal("5")).into_node("object entry").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(err.to_string().contains("object entry"));
        assert!(err.to_string().contains("literal"));
    }

    #[test]
    fn test_malformed_strings_rejected() {
        assert!(NodeInput::from("").into_node("object entry").is_err());
        assert!(NodeInput::from("http://ex.org/a b").into_node("object entry").is_err());
        assert!(NodeInput::from(Term::iri("")).into_node("path entry").is_err());
        assert!(NodeInput::from(Term::blank("")).into_node("path entry").is_err());
    }
}
