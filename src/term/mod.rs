//! RDF term representations
//!
//! This module defines the data types the path evaluator works on:
//! - IRIs (named nodes)
//! - Blank nodes (anonymous nodes)
//! - Literals (with optional datatype or language tag)
//! - Triples built from them
//!
//! Terms compare and hash by kind and value, so an IRI and a blank node with the
//! same text are distinct terms.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

pub mod iri;
mod literal;
mod blank;
mod input;
pub mod list;

pub use iri::Iri;
pub use literal::{Literal, Datatype};
pub use blank::BlankNode;
pub use input::NodeInput;
pub use list::RdfList;

/// A term in RDF
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI reference (named node)
    Iri(Arc<Iri>),
    /// A blank node (anonymous)
    BlankNode(BlankNode),
    /// A literal value
    Literal(Arc<Literal>),
}

impl Term {
    /// Create an IRI term
    pub fn iri(s: impl Into<String>) -> Self {
        Term::Iri(Arc::new(Iri::new(s.into())))
    }

    /// Create a blank node with a label
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(BlankNode::labeled(label.into()))
    }

    /// Create a fresh blank node
    pub fn fresh_blank() -> Self {
        Term::BlankNode(BlankNode::fresh())
    }

    /// Create a plain literal
    pub fn literal(s: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::plain(s.into())))
    }

    /// Create a typed literal
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::typed(value.into(), datatype.into())))
    }

    /// Create a language-tagged literal
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::with_language(value.into(), lang.into())))
    }

    /// Check if this term is an IRI
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this term is a blank node
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this term is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Get the IRI if this is an IRI term
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(i) => Some(i),
            _ => None,
        }
    }

    /// Get the blank node if this is a blank node term
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Get the literal if this is a literal term
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// The lexical value: IRI string, blank node label or literal value
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(i) => i.as_str(),
            Term::BlankNode(b) => b.label(),
            Term::Literal(l) => l.value(),
        }
    }

    /// Short name of the term kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Iri(_) => "IRI",
            Term::BlankNode(_) => "blank node",
            Term::Literal(_) => "literal",
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(i) => write!(f, "{:?}", i),
            Term::BlankNode(b) => write!(f, "{:?}", b),
            Term::Literal(l) => write!(f, "{:?}", l),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(i) => write!(f, "{}", i),
            Term::BlankNode(b) => write!(f, "{}", b),
            Term::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(Arc::new(iri))
    }
}

impl From<BlankNode> for Term {
    fn from(blank: BlankNode) -> Self {
        Term::BlankNode(blank)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(Arc::new(literal))
    }
}

/// A triple (statement) in RDF
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Triple { subject, predicate, object }
    }

    /// Check whether this triple matches a pattern; `None` positions match anything
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> bool {
        subject.map_or(true, |s| &self.subject == s)
            && predicate.map_or(true, |p| &self.predicate == p)
            && object.map_or(true, |o| &self.object == o)
    }
}

impl fmt::Debug for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?} .", self.subject, self.predicate, self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
