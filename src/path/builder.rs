//! Path expression builder
//!
//! Writes a path expression tree into path graph triples, using fresh blank
//! nodes for every composite node and RDF lists for sequences and
//! alternatives.

use std::fmt;

use crate::core::{vocabulary, PathDeclaration, PathKeyword};
use crate::term::{RdfList, Term, Triple};

/// A SHACL property path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr {
    /// A single predicate, followed forward
    Predicate(Term),
    /// `sh:inversePath`
    Inverse(Box<PathExpr>),
    /// An RDF list of steps, each applied to the output of the previous one
    Sequence(Vec<PathExpr>),
    /// `sh:alternativePath`
    Alternative(Vec<PathExpr>),
    /// `sh:zeroOrMorePath`
    ZeroOrMore(Box<PathExpr>),
    /// `sh:oneOrMorePath`
    OneOrMore(Box<PathExpr>),
    /// `sh:zeroOrOnePath`
    ZeroOrOne(Box<PathExpr>),
}

impl PathExpr {
    pub fn predicate(iri: impl Into<String>) -> Self {
        PathExpr::Predicate(Term::iri(iri))
    }

    pub fn inverse(inner: PathExpr) -> Self {
        PathExpr::Inverse(Box::new(inner))
    }

    pub fn sequence(steps: impl IntoIterator<Item = PathExpr>) -> Self {
        PathExpr::Sequence(steps.into_iter().collect())
    }

    pub fn alternative(choices: impl IntoIterator<Item = PathExpr>) -> Self {
        PathExpr::Alternative(choices.into_iter().collect())
    }

    /// Encode into path graph triples.
    ///
    /// Returns the node that stands for the expression and the triples that
    /// describe it. A bare predicate is its own node and needs no triples.
    pub fn encode(&self) -> (Term, Vec<Triple>) {
        let mut triples = Vec::new();
        let root = self.encode_into(&mut triples);
        (root, triples)
    }

    /// Encode and attach to `subject` with the given declaration predicate
    pub fn declare(&self, subject: Term, declaration: PathDeclaration) -> Vec<Triple> {
        let mut triples = Vec::new();
        let root = self.encode_into(&mut triples);
        triples.insert(0, Triple::new(subject, declaration.predicate().clone(), root));
        triples
    }

    fn encode_into(&self, triples: &mut Vec<Triple>) -> Term {
        match self {
            PathExpr::Predicate(term) => term.clone(),
            PathExpr::Inverse(inner) => Self::keyed(PathKeyword::InversePath, inner, triples),
            PathExpr::ZeroOrMore(inner) => Self::keyed(PathKeyword::ZeroOrMorePath, inner, triples),
            PathExpr::OneOrMore(inner) => Self::keyed(PathKeyword::OneOrMorePath, inner, triples),
            PathExpr::ZeroOrOne(inner) => Self::keyed(PathKeyword::ZeroOrOnePath, inner, triples),
            PathExpr::Sequence(steps) => Self::list(steps, triples),
            PathExpr::Alternative(choices) => {
                let node = Term::fresh_blank();
                let head = Self::list(choices, triples);
                let keyword = vocabulary().keyword(PathKeyword::AlternativePath).clone();
                triples.push(Triple::new(node.clone(), keyword, head));
                node
            }
        }
    }

    /// A blank node with one keyword edge to the encoded inner expression
    fn keyed(keyword: PathKeyword, inner: &PathExpr, triples: &mut Vec<Triple>) -> Term {
        let node = Term::fresh_blank();
        let target = inner.encode_into(triples);
        triples.push(Triple::new(node.clone(), vocabulary().keyword(keyword).clone(), target));
        node
    }

    fn list(items: &[PathExpr], triples: &mut Vec<Triple>) -> Term {
        let mut nested = Vec::new();
        let elements: Vec<Term> = items.iter().map(|item| item.encode_into(&mut nested)).collect();
        let (head, cells) = RdfList::from_vec(elements).encode();
        triples.extend(cells);
        triples.extend(nested);
        head
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, items: &[PathExpr], sep: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}", sep)?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, ")")
        }

        match self {
            PathExpr::Predicate(term) => write!(f, "{}", term),
            PathExpr::Inverse(inner) => write!(f, "^{}", inner),
            PathExpr::Sequence(steps) => join(f, steps, " / "),
            PathExpr::Alternative(choices) => join(f, choices, " | "),
            PathExpr::ZeroOrMore(inner) => write!(f, "{}*", inner),
            PathExpr::OneOrMore(inner) => write!(f, "{}+", inner),
            PathExpr::ZeroOrOne(inner) => write!(f, "{}?", inner),
        }
    }
}
