//! Core trait abstractions
//!
//! The evaluator reads both the data graph and the path graph through
//! [`TripleIndex`], so any backend that answers triple patterns can stand in
//! for the in-memory [`crate::store::Store`].

use crate::term::{Term, Triple};

// ============================================================================
// Triple Pattern Lookup
// ============================================================================

/// Read-only pattern lookup over a set of triples
///
/// Every position of a pattern is optional; `None` matches any term. Matches
/// come back in a stable order so that evaluation results are reproducible.
pub trait TripleIndex: Send + Sync {
    /// Triples matching `(subject?, predicate?, object?)`
    fn match_triples<'a>(
        &'a self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a>;

    /// Get the number of triples
    fn len(&self) -> usize;

    /// Check if the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Objects of `(subject, predicate, ?)`
    fn objects(&self, subject: &Term, predicate: &Term) -> Vec<Term> {
        self.match_triples(Some(subject), Some(predicate), None)
            .map(|t| t.object.clone())
            .collect()
    }

    /// Subjects of `(?, predicate, object)`
    fn subjects(&self, predicate: &Term, object: &Term) -> Vec<Term> {
        self.match_triples(None, Some(predicate), Some(object))
            .map(|t| t.subject.clone())
            .collect()
    }

    /// First object of `(subject, predicate, ?)`, if any
    fn first_object(&self, subject: &Term, predicate: &Term) -> Option<Term> {
        self.match_triples(Some(subject), Some(predicate), None)
            .next()
            .map(|t| t.object.clone())
    }
}
