//! RDF list (collection) encoding and decoding
//!
//! A list is a chain of cells: each cell has one `rdf:first` edge to its element
//! and one `rdf:rest` edge to the next cell, with `rdf:nil` closing the chain.

use std::fmt;

use crate::core::traits::TripleIndex;
use crate::core::namespaces::vocabulary;
use super::{Term, Triple};

/// An RDF list held as a vector of elements
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RdfList {
    items: Vec<Term>,
}

impl RdfList {
    /// Create a list from a vector of terms
    pub fn from_vec(items: Vec<Term>) -> Self {
        RdfList { items }
    }

    /// Get the length of the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over list elements
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.items.iter()
    }

    /// Encode the list as triples with fresh blank node cells.
    ///
    /// Returns the head (the first cell, or `rdf:nil` for the empty list) and
    /// the `rdf:first` / `rdf:rest` triples.
    pub fn encode(&self) -> (Term, Vec<Triple>) {
        let vocab = vocabulary();
        let mut triples = Vec::with_capacity(self.items.len() * 2);
        let mut head = vocab.rdf_nil.clone();

        for item in self.items.iter().rev() {
            let cell = Term::fresh_blank();
            // Pushed rest-first so the final reverse yields first, rest per cell
            triples.push(Triple::new(cell.clone(), vocab.rdf_rest.clone(), head));
            triples.push(Triple::new(cell.clone(), vocab.rdf_first.clone(), item.clone()));
            head = cell;
        }

        triples.reverse();
        (head, triples)
    }

    /// Read the list starting at `head` from an index.
    ///
    /// Follows the first `rdf:rest` edge of each cell and stops at `rdf:nil`, at
    /// a cell without `rdf:first`, or when a cell repeats.
    pub fn decode(index: &dyn TripleIndex, head: &Term) -> Self {
        let vocab = vocabulary();
        let mut items = Vec::new();
        let mut seen = Vec::new();
        let mut cell = head.clone();

        while cell != vocab.rdf_nil && !seen.contains(&cell) {
            let Some(first) = index.first_object(&cell, &vocab.rdf_first) else {
                break;
            };
            items.push(first);
            let next = index.first_object(&cell, &vocab.rdf_rest);
            seen.push(cell);
            match next {
                Some(next) => cell = next,
                None => break,
            }
        }

        RdfList { items }
    }
}

impl From<Vec<Term>> for RdfList {
    fn from(items: Vec<Term>) -> Self {
        RdfList::from_vec(items)
    }
}

impl fmt::Debug for RdfList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for RdfList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}
