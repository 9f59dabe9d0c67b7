//! In-memory triple store
//!
//! A store holds a set of triples and answers pattern lookups through
//! subject, predicate and object indexes. Triples keep their insertion order,
//! and lookups return matches in that order.

use fnv::FnvHashSet;
use indexmap::IndexMap;

use crate::core::TripleIndex;
use crate::term::{Term, Triple};

/// A store of RDF triples (a graph)
#[derive(Clone, Default)]
pub struct Store {
    /// The triples in this store
    triples: Vec<Triple>,
    /// Membership set for duplicate detection
    members: FnvHashSet<Triple>,
    /// Index by subject
    by_subject: IndexMap<Term, Vec<usize>>,
    /// Index by predicate
    by_predicate: IndexMap<Term, Vec<usize>>,
    /// Index by object
    by_object: IndexMap<Term, Vec<usize>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the store; duplicates are ignored
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.members.contains(&triple) {
            return false;
        }

        let pos = self.triples.len();
        self.by_subject.entry(triple.subject.clone()).or_default().push(pos);
        self.by_predicate.entry(triple.predicate.clone()).or_default().push(pos);
        self.by_object.entry(triple.object.clone()).or_default().push(pos);
        self.members.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Add multiple triples
    pub fn add_all(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for triple in triples {
            self.add(triple);
        }
    }

    /// Check if the store contains a triple
    pub fn contains(&self, triple: &Triple) -> bool {
        self.members.contains(triple)
    }

    /// Get all triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Iterate over all triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Smallest candidate position list for a pattern.
    ///
    /// `None` means no position is bound and every triple is a candidate; an
    /// empty slice means some bound term never occurs in its position.
    fn candidates(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Option<&[usize]> {
        let lookups = [
            (&self.by_subject, subject),
            (&self.by_predicate, predicate),
            (&self.by_object, object),
        ];

        lookups
            .into_iter()
            .filter_map(|(index, term)| {
                term.map(|term| index.get(term).map(Vec::as_slice).unwrap_or(&[]))
            })
            .min_by_key(|positions| positions.len())
    }
}

impl TripleIndex for Store {
    fn match_triples<'a>(
        &'a self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        let Some(positions) = self.candidates(subject, predicate, object) else {
            return Box::new(self.triples.iter());
        };

        let (s, p, o) = (subject.cloned(), predicate.cloned(), object.cloned());
        Box::new(
            positions
                .iter()
                .map(move |&pos| &self.triples[pos])
                .filter(move |t| t.matches(s.as_ref(), p.as_ref(), o.as_ref())),
        )
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

impl FromIterator<Triple> for Store {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Store::new();
        store.add_all(iter);
        store
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store {{")?;
        for triple in &self.triples {
            writeln!(f, "  {:?}", triple)?;
        }
        write!(f, "}}")
    }
}
