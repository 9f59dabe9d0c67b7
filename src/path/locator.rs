//! Path declaration lookup
//!
//! A path graph declares its expression root with `sh:path`, or with
//! `tree:path` when no `sh:path` edge exists. The declaration may hang off a
//! known entry node (a relation, a property shape) or anywhere in the graph.

use crate::core::{PathDeclaration, TripleIndex};
use crate::error::{PathError, PathResult};
use crate::term::Term;

/// All declared roots for `entry`, from the first vocabulary that has any.
///
/// `entry = None` searches the whole path graph. Roots come back in index
/// order; the result is empty when nothing is declared.
pub fn declared_roots(paths: &dyn TripleIndex, entry: Option<&Term>) -> Vec<Term> {
    for declaration in PathDeclaration::SEARCH_ORDER {
        let roots: Vec<Term> = paths
            .match_triples(entry, Some(declaration.predicate()), None)
            .map(|t| t.object.clone())
            .collect();

        if !roots.is_empty() {
            tracing::trace!(?declaration, count = roots.len(), "Found path declarations");
            return roots;
        }
    }

    Vec::new()
}

/// The path expression root for `entry`.
///
/// Several declarations are not an error: the first one wins.
pub fn locate_path_root(paths: &dyn TripleIndex, entry: Option<&Term>) -> PathResult<Term> {
    declared_roots(paths, entry)
        .into_iter()
        .next()
        .ok_or_else(|| PathError::NoPathFound {
            entry: entry.map(|e| e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespaces::{sh, tree};
    use crate::error::ErrorCode;
    use crate::store::Store;
    use crate::term::Triple;

    fn declare(store: &mut Store, subject: &str, predicate: &str, object: &str) {
        store.add(Triple::new(Term::blank(subject), Term::iri(predicate), Term::iri(object)));
    }

    #[test]
    fn test_shacl_declaration() {
        let mut paths = Store::new();
        declare(&mut paths, "shape", sh::PATH, "http://ex.org/value");

        let root = locate_path_root(&paths, Some(&Term::blank("shape"))).unwrap();
        assert_eq!(root, Term::iri("http://ex.org/value"));
    }

    #[test]
    fn test_tree_fallback() {
        let mut paths = Store::new();
        declare(&mut paths, "relation", tree::PATH, "http://ex.org/value");

        let root = locate_path_root(&paths, None).unwrap();
        assert_eq!(root, Term::iri("http://ex.org/value"));
    }

    #[test]
    fn test_shacl_wins_over_tree() {
        let mut paths = Store::new();
        declare(&mut paths, "relation", tree::PATH, "http://ex.org/tree");
        declare(&mut paths, "relation", sh::PATH, "http://ex.org/shacl");

        let entry = Term::blank("relation");
        assert_eq!(locate_path_root(&paths, Some(&entry)).unwrap(), Term::iri("http://ex.org/shacl"));
        assert_eq!(declared_roots(&paths, Some(&entry)), vec![Term::iri("http://ex.org/shacl")]);
    }

    #[test]
    fn test_entry_restricts_search() {
        let mut paths = Store::new();
        declare(&mut paths, "a", sh::PATH, "http://ex.org/a");
        declare(&mut paths, "b", tree::PATH, "http://ex.org/b");

        // `b` only has a tree:path, even though `a` has a sh:path
        let root = locate_path_root(&paths, Some(&Term::blank("b"))).unwrap();
        assert_eq!(root, Term::iri("http://ex.org/b"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut paths = Store::new();
        declare(&mut paths, "a", sh::PATH, "http://ex.org/first");
        declare(&mut paths, "b", sh::PATH, "http://ex.org/second");

        assert_eq!(declared_roots(&paths, None).len(), 2);
        assert_eq!(locate_path_root(&paths, None).unwrap(), Term::iri("http://ex.org/first"));
    }

    #[test]
    fn test_no_path_found() {
        let mut paths = Store::new();
        declare(&mut paths, "a", sh::PATH, "http://ex.org/a");

        let err = locate_path_root(&paths, Some(&Term::iri("http://ex.org/missing"))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoPathFound);
        assert!(err.to_string().contains("http://ex.org/missing"));

        let err = locate_path_root(&Store::new(), None).unwrap_err();
        assert_eq!(err, PathError::NoPathFound { entry: None });
    }
}
