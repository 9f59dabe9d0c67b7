//! Namespace constants and the path vocabulary
//!
//! The IRIs are compile-time string constants. The [`Vocabulary`] table holds
//! the same IRIs as ready-made terms for store lookups; it is built once on
//! first use and never mutated.

use std::sync::OnceLock;

use crate::term::Term;

/// Standard namespace IRI constants
pub mod ns {
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// SHACL (Shapes Constraint Language)
    pub const SHACL: &str = "http://www.w3.org/ns/shacl#";
    /// TREE hypermedia vocabulary
    pub const TREE: &str = "https://w3id.org/tree#";
    /// XML Schema Datatypes namespace
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Helper to construct a full IRI from namespace and local name
    #[inline]
    pub fn iri(namespace: &str, local: &str) -> String {
        format!("{}{}", namespace, local)
    }

    /// Extract local name from an IRI given its namespace
    #[inline]
    pub fn local_name<'a>(iri: &'a str, namespace: &str) -> Option<&'a str> {
        iri.strip_prefix(namespace)
    }
}

/// `sh:` path terms
pub mod sh {
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const INVERSE_PATH: &str = "http://www.w3.org/ns/shacl#inversePath";
    pub const ALTERNATIVE_PATH: &str = "http://www.w3.org/ns/shacl#alternativePath";
    pub const ZERO_OR_MORE_PATH: &str = "http://www.w3.org/ns/shacl#zeroOrMorePath";
    pub const ONE_OR_MORE_PATH: &str = "http://www.w3.org/ns/shacl#oneOrMorePath";
    pub const ZERO_OR_ONE_PATH: &str = "http://www.w3.org/ns/shacl#zeroOrOnePath";
}

/// `tree:` path terms
pub mod tree {
    pub const PATH: &str = "https://w3id.org/tree#path";
}

/// `rdf:` list terms
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// Edge labels the evaluator dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKeyword {
    InversePath,
    AlternativePath,
    ZeroOrMorePath,
    OneOrMorePath,
    ZeroOrOnePath,
    /// `rdf:first`: the node is a sequence list cell
    First,
}

impl PathKeyword {
    /// Look up the keyword for a predicate IRI
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            sh::INVERSE_PATH => Some(PathKeyword::InversePath),
            sh::ALTERNATIVE_PATH => Some(PathKeyword::AlternativePath),
            sh::ZERO_OR_MORE_PATH => Some(PathKeyword::ZeroOrMorePath),
            sh::ONE_OR_MORE_PATH => Some(PathKeyword::OneOrMorePath),
            sh::ZERO_OR_ONE_PATH => Some(PathKeyword::ZeroOrOnePath),
            rdf::FIRST => Some(PathKeyword::First),
            _ => None,
        }
    }

    /// Look up the keyword for a predicate term; non-IRI terms have none
    pub fn from_term(term: &Term) -> Option<Self> {
        term.as_iri().and_then(|iri| Self::from_iri(iri.as_str()))
    }

    /// The predicate IRI of this keyword
    pub fn iri(&self) -> &'static str {
        match self {
            PathKeyword::InversePath => sh::INVERSE_PATH,
            PathKeyword::AlternativePath => sh::ALTERNATIVE_PATH,
            PathKeyword::ZeroOrMorePath => sh::ZERO_OR_MORE_PATH,
            PathKeyword::OneOrMorePath => sh::ONE_OR_MORE_PATH,
            PathKeyword::ZeroOrOnePath => sh::ZERO_OR_ONE_PATH,
            PathKeyword::First => rdf::FIRST,
        }
    }

    /// Quantifiers are recognized but have no traversal semantics
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            PathKeyword::ZeroOrMorePath | PathKeyword::OneOrMorePath | PathKeyword::ZeroOrOnePath
        )
    }
}

/// Which predicate declares the path expression root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathDeclaration {
    /// `sh:path`, searched first
    #[default]
    Shacl,
    /// `tree:path`, searched when no `sh:path` exists
    Tree,
}

impl PathDeclaration {
    /// Declarations in lookup order
    pub const SEARCH_ORDER: [PathDeclaration; 2] = [PathDeclaration::Shacl, PathDeclaration::Tree];

    /// The predicate term for this declaration
    pub fn predicate(&self) -> &'static Term {
        let vocab = vocabulary();
        match self {
            PathDeclaration::Shacl => &vocab.sh_path,
            PathDeclaration::Tree => &vocab.tree_path,
        }
    }
}

/// Vocabulary terms used for store lookups
#[derive(Debug)]
pub struct Vocabulary {
    pub sh_path: Term,
    pub tree_path: Term,
    pub sh_inverse_path: Term,
    pub sh_alternative_path: Term,
    pub sh_zero_or_more_path: Term,
    pub sh_one_or_more_path: Term,
    pub sh_zero_or_one_path: Term,
    pub rdf_first: Term,
    pub rdf_rest: Term,
    pub rdf_nil: Term,
}

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

/// The shared vocabulary table
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(|| Vocabulary {
        sh_path: Term::iri(sh::PATH),
        tree_path: Term::iri(tree::PATH),
        sh_inverse_path: Term::iri(sh::INVERSE_PATH),
        sh_alternative_path: Term::iri(sh::ALTERNATIVE_PATH),
        sh_zero_or_more_path: Term::iri(sh::ZERO_OR_MORE_PATH),
        sh_one_or_more_path: Term::iri(sh::ONE_OR_MORE_PATH),
        sh_zero_or_one_path: Term::iri(sh::ZERO_OR_ONE_PATH),
        rdf_first: Term::iri(rdf::FIRST),
        rdf_rest: Term::iri(rdf::REST),
        rdf_nil: Term::iri(rdf::NIL),
    })
}

impl Vocabulary {
    /// The predicate term for a keyword
    pub fn keyword(&self, keyword: PathKeyword) -> &Term {
        match keyword {
            PathKeyword::InversePath => &self.sh_inverse_path,
            PathKeyword::AlternativePath => &self.sh_alternative_path,
            PathKeyword::ZeroOrMorePath => &self.sh_zero_or_more_path,
            PathKeyword::OneOrMorePath => &self.sh_one_or_more_path,
            PathKeyword::ZeroOrOnePath => &self.sh_zero_or_one_path,
            PathKeyword::First => &self.rdf_first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_construction() {
        assert_eq!(ns::iri(ns::SHACL, "path"), sh::PATH);
        assert_eq!(ns::iri(ns::TREE, "path"), tree::PATH);
        assert_eq!(ns::iri(ns::RDF, "nil"), rdf::NIL);
        assert_eq!(ns::local_name(sh::INVERSE_PATH, ns::SHACL), Some("inversePath"));
        assert_eq!(ns::local_name(sh::INVERSE_PATH, ns::RDF), None);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(PathKeyword::from_iri(sh::INVERSE_PATH), Some(PathKeyword::InversePath));
        assert_eq!(PathKeyword::from_iri(rdf::FIRST), Some(PathKeyword::First));
        assert_eq!(PathKeyword::from_iri(rdf::REST), None);
        assert_eq!(PathKeyword::from_iri(sh::PATH), None);
        assert_eq!(PathKeyword::from_term(&Term::blank(sh::INVERSE_PATH)), None);

        for keyword in [PathKeyword::AlternativePath, PathKeyword::ZeroOrOnePath] {
            assert_eq!(PathKeyword::from_iri(keyword.iri()), Some(keyword));
            assert_eq!(vocabulary().keyword(keyword), &Term::iri(keyword.iri()));
        }
    }

    #[test]
    fn test_quantifiers() {
        assert!(PathKeyword::ZeroOrMorePath.is_quantifier());
        assert!(PathKeyword::OneOrMorePath.is_quantifier());
        assert!(!PathKeyword::InversePath.is_quantifier());
        assert!(!PathKeyword::First.is_quantifier());
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(PathDeclaration::SEARCH_ORDER[0], PathDeclaration::Shacl);
        assert_eq!(PathDeclaration::Tree.predicate(), &Term::iri(tree::PATH));
    }
}
