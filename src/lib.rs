//! SHACL Path - property path evaluation over RDF triples
//!
//! Evaluates the property path declared in one graph (`sh:path` or
//! `tree:path`) starting from a node of another graph, and returns every node
//! the path reaches.
//!
//! # Architecture
//!
//! - [`core::TripleIndex`] - Pattern lookup over a set of triples
//! - [`store::Store`] - Indexed in-memory triple store
//! - [`path::locate_path_root`] - Finds the declared expression in a path graph
//! - [`path::PathEvaluator`] - Walks an expression over a data graph
//! - [`path::PathExpr`] - Writes expressions into a path graph
//!
//! # Supported path forms
//!
//! - Predicate paths
//! - Sequence paths (RDF lists)
//! - Alternative paths (`sh:alternativePath`)
//! - Inverse paths (`sh:inversePath`), nested to any depth
//!
//! Quantifier paths (`sh:zeroOrMorePath` and friends) are recognized and
//! contribute no results.
//!
//! # Example
//!
//! ```rust
//! use shacl_path::{evaluate_path, PathDeclaration, PathExpr, Term, Triple};
//!
//! let data = vec![
//!     Triple::new(Term::iri("http://ex.org/5"), Term::iri("http://ex.org/plus"), Term::iri("http://ex.org/6")),
//!     Triple::new(Term::iri("http://ex.org/6"), Term::iri("http://ex.org/value"), Term::literal("6")),
//! ];
//!
//! let path = PathExpr::sequence([
//!     PathExpr::predicate("http://ex.org/plus"),
//!     PathExpr::predicate("http://ex.org/value"),
//! ]);
//! let paths = path.declare(Term::blank("relation"), PathDeclaration::Tree);
//!
//! let values = evaluate_path(data, paths, "http://ex.org/5", None).unwrap();
//! assert_eq!(values, vec![Term::literal("6")]);
//! ```

pub mod core;
pub mod config;
pub mod error;
pub mod term;
pub mod store;
pub mod path;

// Re-export core traits and vocabulary
pub use crate::core::{ns, vocabulary, PathDeclaration, PathKeyword, TripleIndex, Vocabulary};

// Re-export term types
pub use term::{Term, Triple, Iri, Literal, Datatype, BlankNode, NodeInput, RdfList};

// Re-export store types
pub use store::Store;

// Re-export path evaluation
pub use path::{
    evaluate_path, evaluate_path_with_config, declared_roots, locate_path_root,
    PathEvaluator, PathExpr, PathMapping, PathStats,
};

// Re-export configuration types
pub use config::{PathConfig, EvaluationConfig, ConfigError};

// Re-export error types
pub use error::{PathError, PathResult, ErrorCode, ErrorReport};
