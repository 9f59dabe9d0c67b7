//! SHACL property path evaluation
//!
//! This module provides:
//! - `locator`: finds the path expression declared in a path graph
//! - `evaluator`: walks the expression over a data graph
//! - `builder`: writes path expressions into a path graph
//!
//! The entry point [`evaluate_path`] takes both graphs as triple sequences,
//! indexes them and returns every data node the path reaches, in traversal
//! order and with duplicates kept.

pub mod builder;
pub mod evaluator;
pub mod locator;

pub use builder::PathExpr;
pub use evaluator::{PathEvaluator, PathStats};
pub use locator::{declared_roots, locate_path_root};

use crate::config::PathConfig;
use crate::core::TripleIndex;
use crate::error::PathResult;
use crate::store::Store;
use crate::term::{NodeInput, Term, Triple};

/// A cursor into the path graph paired with the data nodes reached so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// The path graph node currently being interpreted
    pub path_node: Term,
    /// Data graph nodes, in the order they were reached
    pub data_nodes: Vec<Term>,
}

impl PathMapping {
    pub fn new(path_node: Term, data_nodes: Vec<Term>) -> Self {
        PathMapping { path_node, data_nodes }
    }

    /// The initial mapping: the expression root and a single start node
    pub fn seed(root: Term, start: Term) -> Self {
        Self::new(root, vec![start])
    }

    /// Same data nodes, cursor moved to `path_node`
    pub fn with_cursor(&self, path_node: Term) -> Self {
        Self::new(path_node, self.data_nodes.clone())
    }

    pub fn into_data_nodes(self) -> Vec<Term> {
        self.data_nodes
    }
}

/// Evaluate the declared path from `object_entry`.
///
/// Uses the default configuration with `SHACL_PATH_*` environment overrides
/// applied; configuration files are only read through [`PathConfig::load`]
/// and [`evaluate_path_with_config`].
///
/// `path_entry` restricts the declaration search to one subject in the path
/// graph; `None` searches the whole graph.
pub fn evaluate_path(
    data_triples: impl IntoIterator<Item = Triple>,
    path_triples: impl IntoIterator<Item = Triple>,
    object_entry: impl Into<NodeInput>,
    path_entry: Option<NodeInput>,
) -> PathResult<Vec<Term>> {
    evaluate_path_with_config(
        data_triples,
        path_triples,
        object_entry,
        path_entry,
        &PathConfig::from_env(),
    )
}

/// Evaluate the declared path from `object_entry` with the given configuration
pub fn evaluate_path_with_config(
    data_triples: impl IntoIterator<Item = Triple>,
    path_triples: impl IntoIterator<Item = Triple>,
    object_entry: impl Into<NodeInput>,
    path_entry: Option<NodeInput>,
    config: &PathConfig,
) -> PathResult<Vec<Term>> {
    // Reject bad entries before indexing anything
    let start = object_entry.into().into_node("object entry")?;
    let entry = path_entry.map(|e| e.into_node("path entry")).transpose()?;

    let data: Store = data_triples.into_iter().collect();
    let paths: Store = path_triples.into_iter().collect();

    tracing::debug!(
        start = %start,
        data_triples = data.len(),
        path_triples = paths.len(),
        "Evaluating property path"
    );

    let mut evaluator = PathEvaluator::with_config(&data, &paths, config.evaluation.clone());
    evaluator.evaluate_from(&start, entry.as_ref())
}
