//! Property path evaluation
//!
//! Interprets a path expression stored as a graph. The evaluator keeps a
//! cursor into the path graph and the sequence of data nodes reached so far,
//! and dispatches on the edges leaving the cursor:
//! - no edges: the cursor is a predicate, followed in the data graph
//! - `sh:inversePath`: the sub-path is evaluated with every predicate flipped
//! - `sh:alternativePath`: each list element is evaluated against the same input
//! - `rdf:first`: the cursor is a sequence list cell
//!
//! Results are never de-duplicated and keep traversal order.
//!
//! # Usage
//!
//! ```ignore
//! use shacl_path::path::PathEvaluator;
//!
//! let mut evaluator = PathEvaluator::new(&data, &paths);
//! let values = evaluator.evaluate_from(&start, None)?;
//! ```

use crate::config::EvaluationConfig;
use crate::core::{vocabulary, PathKeyword, TripleIndex};
use crate::error::{PathError, PathResult};
use crate::term::Term;
use super::locator::locate_path_root;
use super::PathMapping;

/// Statistics for path evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStats {
    /// Number of dispatch calls (path graph nodes interpreted)
    pub dispatches: usize,
    /// Number of predicate steps taken against the data graph
    pub predicate_steps: usize,
    /// Number of data triples matched by predicate steps
    pub triples_matched: usize,
    /// Deepest dispatch nesting reached
    pub max_depth: usize,
    /// Number of quantifier paths skipped
    pub skipped_quantifiers: usize,
}

/// Property path evaluator over a data graph and a path graph
pub struct PathEvaluator<'a> {
    data: &'a dyn TripleIndex,
    paths: &'a dyn TripleIndex,
    config: EvaluationConfig,
    stats: PathStats,
}

impl<'a> PathEvaluator<'a> {
    /// Create a new path evaluator with default configuration
    pub fn new(data: &'a dyn TripleIndex, paths: &'a dyn TripleIndex) -> Self {
        Self::with_config(data, paths, EvaluationConfig::default())
    }

    /// Create a path evaluator with custom configuration
    pub fn with_config(
        data: &'a dyn TripleIndex,
        paths: &'a dyn TripleIndex,
        config: EvaluationConfig,
    ) -> Self {
        PathEvaluator {
            data,
            paths,
            config,
            stats: PathStats::default(),
        }
    }

    /// Get evaluation statistics
    pub fn stats(&self) -> &PathStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset(&mut self) {
        self.stats = PathStats::default();
    }

    /// Locate the path declared for `path_entry` and evaluate it from `start`,
    /// flattening all result mappings into one node sequence.
    pub fn evaluate_from(&mut self, start: &Term, path_entry: Option<&Term>) -> PathResult<Vec<Term>> {
        let root = locate_path_root(self.paths, path_entry)?;
        let mappings = self.evaluate(PathMapping::seed(root, start.clone()))?;

        let nodes: Vec<Term> = mappings.into_iter().flat_map(PathMapping::into_data_nodes).collect();

        if self.config.log_stats {
            tracing::debug!(
                start = %start,
                results = nodes.len(),
                dispatches = self.stats.dispatches,
                predicate_steps = self.stats.predicate_steps,
                triples_matched = self.stats.triples_matched,
                max_depth = self.stats.max_depth,
                "Evaluated property path"
            );
        }

        Ok(nodes)
    }

    /// Evaluate the expression at `mapping.path_node` starting from
    /// `mapping.data_nodes`, not inverted and outside any alternative.
    pub fn evaluate(&mut self, mapping: PathMapping) -> PathResult<Vec<PathMapping>> {
        self.dispatch(&mapping, false, false, 0)
    }

    /// Interpret the path graph node under the cursor
    fn dispatch(
        &mut self,
        mapping: &PathMapping,
        inverted: bool,
        in_alternative: bool,
        depth: usize,
    ) -> PathResult<Vec<PathMapping>> {
        if depth > self.config.max_depth {
            return Err(PathError::DepthExceeded {
                limit: self.config.max_depth,
                node: mapping.path_node.to_string(),
            });
        }
        self.stats.dispatches += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let paths = self.paths;
        let mut edges = paths.match_triples(Some(&mapping.path_node), None, None).peekable();

        if edges.peek().is_none() {
            return Ok(vec![self.predicate_step(mapping, inverted)]);
        }

        tracing::trace!(node = %mapping.path_node, inverted, in_alternative, depth, "Dispatching path node");

        let mut results = Vec::new();
        for edge in edges {
            let Some(keyword) = PathKeyword::from_term(&edge.predicate) else {
                continue;
            };

            if keyword.is_quantifier() {
                self.skip_quantifier(mapping, keyword);
                continue;
            }

            match keyword {
                PathKeyword::InversePath => {
                    results.extend(self.inverse_step(mapping, &edge.object, inverted, depth)?);
                }
                PathKeyword::AlternativePath => {
                    results.extend(self.alternative_step(mapping, &edge.object, inverted, depth)?);
                }
                PathKeyword::First => {
                    results.extend(self.sequence_step(mapping, &edge.object, inverted, in_alternative, depth)?);
                }
                // Quantifiers are handled above
                _ => {}
            }
        }

        Ok(results)
    }

    /// Quantifiers have no traversal semantics here; they contribute nothing
    #[cold]
    fn skip_quantifier(&mut self, mapping: &PathMapping, keyword: PathKeyword) {
        self.stats.skipped_quantifiers += 1;
        tracing::warn!(
            node = %mapping.path_node,
            quantifier = keyword.iri(),
            "Quantifier paths are not evaluated; contributing no results"
        );
    }

    /// Follow the cursor as a predicate from every current data node
    fn predicate_step(&mut self, mapping: &PathMapping, inverted: bool) -> PathMapping {
        let predicate = &mapping.path_node;
        let mut reached = Vec::new();

        for node in &mapping.data_nodes {
            let matches = if inverted {
                self.data.match_triples(None, Some(predicate), Some(node))
            } else {
                self.data.match_triples(Some(node), Some(predicate), None)
            };

            let before = reached.len();
            reached.extend(matches.map(|t| if inverted { t.subject.clone() } else { t.object.clone() }));
            self.stats.triples_matched += reached.len() - before;
        }

        self.stats.predicate_steps += 1;
        tracing::trace!(
            predicate = %predicate,
            inverted,
            inputs = mapping.data_nodes.len(),
            reached = reached.len(),
            "Predicate step"
        );

        PathMapping::new(predicate.clone(), reached)
    }

    /// Evaluate `sub_path` with the direction of every predicate beneath it flipped
    fn inverse_step(
        &mut self,
        mapping: &PathMapping,
        sub_path: &Term,
        inverted: bool,
        depth: usize,
    ) -> PathResult<Vec<PathMapping>> {
        let inner = mapping.with_cursor(sub_path.clone());
        self.dispatch(&inner, !inverted, false, depth + 1)
    }

    /// Evaluate every element of the list at `list_head` against the same input
    fn alternative_step(
        &mut self,
        mapping: &PathMapping,
        list_head: &Term,
        inverted: bool,
        depth: usize,
    ) -> PathResult<Vec<PathMapping>> {
        let choices = mapping.with_cursor(list_head.clone());
        self.dispatch(&choices, inverted, true, depth + 1)
    }

    /// Evaluate the list cell under the cursor whose element is `head`.
    ///
    /// In a plain sequence the head's output feeds the rest of the list and only
    /// the tail's output is returned. While enumerating an alternative, the rest
    /// of the list sees the original input and both outputs are returned.
    fn sequence_step(
        &mut self,
        mapping: &PathMapping,
        head: &Term,
        inverted: bool,
        in_alternative: bool,
        depth: usize,
    ) -> PathResult<Vec<PathMapping>> {
        let vocab = vocabulary();

        // The element itself never enumerates alternatives, only list tails do
        let head_results = self.dispatch(&mapping.with_cursor(head.clone()), inverted, false, depth + 1)?;

        let rest = match self.paths.first_object(&mapping.path_node, &vocab.rdf_rest) {
            Some(rest) if rest != vocab.rdf_nil => rest,
            _ => return Ok(head_results),
        };

        if in_alternative {
            let mut results = head_results;
            let tail = mapping.with_cursor(rest);
            results.extend(self.dispatch(&tail, inverted, true, depth + 1)?);
            return Ok(results);
        }

        let mut results = Vec::new();
        for head_result in head_results {
            let tail = PathMapping::new(rest.clone(), head_result.data_nodes);
            results.extend(self.dispatch(&tail, inverted, false, depth + 1)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::core::namespaces::{rdf, sh};
    use crate::error::ErrorCode;
    use crate::store::Store;
    use crate::term::Triple;

    const KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";
    const NAME: &str = "http://xmlns.com/foaf/0.1/name";

    fn person(name: &str) -> Term {
        Term::iri(format!("http://example.org/{}", name))
    }

    fn create_test_store() -> Store {
        let mut store = Store::new();

        // Alice -> knows -> Bob -> knows -> Carol
        // Alice -> knows -> Eve
        for (s, o) in [("Alice", "Bob"), ("Bob", "Carol"), ("Alice", "Eve")] {
            store.add(Triple::new(person(s), Term::iri(KNOWS), person(o)));
        }
        for name in ["Alice", "Bob", "Carol", "Eve"] {
            store.add(Triple::new(person(name), Term::iri(NAME), Term::literal(name)));
        }

        store
    }

    fn edge(paths: &mut Store, s: &Term, p: &str, o: &Term) {
        paths.add(Triple::new(s.clone(), Term::iri(p), o.clone()));
    }

    fn run(data: &Store, paths: &Store, root: Term, start: &str) -> Vec<Term> {
        let mut evaluator = PathEvaluator::new(data, paths);
        evaluator
            .evaluate(PathMapping::seed(root, person(start)))
            .unwrap()
            .into_iter()
            .flat_map(PathMapping::into_data_nodes)
            .collect()
    }

    #[test]
    fn test_predicate_step() {
        let data = create_test_store();
        let result = run(&data, &Store::new(), Term::iri(KNOWS), "Alice");
        assert_eq!(result, vec![person("Bob"), person("Eve")]);
    }

    #[test]
    fn test_predicate_step_without_matches() {
        let data = create_test_store();
        let empty = Store::new();
        let mut evaluator = PathEvaluator::new(&data, &empty);
        let mappings = evaluator.evaluate(PathMapping::seed(Term::iri(KNOWS), person("Carol"))).unwrap();

        assert_eq!(mappings.len(), 1);
        assert!(mappings[0].data_nodes.is_empty());
    }

    #[test]
    fn test_inverse_path() {
        let data = create_test_store();
        let mut paths = Store::new();
        let root = Term::blank("inv");
        edge(&mut paths, &root, sh::INVERSE_PATH, &Term::iri(KNOWS));

        assert_eq!(run(&data, &paths, root, "Bob"), vec![person("Alice")]);
    }

    #[test]
    fn test_double_inverse_cancels() {
        let data = create_test_store();
        let mut paths = Store::new();
        let outer = Term::blank("outer");
        let inner = Term::blank("inner");
        edge(&mut paths, &outer, sh::INVERSE_PATH, &inner);
        edge(&mut paths, &inner, sh::INVERSE_PATH, &Term::iri(KNOWS));

        assert_eq!(run(&data, &paths, outer, "Alice"), vec![person("Bob"), person("Eve")]);
    }

    #[test]
    fn test_sequence_without_rest_edge() {
        let data = create_test_store();
        let mut paths = Store::new();
        let cell = Term::blank("cell");
        edge(&mut paths, &cell, rdf::FIRST, &Term::iri(KNOWS));

        assert_eq!(run(&data, &paths, cell, "Alice"), vec![person("Bob"), person("Eve")]);
    }

    #[test]
    fn test_sequence_threads_every_branch() {
        let data = create_test_store();
        let mut paths = Store::new();
        let c1 = Term::blank("c1");
        let c2 = Term::blank("c2");
        edge(&mut paths, &c1, rdf::FIRST, &Term::iri(KNOWS));
        edge(&mut paths, &c1, rdf::REST, &c2);
        edge(&mut paths, &c2, rdf::FIRST, &Term::iri(NAME));
        edge(&mut paths, &c2, rdf::REST, &Term::iri(rdf::NIL));

        assert_eq!(
            run(&data, &paths, c1, "Alice"),
            vec![Term::literal("Bob"), Term::literal("Eve")]
        );
    }

    #[test]
    fn test_alternative_keeps_duplicates() {
        let data = create_test_store();
        let mut paths = Store::new();
        let alt = Term::blank("alt");
        let c1 = Term::blank("c1");
        let c2 = Term::blank("c2");
        edge(&mut paths, &alt, sh::ALTERNATIVE_PATH, &c1);
        edge(&mut paths, &c1, rdf::FIRST, &Term::iri(KNOWS));
        edge(&mut paths, &c1, rdf::REST, &c2);
        edge(&mut paths, &c2, rdf::FIRST, &Term::iri(KNOWS));
        edge(&mut paths, &c2, rdf::REST, &Term::iri(rdf::NIL));

        let mut evaluator = PathEvaluator::new(&data, &paths);
        let mappings = evaluator.evaluate(PathMapping::seed(alt, person("Alice"))).unwrap();

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].data_nodes, vec![person("Bob"), person("Eve")]);
        assert_eq!(mappings[1].data_nodes, vec![person("Bob"), person("Eve")]);
    }

    #[test]
    fn test_quantifier_contributes_nothing() {
        let data = create_test_store();
        let mut paths = Store::new();
        let star = Term::blank("star");
        edge(&mut paths, &star, sh::ZERO_OR_MORE_PATH, &Term::iri(KNOWS));

        let mut evaluator = PathEvaluator::new(&data, &paths);
        let mappings = evaluator.evaluate(PathMapping::seed(star, person("Alice"))).unwrap();

        assert!(mappings.is_empty());
        assert_eq!(evaluator.stats().skipped_quantifiers, 1);
    }

    #[test]
    fn test_unrecognized_edges_contribute_nothing() {
        let data = create_test_store();
        let mut paths = Store::new();
        // The predicate has a label in the path graph, so it is no longer a leaf
        edge(&mut paths, &Term::iri(KNOWS), "http://www.w3.org/2000/01/rdf-schema#label", &Term::literal("knows"));

        assert!(run(&data, &paths, Term::iri(KNOWS), "Alice").is_empty());
    }

    #[test]
    fn test_cyclic_list_fails_closed() {
        let data = create_test_store();
        let mut paths = Store::new();
        let cell = Term::blank("loop");
        edge(&mut paths, &cell, rdf::FIRST, &Term::iri(NAME));
        edge(&mut paths, &cell, rdf::REST, &cell);

        let config = EvaluationConfig { max_depth: 32, ..EvaluationConfig::default() };
        let mut evaluator = PathEvaluator::with_config(&data, &paths, config);
        let err = evaluator.evaluate(PathMapping::seed(cell, person("Alice"))).unwrap_err();

        assert_eq!(err.code(), ErrorCode::DepthExceeded);
        assert_eq!(evaluator.stats().max_depth, 32);
    }

    #[test]
    fn test_self_inverse_fails_closed() {
        let data = create_test_store();
        let mut paths = Store::new();
        let node = Term::blank("self");
        edge(&mut paths, &node, sh::INVERSE_PATH, &node);

        // Default limit, on the default test thread stack
        let mut evaluator = PathEvaluator::new(&data, &paths);
        let err = evaluator.evaluate(PathMapping::seed(node, person("Alice"))).unwrap_err();
        assert!(matches!(err, PathError::DepthExceeded { limit: DEFAULT_MAX_DEPTH, .. }));
        assert_eq!(evaluator.stats().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_stats() {
        let data = create_test_store();
        let mut paths = Store::new();
        let c1 = Term::blank("c1");
        let c2 = Term::blank("c2");
        edge(&mut paths, &c1, rdf::FIRST, &Term::iri(KNOWS));
        edge(&mut paths, &c1, rdf::REST, &c2);
        edge(&mut paths, &c2, rdf::FIRST, &Term::iri(KNOWS));

        let mut evaluator = PathEvaluator::new(&data, &paths);
        let result = evaluator.evaluate_from(&person("Alice"), None);
        // No declaration in the path graph
        assert!(result.is_err());

        evaluator.evaluate(PathMapping::seed(c1, person("Alice"))).unwrap();
        let stats = evaluator.stats().clone();
        assert_eq!(stats.predicate_steps, 2);
        // Alice knows Bob and Eve; Bob knows Carol
        assert_eq!(stats.triples_matched, 3);
        assert_eq!(stats.dispatches, 4);
        assert_eq!(stats.max_depth, 2);

        evaluator.reset();
        assert_eq!(evaluator.stats(), &PathStats::default());
    }
}
