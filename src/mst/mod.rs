//! Minimum spanning tree engines.
//!
//! Two independent strategies over the same [`Graph`]: Kruskal (sorted edge
//! scan + union-find) and Prim (single tree grown from a start node through a
//! weight-ordered pool of every edge). Both return an [`MstResult`]; on a
//! connected graph their total weights agree, the chosen edges may differ
//! when weights tie.
//!
//! Disconnected input is not an error. Kruskal yields a minimum spanning
//! forest, Prim a tree over the start node's component only. Use
//! [`MstResult::spans`] to tell the cases apart.

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Edge, Graph, TotalWeight};

pub use disjoint_set::DisjointSet;
pub use kruskal::run_kruskal;
pub use prim::{run_prim, run_prim_from};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MstError {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("start node {0:?} is not in the graph")]
    UnknownStart(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Kruskal => "Kruskal",
            Algorithm::Prim => "Prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Edges selected by one engine, in selection order, with their weight sum.
///
/// Owns copies of the edges; the graph it came from can be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    algorithm: Algorithm,
    /// Node a Prim tree was grown from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    edges: Vec<Edge>,
    total_weight: TotalWeight,
}

impl MstResult {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: None,
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    pub(crate) fn grown_from(algorithm: Algorithm, start: &str) -> Self {
        Self {
            start: Some(start.to_owned()),
            ..Self::new(algorithm)
        }
    }

    pub(crate) fn accept(&mut self, edge: &Edge) {
        self.total_weight += TotalWeight::from(edge.weight);
        self.edges.push(edge.clone());
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Start node of a Prim run, `None` for Kruskal.
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> TotalWeight {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the result is a spanning tree of `graph`, i.e. it has
    /// `node_count - 1` edges. An empty graph is spanned by the empty result.
    pub fn spans(&self, graph: &Graph) -> bool {
        self.edges.len() == graph.node_count().saturating_sub(1)
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

pub fn run(algorithm: Algorithm, graph: &Graph) -> Result<MstResult, MstError> {
    match algorithm {
        Algorithm::Kruskal => Ok(run_kruskal(graph)),
        Algorithm::Prim => run_prim(graph),
    }
}

/// Both engines over the same graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub kruskal: MstResult,
    pub prim: MstResult,
}

impl Comparison {
    pub fn weights_agree(&self) -> bool {
        self.kruskal.total_weight() == self.prim.total_weight()
    }
}

/// Runs Kruskal and Prim (from the first node) side by side.
pub fn compare(graph: &Graph) -> Result<Comparison, MstError> {
    let start = graph.first_node().ok_or(MstError::EmptyGraph)?;
    compare_from(graph, start)
}

/// Runs Kruskal and Prim from `start` side by side on the rayon pool. The
/// graph is only read, each engine owns its working state.
pub fn compare_from(graph: &Graph, start: &str) -> Result<Comparison, MstError> {
    let (kruskal, prim) = rayon::join(|| run_kruskal(graph), || run_prim_from(graph, start));
    let comparison = Comparison {
        kruskal,
        prim: prim?,
    };
    if !comparison.weights_agree() {
        log::warn!(
            "Kruskal weight {} differs from Prim weight {}; graph is not connected",
            comparison.kruskal.total_weight(),
            comparison.prim.total_weight()
        );
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weight;

    fn graph(edges: &[(&str, &str, Weight)]) -> Graph {
        Graph::from_edges(edges.iter().map(|&(a, b, w)| Edge::new(a, b, w))).unwrap()
    }

    #[test]
    fn triangle_agrees_on_weight_three() {
        let g = graph(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);

        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let result = run(algorithm, &g).unwrap();
            assert_eq!(result.algorithm(), algorithm);
            assert_eq!(result.total_weight(), 3);
            assert_eq!(result.len(), 2);
            assert!(result.edges().iter().any(|e| e.connects("A", "B")));
            assert!(result.edges().iter().any(|e| e.connects("B", "C")));
            assert!(result.spans(&g));
        }
    }

    #[test]
    fn equal_weight_triangle_takes_any_two_edges() {
        let g = graph(&[("A", "B", 1), ("A", "C", 1), ("B", "C", 1)]);
        let comparison = compare(&g).unwrap();

        assert!(comparison.weights_agree());
        for result in [&comparison.kruskal, &comparison.prim] {
            assert_eq!(result.total_weight(), 2);
            assert_eq!(result.len(), 2);
        }
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();

        let kruskal = run(Algorithm::Kruskal, &g).unwrap();
        assert!(kruskal.is_empty());
        assert_eq!(kruskal.total_weight(), 0);
        assert!(kruskal.spans(&g));

        assert_eq!(run(Algorithm::Prim, &g), Err(MstError::EmptyGraph));
        assert_eq!(compare(&g), Err(MstError::EmptyGraph));
    }

    #[test]
    fn disconnected_compare_reports_disagreement() {
        let g = graph(&[("A", "B", 1), ("C", "D", 1)]);
        let comparison = compare(&g).unwrap();

        assert_eq!(comparison.kruskal.total_weight(), 2);
        assert_eq!(comparison.prim.total_weight(), 1);
        assert!(!comparison.weights_agree());
        assert!(!comparison.kruskal.spans(&g));
    }

    #[test]
    fn result_outlives_graph() {
        let result = {
            let g = graph(&[("A", "B", 4)]);
            run_kruskal(&g)
        };
        assert_eq!(result.into_edges(), vec![Edge::new("A", "B", 4)]);
    }

    #[test]
    fn extreme_weights_sum_without_overflow() {
        let g = graph(&[
            ("A", "B", Weight::MAX),
            ("B", "C", 1),
            ("C", "D", Weight::MAX),
        ]);
        let expected = 2 * TotalWeight::from(Weight::MAX) + 1;

        let comparison = compare(&g).unwrap();
        assert_eq!(comparison.kruskal.total_weight(), expected);
        assert_eq!(comparison.prim.total_weight(), expected);
        assert!(comparison.weights_agree());

        let g = graph(&[("A", "B", Weight::MIN), ("B", "C", Weight::MIN)]);
        assert_eq!(
            run_kruskal(&g).total_weight(),
            2 * TotalWeight::from(Weight::MIN)
        );
    }

    #[test]
    fn prim_result_remembers_its_start() {
        let g = graph(&[("A", "B", 1), ("B", "C", 2)]);

        assert_eq!(run_prim_from(&g, "C").unwrap().start(), Some("C"));
        assert_eq!(run(Algorithm::Prim, &g).unwrap().start(), Some("A"));
        assert_eq!(run_kruskal(&g).start(), None);
    }

    #[test]
    fn algorithm_display_names() {
        assert_eq!(Algorithm::Kruskal.to_string(), "Kruskal");
        assert_eq!(Algorithm::Prim.to_string(), "Prim");
    }
}
