//! 图模型：追加式边序列、去重节点集合、逐次运行的节点编号映射。
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::ids::{EdgeId, NodeId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Edge, TotalWeight, Weight};
use crate::mst::MstResult;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {a:?} - {b:?} has an empty node label")]
    EmptyLabel { a: String, b: String },
}

/// An undirected weighted graph built by appending edges.
///
/// The node set is exactly the union of all edge endpoints, deduplicated by
/// label and enumerated in first-seen order. There is no removal.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphDocument", into = "GraphDocument")]
pub struct Graph {
    edges: IndexVec<EdgeId, Edge>,
    nodes: IndexSet<String>,
}

/// On-disk shape of a [`Graph`]: the edge list alone. Nodes are derived
/// again on load so the endpoint invariant cannot be broken by a file.
#[derive(Serialize, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<GraphDocument> for Graph {
    type Error = GraphError;

    fn try_from(document: GraphDocument) -> Result<Self, Self::Error> {
        Graph::from_edges(document.edges)
    }
}

impl From<Graph> for GraphDocument {
    fn from(graph: Graph) -> Self {
        GraphDocument {
            edges: graph.edges.iter().cloned().collect(),
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from edges in order, stopping at the first invalid one.
    pub fn from_edges<It>(edges: It) -> Result<Self, GraphError>
    where
        It: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    /// Appends the undirected edge `a - b`. Fails without touching the graph
    /// when either label is empty. Self loops and repeated pairs are kept.
    pub fn add_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        self.push_edge(Edge::new(a, b, weight))
    }

    pub fn push_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        if edge.a.is_empty() || edge.b.is_empty() {
            return Err(GraphError::EmptyLabel {
                a: edge.a,
                b: edge.b,
            });
        }
        if !self.nodes.contains(&edge.a) {
            self.nodes.insert(edge.a.clone());
        }
        if !self.nodes.contains(&edge.b) {
            self.nodes.insert(edge.b.clone());
        }
        Ok(self.edges.push(edge))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn first_node(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.nodes.contains(label)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edges_enumerated(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter_enumerated()
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge)
    }

    pub fn total_weight(&self) -> TotalWeight {
        self.edges
            .iter()
            .map(|edge| TotalWeight::from(edge.weight))
            .sum()
    }

    /// Copies the graph into a petgraph `UnGraph`, nodes in first-seen order.
    pub fn to_petgraph(&self) -> UnGraph<String, Weight> {
        let mut graph = UnGraph::with_capacity(self.node_count(), self.edge_count());
        let handles = self
            .nodes
            .iter()
            .map(|label| (label.as_str(), graph.add_node(label.clone())))
            .collect::<HashMap<_, _>>();
        for edge in self.edges.iter() {
            if let (Some(&a), Some(&b)) = (handles.get(edge.a.as_str()), handles.get(edge.b.as_str()))
            {
                graph.add_edge(a, b, edge.weight);
            }
        }
        graph
    }

    /// Graphviz rendering. Edges that appear in `highlight` are drawn bold;
    /// repeated edges are matched one for one.
    pub fn to_dot(&self, highlight: Option<&MstResult>) -> String {
        let mut selected: HashMap<(&str, &str, Weight), usize> = HashMap::new();
        if let Some(result) = highlight {
            for edge in result.edges() {
                let (a, b) = edge.unordered_pair();
                *selected.entry((a, b, edge.weight)).or_default() += 1;
            }
        }

        let mut dot = String::from("graph G {\n");
        dot.push_str("    node [fontname=\"Helvetica\", shape=circle];\n");

        for (idx, label) in self.nodes.iter().enumerate() {
            dot.push_str(&format!("    n{} [label=\"{}\"];\n", idx, escape_label(label)));
        }

        for edge in self.edges.iter() {
            let (Some(a), Some(b)) = (
                self.nodes.get_index_of(&edge.a),
                self.nodes.get_index_of(&edge.b),
            ) else {
                continue;
            };
            let (lo, hi) = edge.unordered_pair();
            let in_tree = match selected.get_mut(&(lo, hi, edge.weight)) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            };
            let style = if in_tree {
                "penwidth=3, color=\"#1565c0\""
            } else {
                "color=\"#9e9e9e\""
            };
            dot.push_str(&format!(
                "    n{} -- n{} [label=\"{}\", {}];\n",
                a, b, edge.weight, style
            ));
        }

        dot.push_str("}\n");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(
        &self,
        path: P,
        highlight: Option<&MstResult>,
    ) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot(highlight))
    }

    /// Structural oddities the algorithms tolerate but a caller may care about.
    pub fn summary(&self) -> GraphSummary {
        let mut pairs: HashMap<(&str, &str), usize> = HashMap::new();
        let mut self_loops = 0;
        let mut negative_weights = 0;

        for edge in self.edges.iter() {
            if edge.is_self_loop() {
                self_loops += 1;
            }
            if edge.weight < 0 {
                negative_weights += 1;
            }
            *pairs.entry(edge.unordered_pair()).or_default() += 1;
        }

        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            self_loops,
            duplicate_pairs: pairs.values().filter(|&&count| count > 1).count(),
            negative_weights,
        }
    }

    pub fn log_summary(&self) {
        let summary = self.summary();

        if summary.has_issues() {
            log::warn!(
                "graph has {} nodes, {} edges",
                summary.nodes,
                summary.edges
            );
            if summary.self_loops > 0 {
                log::warn!("  - {} self loop(s), never selected", summary.self_loops);
            }
            if summary.duplicate_pairs > 0 {
                log::warn!(
                    "  - {} node pair(s) joined by more than one edge",
                    summary.duplicate_pairs
                );
            }
        } else {
            log::info!(
                "graph has {} nodes, {} edges",
                summary.nodes,
                summary.edges
            );
        }
        if summary.negative_weights > 0 {
            log::debug!("{} edge(s) carry a negative weight", summary.negative_weights);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub duplicate_pairs: usize,
    pub negative_weights: usize,
}

impl GraphSummary {
    pub fn has_issues(&self) -> bool {
        self.self_loops > 0 || self.duplicate_pairs > 0
    }
}

/// Dense `0..node_count` numbering of a graph's labels.
///
/// Built fresh for every algorithm run and dropped with it; nothing about
/// the numbering is stored on the [`Graph`].
#[derive(Debug)]
pub struct NodeIndex<'g> {
    ids: IndexMap<&'g str, NodeId>,
}

impl<'g> NodeIndex<'g> {
    pub fn build(graph: &'g Graph) -> Self {
        let ids = graph
            .nodes()
            .enumerate()
            .map(|(idx, label)| (label, NodeId::from_usize(idx)))
            .collect();
        Self { ids }
    }

    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Id of a label known to belong to the indexed graph.
    ///
    /// # Panics
    /// If `label` is not a node of the graph this index was built from.
    pub fn id(&self, label: &str) -> NodeId {
        self.ids[label]
    }

    pub fn endpoints(&self, edge: &Edge) -> (NodeId, NodeId) {
        (self.id(&edge.a), self.id(&edge.b))
    }

    pub fn label(&self, id: NodeId) -> Option<&'g str> {
        self.ids.get_index(id.index()).map(|(label, _)| *label)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn escape_label(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
