use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::graph::{Graph, GraphSummary};
use crate::mst::{Algorithm, MstResult};

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s Algorithm MST:", self.algorithm())?;
        for edge in self.edges() {
            writeln!(f, "{}", edge)?;
        }
        write!(f, "Total MST Weight: {}", self.total_weight())
    }
}

/// One engine run together with how well it covers the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunEntry {
    #[serde(flatten)]
    pub result: MstResult,
    pub spanning: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreached: Vec<String>,
}

impl RunEntry {
    pub fn new(graph: &Graph, result: MstResult) -> Self {
        let spanning = result.spans(graph);
        let unreached = if spanning || result.algorithm() == Algorithm::Kruskal {
            Vec::new()
        } else {
            unreached_nodes(graph, &result)
        };
        Self {
            result,
            spanning,
            unreached,
        }
    }

    /// Trees in a Kruskal forest: one per component.
    pub fn trees(&self, graph: &Graph) -> usize {
        graph.node_count().saturating_sub(self.result.len())
    }
}

/// Everything one invocation of the binary produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub graph: GraphSummary,
    pub runs: Vec<RunEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights_agree: Option<bool>,
}

impl RunReport {
    pub fn new(graph: &Graph, results: Vec<MstResult>) -> Self {
        let weights_agree = match results.as_slice() {
            [first, second, ..] => Some(first.total_weight() == second.total_weight()),
            _ => None,
        };
        Self {
            graph: graph.summary(),
            runs: results
                .into_iter()
                .map(|result| RunEntry::new(graph, result))
                .collect(),
            weights_agree,
        }
    }

    pub fn all_spanning(&self) -> bool {
        self.runs.iter().all(|run| run.spanning)
    }

    pub fn render_text(&self, graph: &Graph) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(&run.result.to_string());
            out.push('\n');
            if !run.spanning {
                match run.result.algorithm() {
                    Algorithm::Kruskal => out.push_str(&format!(
                        "Graph is disconnected: spanning forest of {} trees\n",
                        run.trees(graph)
                    )),
                    Algorithm::Prim => out.push_str(&format!(
                        "Graph is disconnected: unreached nodes {}\n",
                        run.unreached.iter().join(", ")
                    )),
                }
            }
            out.push('\n');
        }
        if self.weights_agree == Some(false) {
            out.push_str("Kruskal and Prim totals differ\n");
        }
        out
    }
}

/// Nodes outside a Prim tree. The start node counts as reached even when
/// the tree has no edges.
fn unreached_nodes(graph: &Graph, result: &MstResult) -> Vec<String> {
    let reached = result
        .edges()
        .iter()
        .flat_map(|edge| [edge.a.as_str(), edge.b.as_str()])
        .chain(result.start())
        .collect::<HashSet<_>>();
    graph
        .nodes()
        .filter(|node| !reached.contains(node))
        .map(str::to_owned)
        .collect()
}
