use log::{debug, info, warn};

use crate::graph::{Graph, NodeId, NodeIndex};
use crate::mst::{Algorithm, DisjointSet, MstResult};

/// Kruskal's algorithm.
///
/// Edges are scanned by ascending weight, equal weights in insertion order,
/// and an edge is kept when its endpoints are still in different sets. The
/// whole edge list is scanned even after the tree is complete.
///
/// An empty graph gives an empty result. A disconnected graph gives a minimum
/// spanning forest, one tree per component.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn run_kruskal(graph: &Graph) -> MstResult {
    let index = NodeIndex::build(graph);

    let mut order = graph.edges_enumerated().collect::<Vec<_>>();
    order.sort_by_key(|(_, edge)| edge.weight);

    let mut sets = DisjointSet::<NodeId>::new(index.len());
    let mut result = MstResult::new(Algorithm::Kruskal);

    for (edge_id, edge) in order {
        let (a, b) = index.endpoints(edge);
        if sets.union(a, b) {
            debug!("kruskal: take {:?} {}", edge_id, edge);
            result.accept(edge);
        } else {
            debug!("kruskal: skip {:?} {}, closes a cycle", edge_id, edge);
        }
    }

    if !result.spans(graph) {
        warn!(
            "kruskal: graph has {} components, returning a spanning forest",
            sets.set_count()
        );
    }
    info!(
        "kruskal: {} of {} edges selected, total weight {}",
        result.len(),
        graph.edge_count(),
        result.total_weight()
    );
    result
}
