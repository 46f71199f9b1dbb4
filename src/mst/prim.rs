use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, info, warn};

use crate::graph::{EdgeId, Graph, IndexVec, NodeId, NodeIndex, Weight};
use crate::mst::{Algorithm, MstError, MstResult};

/// Prim's algorithm from the graph's first node (first-seen order).
pub fn run_prim(graph: &Graph) -> Result<MstResult, MstError> {
    let start = graph.first_node().ok_or(MstError::EmptyGraph)?;
    run_prim_from(graph, start)
}

/// Prim's algorithm grown from `start`.
///
/// Every edge goes into one pool ordered by weight, ties by insertion order,
/// and the pool is popped until the tree covers the graph or runs dry:
///
/// * both endpoints in the tree: dropped;
/// * exactly one endpoint in the tree: taken, the other endpoint joins;
/// * neither endpoint in the tree yet: parked on both endpoints and put back
///   into the pool once one of them joins.
///
/// On a disconnected graph the result covers only the component of `start`.
pub fn run_prim_from(graph: &Graph, start: &str) -> Result<MstResult, MstError> {
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    let index = NodeIndex::build(graph);
    let root = index
        .get(start)
        .ok_or_else(|| MstError::UnknownStart(start.to_owned()))?;

    let mut pool = Pool::new(graph, index.len());
    let mut in_tree = IndexVec::<NodeId, bool>::from_elem_n(false, index.len());
    let mut covered = 0;
    let mut result = MstResult::grown_from(Algorithm::Prim, start);

    in_tree[root] = true;
    covered += 1;
    pool.release(root);

    while covered < index.len() {
        let Some((edge_id, weight)) = pool.pop() else {
            break;
        };
        let Some(edge) = graph.edge(edge_id) else {
            continue;
        };
        let (a, b) = index.endpoints(edge);

        match (in_tree[a], in_tree[b]) {
            (true, true) => {
                debug!("prim: drop {:?} {}, both ends in tree", edge_id, edge);
            }
            (false, false) => {
                pool.park(edge_id, weight, a, b);
            }
            (a_in, _) => {
                let joined = if a_in { b } else { a };
                debug!("prim: take {:?} {}", edge_id, edge);
                result.accept(edge);
                in_tree[joined] = true;
                covered += 1;
                pool.release(joined);
            }
        }
    }

    if covered < index.len() {
        warn!(
            "prim: {} of {} nodes reachable from {:?}, returning a partial tree",
            covered,
            index.len(),
            start
        );
    }
    info!(
        "prim: {} edges selected from {:?}, total weight {}",
        result.len(),
        start,
        result.total_weight()
    );
    Ok(result)
}

/// Weight-ordered pool of candidate edges plus the edges waiting on a node
/// to join the tree.
struct Pool {
    heap: BinaryHeap<Reverse<(Weight, EdgeId)>>,
    parked: IndexVec<NodeId, Vec<(Weight, EdgeId)>>,
}

impl Pool {
    fn new(graph: &Graph, nodes: usize) -> Self {
        Self {
            heap: graph
                .edges_enumerated()
                .map(|(id, edge)| Reverse((edge.weight, id)))
                .collect(),
            parked: IndexVec::from_elem_n(Vec::new(), nodes),
        }
    }

    fn pop(&mut self) -> Option<(EdgeId, Weight)> {
        self.heap.pop().map(|Reverse((weight, id))| (id, weight))
    }

    fn park(&mut self, edge: EdgeId, weight: Weight, a: NodeId, b: NodeId) {
        self.parked[a].push((weight, edge));
        if a != b {
            self.parked[b].push((weight, edge));
        }
    }

    /// Returns the edges parked on `node` to the pool.
    fn release(&mut self, node: NodeId) {
        let waiting = std::mem::take(&mut self.parked[node]);
        self.heap.extend(waiting.into_iter().map(Reverse));
    }
}
