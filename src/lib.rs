//! Minimum spanning trees of undirected weighted graphs, by Kruskal's and
//! Prim's algorithms.

pub mod config;
pub mod graph;
pub mod input;
pub mod mst;
pub mod options;
pub mod report;

pub use graph::{Edge, Graph, GraphError, TotalWeight, Weight};
pub use mst::{Algorithm, MstError, MstResult, run_kruskal, run_prim, run_prim_from};
