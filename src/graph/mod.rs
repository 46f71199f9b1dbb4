//! # 无向带权图模型
//!
//! 图 `G = (V, E)` 由追加式的边序列 `E` 与其端点并集 `V` 构成：
//!
//! * 每条边是无序标签对 `{a, b}` 加整数权重 `w`（可为零或负数）；
//! * 节点按标签去重，按首次出现顺序稳定枚举；不存在孤立节点；
//! * 允许自环与重复边，算法对其无需特殊处理；
//! * 节点到稠密下标 `[0, |V|)` 的映射 [`NodeIndex`] 每次运行时重新构建，不保存在图上。
//!
//! 提供 JSON/RON/TOML 序列化、Graphviz 导出以及 petgraph 视图。
//!
//! ## 示例
//!
//! ```rust
//! use spanning::graph::Graph;
//! use spanning::mst::{run_kruskal, run_prim};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("A", "C", 3).unwrap();
//!
//! let kruskal = run_kruskal(&graph);
//! let prim = run_prim(&graph).unwrap();
//! assert_eq!(kruskal.total_weight(), 3);
//! assert_eq!(prim.total_weight(), kruskal.total_weight());
//! ```

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod structure;

pub use core::{Graph, GraphError, GraphSummary, NodeIndex};
pub use ids::{EdgeId, NodeId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{Edge, TotalWeight, Weight};
