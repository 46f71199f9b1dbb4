//! 图的静态结构元素：权重与无向边。
use std::fmt;

use serde::{Deserialize, Serialize};

/// Edge weight. Zero and negative weights are accepted.
pub type Weight = i64;

/// Sum of edge weights. Wide enough that no sum of `Weight`s over a graph
/// that fits in memory can overflow.
pub type TotalWeight = i128;

/// An undirected weighted edge between two node labels.
///
/// Edges are plain values: two edges with the same endpoints and weight are
/// indistinguishable, and a graph may hold any number of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: Weight) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Endpoints in lexical order, so `A-B` and `B-A` compare equal.
    pub fn unordered_pair(&self) -> (&str, &str) {
        if self.a <= self.b {
            (self.a.as_str(), self.b.as_str())
        } else {
            (self.b.as_str(), self.a.as_str())
        }
    }

    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (Weight: {})", self.a, self.b, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_ignores_direction() {
        let forward = Edge::new("A", "B", 4);
        let backward = Edge::new("B", "A", 4);

        assert_eq!(forward.unordered_pair(), backward.unordered_pair());
        assert!(backward.connects("A", "B"));
        assert!(!forward.is_self_loop());
        assert_eq!(forward.to_string(), "A - B (Weight: 4)");
    }
}
