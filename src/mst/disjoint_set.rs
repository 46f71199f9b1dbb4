//! Union-find over a fixed universe of typed ids, with path compression and
//! union by rank.
use crate::graph::index_vec::{Idx, IndexVec};

#[derive(Debug, Clone)]
pub struct DisjointSet<I: Idx> {
    parent: IndexVec<I, I>,
    rank: IndexVec<I, u32>,
    sets: usize,
}

impl<I: Idx> DisjointSet<I> {
    /// `n` singleton sets, ids `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(I::from_usize).collect(),
            rank: IndexVec::from_elem_n(0, n),
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of `x`'s set. Every node visited on the way is
    /// re-parented directly under the representative.
    ///
    /// # Panics
    /// If `x` is outside `0..len()`.
    pub fn find(&mut self, x: I) -> I {
        let parent = self.parent[x];
        if parent != x {
            let root = self.find(parent);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merges the sets of `x` and `y`. Returns `false`, leaving ranks as they
    /// were, when both already share a representative.
    ///
    /// On equal ranks `y`'s root goes under `x`'s root.
    pub fn union(&mut self, x: I, y: I) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, x: I, y: I) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn rank(&self, x: I) -> u32 {
        self.rank[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ids::NodeId;

    fn id(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn starts_as_singletons() {
        let mut sets = DisjointSet::<NodeId>::new(4);

        assert_eq!(sets.len(), 4);
        assert_eq!(sets.set_count(), 4);
        for raw in 0..4 {
            assert_eq!(sets.find(id(raw)), id(raw));
        }
        assert!(!sets.same_set(id(0), id(1)));
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = DisjointSet::<NodeId>::new(10);

        assert!(sets.union(id(0), id(1)));
        assert!(sets.union(id(1), id(2)));
        assert!(sets.union(id(2), id(3)));
        assert!(!sets.union(id(0), id(2)));
        assert!(sets.union(id(4), id(5)));
        assert!(sets.union(id(5), id(6)));

        assert!(sets.same_set(id(0), id(3)));
        assert!(sets.same_set(id(4), id(6)));
        assert!(!sets.same_set(id(3), id(4)));
        assert!(!sets.same_set(id(7), id(8)));
        assert_eq!(sets.set_count(), 5);

        assert!(sets.union(id(3), id(6)));
        assert!(sets.same_set(id(0), id(5)));
        assert_eq!(sets.set_count(), 4);
    }

    #[test]
    fn rank_tie_keeps_first_root_and_grows_it() {
        let mut sets = DisjointSet::<NodeId>::new(4);

        assert!(sets.union(id(0), id(1)));
        assert_eq!(sets.find(id(1)), id(0));
        assert_eq!(sets.rank(id(0)), 1);

        assert!(sets.union(id(2), id(3)));
        assert!(sets.union(id(3), id(1)));
        assert_eq!(sets.find(id(0)), id(2));
        assert_eq!(sets.rank(id(2)), 2);
    }

    #[test]
    fn lower_rank_root_goes_under_higher() {
        let mut sets = DisjointSet::<NodeId>::new(3);

        sets.union(id(0), id(1));
        assert!(sets.union(id(2), id(1)));
        assert_eq!(sets.find(id(2)), id(0));
        assert_eq!(sets.rank(id(0)), 1);
        assert_eq!(sets.rank(id(2)), 0);
    }

    #[test]
    fn redundant_union_leaves_rank_alone() {
        let mut sets = DisjointSet::<NodeId>::new(2);

        sets.union(id(0), id(1));
        let before = (sets.rank(id(0)), sets.rank(id(1)));
        assert!(!sets.union(id(1), id(0)));
        assert!(!sets.union(id(0), id(0)));
        assert_eq!((sets.rank(id(0)), sets.rank(id(1))), before);
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = DisjointSet::<NodeId>::new(4);

        sets.union(id(0), id(1));
        sets.union(id(2), id(3));
        sets.union(id(0), id(2));
        // 3 -> 2 -> 0 before the lookup
        assert_eq!(sets.find(id(3)), id(0));
        assert_eq!(sets.parent[id(3)], id(0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_find_panics() {
        let mut sets = DisjointSet::<NodeId>::new(2);
        sets.find(id(2));
    }
}
