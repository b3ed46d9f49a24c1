use num_traits::Float;
use crate::forest::Components;
use crate::point::{Arc, Vertex, WeightedArc};
use crate::subtree::Subtree;

/// Disjoint sets over vertex ids with path compression and union by rank.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    min_id: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n_samples: usize) -> Self {
        let parent = (0..n_samples).collect();
        let rank = vec![0; n_samples];
        let min_id = (0..n_samples).collect();
        UnionFind { parent, rank, min_id }
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Joins the sets rooted at `m` and `n`, both of which must be roots. Returns the new root.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> usize {
        let (root, child) = match self.rank[m].cmp(&self.rank[n]) {
            std::cmp::Ordering::Less => (n, m),
            std::cmp::Ordering::Greater => (m, n),
            std::cmp::Ordering::Equal => {
                self.rank[m] += 1;
                (m, n)
            }
        };
        self.parent[child] = root;
        self.min_id[root] = self.min_id[root].min(self.min_id[child]);
        root
    }

    /// The smallest member id of the set rooted at `n`.
    pub(crate) fn min_id_of(&self, n: usize) -> usize {
        self.min_id[n]
    }
}

/// Kruskal components backed by a union-find. Each root owns the subtree of its set; when two
/// sets join, the subtree with the smaller member id absorbs the other, which reproduces the
/// arc order of the flat forest.
pub(crate) struct DisjointForest<T> {
    union_find: UnionFind,
    subtrees: Vec<Option<Subtree<T>>>,
    n_components: usize,
}

impl<T: Float> DisjointForest<T> {
    pub(crate) fn new(vertices: &[Vertex<T>]) -> Self {
        let subtrees = vertices.iter().map(|&vertex| Some(Subtree::singleton(vertex))).collect();
        DisjointForest {
            union_find: UnionFind::new(vertices.len()),
            subtrees,
            n_components: vertices.len(),
        }
    }
}

impl<T: Float> Components<T> for DisjointForest<T> {
    fn try_merge(&mut self, weighted_arc: &WeightedArc<T>) -> bool {
        let source_root = self.union_find.find(weighted_arc.arc.source.id);
        let target_root = self.union_find.find(weighted_arc.arc.target.id);
        if source_root == target_root {
            return false;
        }

        let (keep, absorb) =
            if self.union_find.min_id_of(source_root) < self.union_find.min_id_of(target_root) {
                (source_root, target_root)
            } else {
                (target_root, source_root)
            };
        let (mut kept, absorbed) = match (self.subtrees[keep].take(), self.subtrees[absorb].take()) {
            (Some(kept), Some(absorbed)) => (kept, absorbed),
            _ => unreachable!("every union-find root owns a subtree"),
        };
        kept.merge(absorbed, weighted_arc);

        let root = self.union_find.union(source_root, target_root);
        self.subtrees[root] = Some(kept);
        self.n_components -= 1;
        true
    }

    fn n_components(&self) -> usize {
        self.n_components
    }

    fn into_tree(mut self) -> (Vec<Arc<T>>, T) {
        if self.subtrees.is_empty() {
            return (Vec::new(), T::zero());
        }
        let root = self.union_find.find(0);
        self.subtrees[root]
            .take()
            .map(Subtree::into_arcs)
            .unwrap_or_else(|| (Vec::new(), T::zero()))
    }
}
