use log::{error, trace};
use num_traits::Float;
use crate::point::{Arc, Vertex, WeightedArc};
use crate::subtree::Subtree;

/// The disjoint components of a Kruskal pass. Both implementations must accept and reject the
/// same arcs and build the same arc lists.
pub(crate) trait Components<T> {
    /// Joins the components holding the arc's endpoints. Returns false, leaving the forest
    /// untouched, if both endpoints already share a component.
    fn try_merge(&mut self, weighted_arc: &WeightedArc<T>) -> bool;

    fn n_components(&self) -> usize;

    /// The arcs and accumulated cost of the first component.
    fn into_tree(self) -> (Vec<Arc<T>>, T);
}

/// A flat list of subtrees, searched linearly. Merging always keeps the subtree at the lower
/// index and removes the higher one, so the list stays ordered by smallest vertex id.
pub(crate) struct Forest<T> {
    subtrees: Vec<Subtree<T>>,
}

impl<T: Float> Forest<T> {
    pub(crate) fn new(vertices: &[Vertex<T>]) -> Self {
        let subtrees = vertices.iter().map(|&vertex| Subtree::singleton(vertex)).collect();
        Forest { subtrees }
    }

    /// Indices of the subtrees holding each endpoint of the arc. First match wins.
    fn find_incident_subtrees(&self, arc: &Arc<T>) -> (Option<usize>, Option<usize>) {
        let mut source = None;
        let mut target = None;
        for (idx, subtree) in self.subtrees.iter().enumerate() {
            if source.is_none() && subtree.contains(&arc.source) {
                source = Some(idx);
            }
            if target.is_none() && subtree.contains(&arc.target) {
                target = Some(idx);
            }
            if source.is_some() && target.is_some() {
                break;
            }
        }
        (source, target)
    }

    fn merge_subtrees(&mut self, i: usize, j: usize, weighted_arc: &WeightedArc<T>) {
        let (low, high) = if i < j { (i, j) } else { (j, i) };
        let absorbed = self.subtrees.remove(high);
        self.subtrees[low].merge(absorbed, weighted_arc);
    }
}

impl<T: Float> Components<T> for Forest<T> {
    fn try_merge(&mut self, weighted_arc: &WeightedArc<T>) -> bool {
        let (source, target) = self.find_incident_subtrees(&weighted_arc.arc);
        debug_assert!(source.is_some() && target.is_some(), "arc endpoint missing from forest");
        let (Some(i), Some(j)) = (source, target) else {
            error!(
                "Arc endpoint missing from the forest, skipping {} -- {}",
                weighted_arc.arc.source.id,
                weighted_arc.arc.target.id
            );
            return false;
        };
        if i == j {
            trace!("Skipping arc within subtree {i}");
            return false;
        }
        self.merge_subtrees(i, j, weighted_arc);
        true
    }

    fn n_components(&self) -> usize {
        self.subtrees.len()
    }

    fn into_tree(self) -> (Vec<Arc<T>>, T) {
        self.subtrees
            .into_iter()
            .next()
            .map(Subtree::into_arcs)
            .unwrap_or_else(|| (Vec::new(), T::zero()))
    }
}
