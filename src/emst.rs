use crate::forest::{Components, Forest};
use crate::output::compute_cost;
use crate::point::{Arc, Point, Vertex, WeightedArc};
use crate::union_find::DisjointForest;
use crate::validation::DataValidator;
use crate::{EmstError, EmstParams, ForestAlgorithm};
use log::{debug, warn};
use num_traits::Float;

/// Euclidean minimum spanning tree construction over a set of planar points, using Kruskal's
/// algorithm on the complete graph. Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Emst<'a, T> {
    data: &'a [Point<T>],
    params: EmstParams,
}

impl<'a, T: Float> Emst<'a, T> {
    /// Creates an EMST model using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the points to span. Coordinates must be finite.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The EMST model instance.
    ///
    /// # Examples
    /// ```
    ///use emst::{Emst, EmstParams, ForestAlgorithm, Point};
    ///
    ///let data = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    ///let params = EmstParams::builder()
    ///    .forest_algorithm(ForestAlgorithm::UnionFind)
    ///    .build();
    ///let emst = Emst::new(&data, params);
    /// ```
    pub fn new(data: &'a [Point<T>], params: EmstParams) -> Self {
        Emst { data, params }
    }

    /// Creates an EMST model using the default parameters.
    pub fn default_params(data: &'a [Point<T>]) -> Self {
        Emst::new(data, EmstParams::default())
    }

    /// Computes the minimum spanning tree of the points passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the spanning tree: `n - 1` arcs for `n` input
    ///   points (none for zero or one point) and their total Euclidean length. An error is
    ///   returned if any coordinate is not finite.
    ///
    /// # Examples
    /// ```
    ///use emst::{Emst, Point};
    ///
    ///let data = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    ///let tree = Emst::default_params(&data).compute().unwrap();
    ///assert_eq!(2, tree.arcs().len());
    ///assert_eq!(7.0, tree.cost());
    /// ```
    pub fn compute(&self) -> Result<SpanningTree<T>, EmstError> {
        DataValidator::new(self.data).validate_input_data()?;
        let vertices = self.vertices();
        let candidates = self.sorted_candidate_arcs(&vertices);

        let (arcs, accumulated_cost) = match self.params.forest_algorithm {
            ForestAlgorithm::LinearScan => self.kruskal(Forest::new(&vertices), &candidates),
            ForestAlgorithm::UnionFind => {
                self.kruskal(DisjointForest::new(&vertices), &candidates)
            }
        };

        let tree = SpanningTree::new(self.data.to_vec(), arcs, accumulated_cost);
        if self.params.check_cost {
            self.check_cost(&tree);
        }
        Ok(tree)
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        self.data
            .iter()
            .enumerate()
            .map(|(id, &point)| Vertex::new(id, point))
            .collect()
    }

    /// Every unordered pair of vertices, lightest first.
    fn sorted_candidate_arcs(&self, vertices: &[Vertex<T>]) -> Vec<WeightedArc<T>> {
        let n_samples = vertices.len();
        let mut candidates = Vec::with_capacity(n_samples * n_samples.saturating_sub(1) / 2);
        for (i, &source) in vertices.iter().enumerate() {
            for &target in &vertices[i + 1..] {
                candidates.push(WeightedArc::new(Arc::new(source, target)));
            }
        }
        candidates.sort_by(|a, b| a.cmp_by_weight(b));
        debug!("Generated {} candidate arcs for {n_samples} points", candidates.len());
        candidates
    }

    /// The merge pass. Each decision depends on every merge before it, so this stays
    /// sequential whatever the component structure.
    fn kruskal<C: Components<T>>(
        &self,
        mut components: C,
        candidates: &[WeightedArc<T>],
    ) -> (Vec<Arc<T>>, T) {
        let mut n_merges = 0;
        for weighted_arc in candidates {
            if components.n_components() <= 1 {
                break;
            }
            if components.try_merge(weighted_arc) {
                n_merges += 1;
            }
        }
        debug!(
            "Merged {n_merges} times, {} component(s) left",
            components.n_components()
        );
        components.into_tree()
    }

    fn check_cost(&self, tree: &SpanningTree<T>) {
        if !tree.costs_agree(self.params.cost_tolerance) {
            warn!(
                "Accumulated cost {:?} differs from recomputed cost {:?}",
                tree.accumulated_cost().to_f64(),
                tree.cost().to_f64()
            );
        }
    }
}

/// Computes the minimum spanning tree of `points` with the default parameters.
///
/// # Returns
/// * The arcs of the tree and its total length.
pub fn compute_emst<T: Float>(points: &[Point<T>]) -> Result<(Vec<Arc<T>>, T), EmstError> {
    let tree = Emst::default_params(points).compute()?;
    let cost = tree.cost();
    Ok((tree.into_arcs(), cost))
}

/// The result of an EMST computation: the spanned points and the arcs of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    points: Vec<Point<T>>,
    arcs: Vec<Arc<T>>,
    accumulated_cost: T,
}

impl<T: Float> SpanningTree<T> {
    pub(crate) fn new(points: Vec<Point<T>>, arcs: Vec<Arc<T>>, accumulated_cost: T) -> Self {
        SpanningTree { points, arcs, accumulated_cost }
    }

    /// The input points, in input order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn arcs(&self) -> &[Arc<T>] {
        &self.arcs
    }

    /// Total length of the tree, summed from its arcs.
    pub fn cost(&self) -> T {
        compute_cost(&self.arcs)
    }

    /// The cost accumulated while merging subtrees. Only useful as a cross-check against
    /// `cost`.
    pub fn accumulated_cost(&self) -> T {
        self.accumulated_cost
    }

    /// Whether `accumulated_cost` and `cost` agree within `tolerance`, relative to the cost
    /// (absolute below a cost of one). Both add the same lengths in a different order.
    pub fn costs_agree(&self, tolerance: f64) -> bool {
        let recomputed = self.cost();
        let tolerance = T::from(tolerance).unwrap_or_else(T::epsilon);
        (self.accumulated_cost - recomputed).abs() <= tolerance * recomputed.abs().max(T::one())
    }

    pub fn into_arcs(self) -> Vec<Arc<T>> {
        self.arcs
    }
}
