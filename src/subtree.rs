use num_traits::Float;
use crate::point::{Arc, Point, Vertex, WeightedArc};

/// A connected component under construction: its member vertices, the arcs joining them and
/// the accumulated weight of those arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtree<T> {
    members: Vec<Vertex<T>>,
    arcs: Vec<Arc<T>>,
    cost: T,
}

impl<T: Float> Subtree<T> {
    pub fn new() -> Self {
        Subtree { members: Vec::new(), arcs: Vec::new(), cost: T::zero() }
    }

    /// A subtree holding a single isolated vertex.
    pub fn singleton(vertex: Vertex<T>) -> Self {
        let mut subtree = Subtree::new();
        subtree.add_point(vertex);
        subtree
    }

    /// Inserts the vertex into the member set. Does nothing if it is already a member.
    pub fn add_point(&mut self, vertex: Vertex<T>) {
        if !self.contains(&vertex) {
            self.members.push(vertex);
        }
    }

    /// Appends the arc and inserts both of its endpoints into the member set. The cost is not
    /// touched; only `merge` accumulates weight.
    pub fn add_arc(&mut self, arc: Arc<T>) {
        self.add_point(arc.source);
        self.add_point(arc.target);
        self.arcs.push(arc);
    }

    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.members.iter().any(|member| member == vertex)
    }

    /// Membership by exact coordinate equality, regardless of which input position the
    /// point came from.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        self.members.iter().any(|member| member.point == *point)
    }

    /// Absorbs `other` through the connecting arc. The caller guarantees both subtrees are
    /// disjoint; merging a subtree with a copy of itself yields a meaningless result.
    pub fn merge(&mut self, other: Subtree<T>, connection: &WeightedArc<T>) {
        let Subtree { members, arcs, cost } = other;
        self.arcs.extend(arcs);
        self.arcs.push(connection.arc);
        for vertex in members {
            self.add_point(vertex);
        }
        self.cost = self.cost + connection.weight + cost;
    }

    pub fn get_arcs(&self) -> &[Arc<T>] {
        &self.arcs
    }

    pub fn get_cost(&self) -> T {
        self.cost
    }

    pub(crate) fn into_arcs(self) -> (Vec<Arc<T>>, T) {
        (self.arcs, self.cost)
    }
}

impl<T: Float> Default for Subtree<T> {
    fn default() -> Self {
        Subtree::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(id: usize, x: f64, y: f64) -> Vertex<f64> {
        Vertex::new(id, Point::new(x, y))
    }

    #[test]
    fn add_point_is_idempotent() {
        let mut subtree = Subtree::singleton(vertex(0, 1.0, 2.0));
        subtree.add_point(vertex(0, 1.0, 2.0));
        assert_eq!(1, subtree.members.len());
        assert!(subtree.get_arcs().is_empty());
        assert_eq!(0.0, subtree.get_cost());
    }

    #[test]
    fn add_arc_inserts_endpoints() {
        let mut subtree = Subtree::new();
        subtree.add_arc(Arc::new(vertex(0, 0.0, 0.0), vertex(1, 3.0, 4.0)));
        assert_eq!(2, subtree.members.len());
        assert!(subtree.contains(&vertex(1, 3.0, 4.0)));
        assert!(subtree.contains_point(&Point::new(0.0, 0.0)));
        assert!(!subtree.contains_point(&Point::new(4.0, 3.0)));
        assert_eq!(0.0, subtree.get_cost());
    }

    #[test]
    fn contains_distinguishes_coincident_vertices() {
        let subtree = Subtree::singleton(vertex(0, 1.0, 1.0));
        assert!(!subtree.contains(&vertex(1, 1.0, 1.0)));
        assert!(subtree.contains_point(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn merge_accumulates_arcs_and_cost() {
        let a = vertex(0, 0.0, 0.0);
        let b = vertex(1, 3.0, 0.0);
        let c = vertex(2, 3.0, 4.0);
        let d = vertex(3, 3.0, 6.0);

        let mut left = Subtree::singleton(a);
        left.merge(Subtree::singleton(b), &WeightedArc::new(Arc::new(a, b)));
        let mut right = Subtree::singleton(c);
        right.merge(Subtree::singleton(d), &WeightedArc::new(Arc::new(c, d)));

        left.merge(right, &WeightedArc::new(Arc::new(b, c)));

        assert_eq!(4, left.members.len());
        assert_eq!(
            vec![Arc::new(a, b), Arc::new(c, d), Arc::new(b, c)],
            left.get_arcs().to_vec()
        );
        assert_eq!(3.0 + 2.0 + 4.0, left.get_cost());
    }
}
