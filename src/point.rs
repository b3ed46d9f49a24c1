use std::cmp::Ordering;
use num_traits::Float;
use crate::distance;

/// A point in the plane. Two points are equal only if their coordinates are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

/// A point together with its position in the input sequence. Coincident input points are
/// still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T> {
    pub id: usize,
    pub point: Point<T>,
}

impl<T: Float> Vertex<T> {
    pub fn new(id: usize, point: Point<T>) -> Self {
        Vertex { id, point }
    }
}

/// An undirected edge of the tree, joining two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc<T> {
    pub source: Vertex<T>,
    pub target: Vertex<T>,
}

impl<T: Float> Arc<T> {
    pub fn new(source: Vertex<T>, target: Vertex<T>) -> Self {
        Arc { source, target }
    }

    /// The coordinates of both endpoints, in insertion order.
    pub fn points(&self) -> (Point<T>, Point<T>) {
        (self.source.point, self.target.point)
    }

    /// The Euclidean length of the arc.
    pub fn length(&self) -> T {
        distance::euclidean_distance(&self.source.point, &self.target.point)
    }

    /// Orders arcs by their endpoint coordinates, falling back on input positions so that
    /// arcs between coincident points still have a fixed order.
    pub(crate) fn cmp_endpoints(&self, other: &Self) -> Ordering {
        cmp_points(&self.source.point, &other.source.point)
            .then_with(|| cmp_points(&self.target.point, &other.target.point))
            .then_with(|| self.source.id.cmp(&other.source.id))
            .then_with(|| self.target.id.cmp(&other.target.id))
    }
}

/// An arc annotated with its Euclidean length, used as the selection key in Kruskal's algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedArc<T> {
    pub weight: T,
    pub arc: Arc<T>,
}

impl<T: Float> WeightedArc<T> {
    pub fn new(arc: Arc<T>) -> Self {
        WeightedArc { weight: arc.length(), arc }
    }

    /// Lexicographic order on (weight, arc). Weights and coordinates are validated as finite
    /// before any comparison is made.
    pub(crate) fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .expect("Invalid floats")
            .then_with(|| self.arc.cmp_endpoints(&other.arc))
    }
}

fn cmp_points<T: Float>(a: &Point<T>, b: &Point<T>) -> Ordering {
    a.partial_cmp(b).expect("Invalid floats")
}
