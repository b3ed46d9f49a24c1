use std::io::Write;
use num_traits::Float;
use crate::point::{Arc, Point};
use crate::{EmstError, SpanningTree};

const COORDINATE_WIDTH_DEFAULT: usize = 3;
const COORDINATE_PRECISION_DEFAULT: usize = 0;
const COST_PRECISION_DEFAULT: usize = 2;

/// Sums the Euclidean length of every arc. This, not the cost accumulated while merging, is the
/// reported total of a tree.
pub fn compute_cost<T: Float>(arcs: &[Arc<T>]) -> T {
    arcs.iter()
        .map(Arc::length)
        .fold(T::zero(), std::ops::Add::add)
}

/// Fixed-width layout of the textual tree output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFormat {
    coordinate_width: usize,
    coordinate_precision: usize,
    cost_precision: usize,
}

/// Builder object to set a custom output layout.
pub struct TreeFormatBuilder {
    coordinate_width: Option<usize>,
    coordinate_precision: Option<usize>,
    cost_precision: Option<usize>,
}

impl TreeFormat {
    pub fn builder() -> TreeFormatBuilder {
        TreeFormatBuilder {
            coordinate_width: None,
            coordinate_precision: None,
            cost_precision: None,
        }
    }

    fn coordinate<T: Float>(&self, value: T) -> String {
        format!(
            "{:>width$.prec$}",
            value.to_f64().unwrap_or(f64::NAN),
            width = self.coordinate_width,
            prec = self.coordinate_precision
        )
    }

    fn point<T: Float>(&self, point: &Point<T>, separator: &str) -> String {
        format!("{}{separator}{}", self.coordinate(point.x), self.coordinate(point.y))
    }
}

impl Default for TreeFormat {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TreeFormatBuilder {
    /// Minimum width each coordinate is right-aligned to. Defaults to 3.
    pub fn coordinate_width(mut self, coordinate_width: usize) -> TreeFormatBuilder {
        self.coordinate_width = Some(coordinate_width);
        self
    }

    /// Number of decimals printed per coordinate. Defaults to 0.
    pub fn coordinate_precision(mut self, coordinate_precision: usize) -> TreeFormatBuilder {
        self.coordinate_precision = Some(coordinate_precision);
        self
    }

    /// Number of decimals of the total cost line. Defaults to 2.
    pub fn cost_precision(mut self, cost_precision: usize) -> TreeFormatBuilder {
        self.cost_precision = Some(cost_precision);
        self
    }

    pub fn build(self) -> TreeFormat {
        TreeFormat {
            coordinate_width: self.coordinate_width.unwrap_or(COORDINATE_WIDTH_DEFAULT),
            coordinate_precision: self.coordinate_precision.unwrap_or(COORDINATE_PRECISION_DEFAULT),
            cost_precision: self.cost_precision.unwrap_or(COST_PRECISION_DEFAULT),
        }
    }
}

/// Writes one `(x1, y1) -> (x2, y2)` line per arc, followed by the total cost.
pub fn write_tree<T: Float, W: Write>(
    writer: &mut W,
    tree: &SpanningTree<T>,
    format: &TreeFormat,
) -> Result<(), EmstError> {
    for arc in tree.arcs() {
        let (source, target) = arc.points();
        writeln!(
            writer,
            "({}) -> ({})",
            format.point(&source, ", "),
            format.point(&target, ", ")
        )?;
    }
    writeln!(
        writer,
        "{:.prec$}",
        tree.cost().to_f64().unwrap_or(f64::NAN),
        prec = format.cost_precision
    )?;
    Ok(())
}

/// Writes the point count, then one tab separated point per line. The output can be read back
/// by `read_points` when the format keeps enough decimals.
pub fn write_points<T: Float, W: Write>(
    writer: &mut W,
    points: &[Point<T>],
    format: &TreeFormat,
) -> Result<(), EmstError> {
    writeln!(writer, "{}", points.len())?;
    for point in points {
        writeln!(writer, "{}", format.point(point, "\t"))?;
    }
    Ok(())
}

/// Writes a Graphviz document pinning every point at its coordinates and joining the tree's
/// arcs. Nodes are named by input position. Render with `neato -n`.
pub fn write_dot<T: Float, W: Write>(
    writer: &mut W,
    points: &[Point<T>],
    arcs: &[Arc<T>],
) -> Result<(), EmstError> {
    writeln!(writer, "graph{{ ")?;
    writeln!(writer)?;
    for (n, point) in points.iter().enumerate() {
        writeln!(
            writer,
            " {n} [pos = \"{},{}!\"]",
            point.x.to_f64().unwrap_or(f64::NAN),
            point.y.to_f64().unwrap_or(f64::NAN)
        )?;
    }
    writeln!(writer)?;
    for arc in arcs {
        writeln!(writer, " {} -- {}", arc.source.id, arc.target.id)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}
