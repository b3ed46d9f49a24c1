//! Euclidean minimum spanning trees ("EMST") of planar point sets in Rust. Generic over floating
//! point numeric types.
//!
//! The EMST of a set of points is the tree of straight line arcs that connects every point with
//! the smallest possible total length. This crate builds it with an adapted Kruskal's algorithm:
//!  1. Every pair of points is a candidate arc, weighted by its Euclidean length;
//!  2. Candidates are sorted by weight, ties broken by the coordinates of their endpoints so the
//!     output is reproducible; and
//!  3. Starting from one single-point subtree per input point, each candidate in turn merges the
//!     two subtrees holding its endpoints, unless they already are the same subtree.
//!
//! Generating all pairs is quadratic in the number of points, so this is meant for small to
//! moderately sized inputs. Two component tracking strategies are available through
//! [`ForestAlgorithm`], and both produce exactly the same tree.
//!
//! Coincident input points are kept apart: every point is identified by its position in the
//! input, so `n` points always give `n - 1` arcs, some of which may have zero length.
//!
//! # Examples
//! ```
//!use emst::{Emst, Point};
//!
//!let data: Vec<Point<f64>> = vec![
//!    Point::new(0.0, 0.0),
//!    Point::new(3.0, 0.0),
//!    Point::new(3.0, 4.0),
//!];
//!let tree = Emst::default_params(&data).compute().unwrap();
//!let lengths = tree.arcs().iter().map(|arc| arc.length()).collect::<Vec<_>>();
//!assert_eq!(vec![3.0, 4.0], lengths);
//!assert_eq!(7.0, tree.cost());
//! ```
//!
//! # References
//! * [Kruskal, J. B. On the shortest spanning subtree of a graph and the traveling salesman problem.](https://doi.org/10.1090/S0002-9939-1956-0078686-7)

pub use crate::emst::{compute_emst, Emst, SpanningTree};
pub use crate::error::EmstError;
pub use crate::input::read_points;
pub use crate::output::{compute_cost, write_dot, write_points, write_tree, TreeFormat, TreeFormatBuilder};
pub use crate::params::{EmstParams, EmstParamsBuilder, ForestAlgorithm};
pub use crate::point::{Arc, Point, Vertex, WeightedArc};
pub use crate::subtree::Subtree;

mod distance;
mod emst;
mod error;
mod forest;
mod input;
mod output;
mod params;
mod point;
mod subtree;
mod union_find;
mod validation;
