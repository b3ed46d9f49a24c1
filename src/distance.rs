use num_traits::Float;
use crate::point::Point;

pub(crate) fn euclidean_distance<T: Float>(a: &Point<T>, b: &Point<T>) -> T {
    [(a.x, b.x), (a.y, b.y)]
        .iter()
        .map(|&(p, q)| (p - q) * (p - q))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}
