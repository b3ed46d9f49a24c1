use std::io::Read;
use std::str::FromStr;
use num_traits::Float;
use crate::point::Point;
use crate::EmstError;

/// Reads a point set: a point count followed by that many `x y` pairs, all separated by
/// arbitrary whitespace. Anything after the last expected pair is ignored.
///
/// # Examples
/// ```
///use emst::{read_points, Point};
///
///let points: Vec<Point<f64>> = read_points("2\n0 0\n3.5 -1\n".as_bytes()).unwrap();
///assert_eq!(vec![Point::new(0.0, 0.0), Point::new(3.5, -1.0)], points);
/// ```
pub fn read_points<T, R>(mut reader: R) -> Result<Vec<Point<T>>, EmstError>
where
    T: Float + FromStr,
    R: Read,
{
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_points(&contents)
}

pub(crate) fn parse_points<T: Float + FromStr>(contents: &str) -> Result<Vec<Point<T>>, EmstError> {
    let mut tokens = contents.split_whitespace();
    let count_token = tokens.next().ok_or(EmstError::MissingPointCount)?;
    let n_points = count_token
        .parse::<usize>()
        .map_err(|_| EmstError::InvalidPointCount(count_token.to_string()))?;

    // The count is untrusted, so it only hints as far as the text could possibly hold
    let mut points = Vec::with_capacity(n_points.min(contents.len() / 2));
    while points.len() < n_points {
        let (x, y) = match (tokens.next(), tokens.next()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(EmstError::TruncatedInput { expected: n_points, found: points.len() })
            }
        };
        let n = points.len();
        points.push(Point::new(parse_coordinate(x, n)?, parse_coordinate(y, n)?));
    }
    Ok(points)
}

fn parse_coordinate<T: Float + FromStr>(token: &str, n: usize) -> Result<T, EmstError> {
    let value = token
        .parse::<T>()
        .map_err(|_| EmstError::InvalidCoordinate(format!("'{token}' in {n}th point")))?;
    if !value.is_finite() {
        return Err(EmstError::NonFiniteCoordinate(format!("'{token}' in {n}th point")));
    }
    Ok(value)
}
