use crate::point::Point;
use crate::EmstError;
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Point<T>],
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Point<T>]) -> Self {
        Self { data }
    }

    /// An empty point set is valid and yields an empty tree.
    pub(crate) fn validate_input_data(&self) -> Result<(), EmstError> {
        for (n, point) in self.data.iter().enumerate() {
            if !point.is_finite() {
                return Err(EmstError::NonFiniteCoordinate(format!(
                    "{n}th point contains non-finite coordinate(s)"
                )));
            }
        }
        Ok(())
    }
}
