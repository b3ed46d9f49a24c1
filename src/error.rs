use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with EMST input data, either when reading points
/// from text or when handing them to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EmstError {
    NonFiniteCoordinate(String),
    MissingPointCount,
    InvalidPointCount(String),
    InvalidCoordinate(String),
    TruncatedInput { expected: usize, found: usize },
    Io(String),
}

impl Error for EmstError {}

impl Display for EmstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            EmstError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
            EmstError::MissingPointCount => String::from("The input does not start with a point count"),
            EmstError::InvalidPointCount(token) =>
                format!("The point count must be a non-negative integer, got '{token}'"),
            EmstError::InvalidCoordinate(msg) => format!("Invalid coordinate: {msg}"),
            EmstError::TruncatedInput { expected, found } =>
                format!("Expected {expected} points but the input only holds {found}"),
            EmstError::Io(msg) => format!("I/O failure: {msg}"),
        };
        write!(f, "{message}")
    }
}

impl From<std::io::Error> for EmstError {
    fn from(err: std::io::Error) -> Self {
        EmstError::Io(err.to_string())
    }
}
