use std::path::Path;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("invalid {field} {given:?}; must be one of {expected}")]
    InvalidMetric {
        field: &'static str,
        given: String,
        expected: String,
    },
    #[error("invalid value {given:?} for {field}; expected one of {expected}")]
    InvalidValue {
        field: &'static str,
        given: String,
        expected: String,
    },
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    #[error("file {origin} has no valid TOUR_SECTION")]
    MissingTour { origin: String },
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch(message.into())
    }

    pub fn invalid_metric(field: &'static str, given: &str, expected: &[&str]) -> Self {
        Self::InvalidMetric {
            field,
            given: given.to_string(),
            expected: expected.join(", "),
        }
    }

    pub fn invalid_value(field: &'static str, given: &str, expected: &[&str]) -> Self {
        Self::InvalidValue {
            field,
            given: given.to_string(),
            expected: expected.join(", "),
        }
    }

    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    pub fn missing_tour(origin: &Path) -> Self {
        Self::MissingTour {
            origin: origin.display().to_string(),
        }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
