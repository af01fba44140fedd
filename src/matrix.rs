use crate::{Error, Result};

// Rounds up to 2^63, the first f64 past i64::MAX.
const I64_UPPER: f64 = i64::MAX as f64;
const I64_LOWER: f64 = i64::MIN as f64;

/// Square, row-major matrix of pairwise distances.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    dimension: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting ragged or non-square input.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let dimension = rows.len();
        let mut values = Vec::with_capacity(dimension * dimension);

        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(Error::shape_mismatch(format!(
                    "distance matrix must be square; row {idx} has {} columns, expected {dimension}",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }

        Ok(Self { dimension, values })
    }

    /// Builds a `dimension x dimension` matrix from row-major values.
    pub fn from_flat(dimension: usize, values: Vec<f64>) -> Result<Self> {
        if dimension.checked_mul(dimension) != Some(values.len()) {
            return Err(Error::shape_mismatch(format!(
                "distance matrix of dimension {dimension} needs {} values, got {}",
                dimension.saturating_mul(dimension),
                values.len()
            )));
        }
        Ok(Self { dimension, values })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        self.values.get(row * self.dimension + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.dimension.max(1))
    }

    /// Smallest entry, or `None` for an empty matrix or one holding NaN.
    pub fn min(&self) -> Option<f64> {
        if self.values.iter().any(|value| value.is_nan()) {
            return None;
        }
        self.values.iter().copied().reduce(f64::min)
    }

    /// Row-major weights scaled by the global minimum and truncated toward zero.
    ///
    /// The minimum must be finite and strictly positive.
    pub fn normalized_weights(&self) -> Result<Vec<i64>> {
        let Some(min) = self.min() else {
            return Err(Error::invalid_matrix(
                "matrix is empty or contains NaN, so it has no minimum to normalize by",
            ));
        };
        if !min.is_finite() || min <= 0.0 {
            return Err(Error::invalid_matrix(format!(
                "minimum entry must be finite and greater than zero, got {min}"
            )));
        }
        if let Some(value) = self.values.iter().find(|value| !value.is_finite()) {
            return Err(Error::invalid_matrix(format!(
                "entries must be finite, got {value}"
            )));
        }

        self.values
            .iter()
            .map(|value| {
                let ratio = (value / min).trunc();
                if !ratio.is_finite() || ratio < I64_LOWER || ratio >= I64_UPPER {
                    return Err(Error::invalid_matrix(format!(
                        "entry {value} divided by minimum {min} does not fit an integer weight"
                    )));
                }
                Ok(ratio as i64)
            })
            .collect()
    }
}
