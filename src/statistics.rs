//! Replicate aggregation for banded lines and error bars.
//!
//! Replicates are stored row-wise: each row is one run of the same series and
//! every column is one x position. Aggregation is column-wise, and the
//! standard deviation is the population one (`ddof = 0`).

use ndarray::{Array1, Array2, Axis};

use crate::{HonenError, HonenResult};

/// Column-wise mean and standard deviation of a replicate matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicateSummary {
    /// Mean of every column.
    pub mean: Array1<f64>,
    /// Population standard deviation of every column.
    pub std: Array1<f64>,
}

impl ReplicateSummary {
    /// Number of points in the summarised series.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Returns true if the summary holds no points.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Lower edge of the ±1 std band.
    pub fn lower(&self) -> Array1<f64> {
        &self.mean - &self.std
    }

    /// Upper edge of the ±1 std band.
    pub fn upper(&self) -> Array1<f64> {
        &self.mean + &self.std
    }
}

/// Summarise `replicates`, requiring at least `min_rows` rows.
///
/// # Errors
/// [`HonenError::InsufficientReplicates`] if the matrix has fewer rows than
/// `min_rows` (or no rows at all).
pub fn summarize_replicates(
    replicates: &Array2<f64>,
    min_rows: usize,
) -> HonenResult<ReplicateSummary> {
    let rows = replicates.nrows();
    let required = min_rows.max(1);
    if rows < required {
        return Err(HonenError::InsufficientReplicates {
            required,
            found: rows,
        });
    }

    let mean = replicates
        .mean_axis(Axis(0))
        .ok_or(HonenError::InsufficientReplicates { required, found: 0 })?;
    let std = replicates.std_axis(Axis(0), 0.0);

    Ok(ReplicateSummary { mean, std })
}
