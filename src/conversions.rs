//! # Numeric Input Conversions
//!
//! Plotting calls accept many array-like shapes: plain vectors, slices, fixed
//! arrays, integer ranges and `ndarray` arrays of any primitive numeric type.
//! This module funnels all of them into the two representations the figure
//! builder works with internally:
//!
//! - [`IntoSeries`]: a single series, converted to `Array1<f64>`
//! - [`IntoReplicates`]: a replicates x points matrix, converted to `Array2<f64>`
//!
//! ```rust
//! use honen::{IntoReplicates, IntoSeries};
//! use ndarray::array;
//!
//! # fn example() -> honen::HonenResult<()> {
//! let from_ints = vec![1i32, 2, 3].into_series()?;
//! let from_range = (0..3usize).into_series()?;
//! let from_array = array![0.5f32, 1.5, 2.5].into_series()?;
//! assert_eq!(from_ints.len(), from_range.len());
//! assert_eq!(from_array.len(), 3);
//!
//! let runs = vec![vec![1.0, 2.0], vec![3.0, 4.0]].into_replicates()?;
//! assert_eq!(runs.dim(), (2, 2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//! Conversions return [`HonenResult`]. A value whose `to_f64` yields `None`
//! becomes [`HonenError::NonNumeric`]; ragged replicate rows become
//! [`HonenError::LengthMismatch`].

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use num_traits::ToPrimitive;

use crate::{HonenError, HonenResult};

/// Conversion of a one-dimensional array-like into an `f64` series.
pub trait IntoSeries {
    /// Consume the input and produce a uniform numeric series.
    fn into_series(self) -> HonenResult<Array1<f64>>;
}

/// Conversion of a two-dimensional array-like into a replicates x points matrix.
pub trait IntoReplicates {
    /// Consume the input and produce a matrix whose rows are replicates.
    fn into_replicates(self) -> HonenResult<Array2<f64>>;
}

/// Fail unless an x series and a y series have the same length.
pub fn length_check(x_len: usize, y_len: usize) -> HonenResult<()> {
    if x_len != y_len {
        return Err(HonenError::length_mismatch("x and y", x_len, y_len));
    }
    Ok(())
}

/// Implicit x positions `0, 1, ..., len - 1`.
pub fn index_series(len: usize) -> Array1<f64> {
    Array1::from_iter((0..len).map(|i| i as f64))
}

fn collect_numeric<'a, T, I>(values: I) -> HonenResult<Array1<f64>>
where
    T: ToPrimitive + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| value.to_f64().ok_or(HonenError::NonNumeric { index }))
        .collect::<HonenResult<Vec<f64>>>()
        .map(Array1::from_vec)
}

fn collect_rows<T, R>(rows: &[R]) -> HonenResult<Array2<f64>>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    let mut flat = Vec::with_capacity(rows.len() * width);

    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(HonenError::length_mismatch(
                "replicate rows",
                width,
                row.len(),
            ));
        }
        for (c, value) in row.iter().enumerate() {
            let value = value.to_f64().ok_or(HonenError::NonNumeric {
                index: r * width + c,
            })?;
            flat.push(value);
        }
    }

    Array2::from_shape_vec((rows.len(), width), flat)
        .map_err(|e| HonenError::invalid_parameter(format!("replicate matrix: {e}")))
}

impl<T: ToPrimitive> IntoSeries for Vec<T> {
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<T: ToPrimitive> IntoSeries for &Vec<T> {
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<T: ToPrimitive> IntoSeries for &[T] {
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<T: ToPrimitive, const N: usize> IntoSeries for [T; N] {
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<T: ToPrimitive, const N: usize> IntoSeries for &[T; N] {
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<S, T> IntoSeries for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: ToPrimitive,
{
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

impl<S, T> IntoSeries for &ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: ToPrimitive,
{
    fn into_series(self) -> HonenResult<Array1<f64>> {
        collect_numeric(self.iter())
    }
}

macro_rules! impl_range_series {
    ($($t:ty),*) => {
        $(
            impl IntoSeries for std::ops::Range<$t> {
                fn into_series(self) -> HonenResult<Array1<f64>> {
                    Ok(Array1::from_iter(self.map(|v| v as f64)))
                }
            }

            impl IntoSeries for std::ops::RangeInclusive<$t> {
                fn into_series(self) -> HonenResult<Array1<f64>> {
                    Ok(Array1::from_iter(self.map(|v| v as f64)))
                }
            }
        )*
    };
}

impl_range_series!(usize, u32, u64, i32, i64);

impl<T: ToPrimitive> IntoReplicates for Vec<Vec<T>> {
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        collect_rows(&self)
    }
}

impl<T: ToPrimitive> IntoReplicates for &Vec<Vec<T>> {
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        collect_rows(self)
    }
}

impl<T: ToPrimitive> IntoReplicates for &[Vec<T>] {
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        collect_rows(self)
    }
}

impl<T: ToPrimitive, const N: usize, const M: usize> IntoReplicates for [[T; N]; M] {
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        collect_rows(&self)
    }
}

impl<T: ToPrimitive, const N: usize> IntoReplicates for &[[T; N]] {
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        collect_rows(self)
    }
}

impl<S, T> IntoReplicates for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: ToPrimitive,
{
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        (&self).into_replicates()
    }
}

impl<S, T> IntoReplicates for &ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: ToPrimitive,
{
    fn into_replicates(self) -> HonenResult<Array2<f64>> {
        let flat = collect_numeric(self.iter())?;
        Array2::from_shape_vec(self.dim(), flat.to_vec())
            .map_err(|e| HonenError::invalid_parameter(format!("replicate matrix: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_series_from_heterogeneous_inputs() {
        let ints = vec![1i32, 2, 3].into_series().unwrap();
        let bytes = [1u8, 2, 3].into_series().unwrap();
        let floats = array![1.0f32, 2.0, 3.0].into_series().unwrap();
        let range = (1..=3i64).into_series().unwrap();

        assert_eq!(ints, bytes);
        assert_eq!(ints, floats);
        assert_eq!(ints, range);
    }

    #[test]
    fn test_series_from_view_and_slice() {
        let data = array![0.25f64, 0.5, 0.75, 1.0];
        let view = data.slice(ndarray::s![1..3]);
        let series = view.into_series().unwrap();
        assert_eq!(series.len(), 2);
        assert_approx_eq!(series[0], 0.5, 1e-12);

        let raw: &[u16] = &[7, 8];
        assert_eq!(raw.into_series().unwrap(), array![7.0, 8.0]);
    }

    #[test]
    fn test_index_series() {
        assert_eq!(index_series(3), array![0.0, 1.0, 2.0]);
        assert!(index_series(0).is_empty());
    }

    #[test]
    fn test_length_check() {
        assert!(length_check(3, 3).is_ok());
        match length_check(2, 5) {
            Err(HonenError::LengthMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 5);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_replicates_from_nested_vec_and_arrays() {
        let nested = vec![vec![1, 2, 3], vec![4, 5, 6]]
            .into_replicates()
            .unwrap();
        let fixed = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
            .into_replicates()
            .unwrap();
        let nd = array![[1u32, 2, 3], [4, 5, 6]].into_replicates().unwrap();

        assert_eq!(nested.dim(), (2, 3));
        assert_eq!(nested, fixed);
        assert_eq!(nested, nd);
    }

    #[test]
    fn test_replicates_transposed_view_keeps_logical_order() {
        let data = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
        let transposed = data.t().into_replicates().unwrap();
        assert_eq!(transposed, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_ragged_replicates_rejected() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        let err = ragged.into_replicates().unwrap_err();
        assert!(matches!(
            err,
            HonenError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_replicates() {
        let empty: Vec<Vec<f64>> = Vec::new();
        let matrix = empty.into_replicates().unwrap();
        assert_eq!(matrix.dim(), (0, 0));
    }
}
