//! Error types and result utilities for figure building operations.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Convenience type alias for results that may contain a [`HonenError`].
pub type HonenResult<T> = Result<T, HonenError>;

/// Error types that can occur while building, saving or showing a figure.
#[derive(Error, Debug)]
pub enum HonenError {
    /// Two series that must line up element by element have different lengths.
    ///
    /// Raised for x/y pairs, bar heights against the configured group count,
    /// and ragged rows in replicate matrices.
    #[error("length of {what} should be same but {expected} and {actual}")]
    LengthMismatch {
        /// What was being compared.
        what: &'static str,
        /// Reference length.
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// A banded plot was given fewer replicate rows than it needs.
    #[error("at least {required} replicate rows are required but got {found}")]
    InsufficientReplicates {
        /// Minimum number of rows.
        required: usize,
        /// Number of rows received.
        found: usize,
    },

    /// A bar operation was called before `prepare_bar` configured the current panel.
    #[error("bar layout is not configured for this panel, call prepare_bar first")]
    BarsNotConfigured,

    /// An axis selector other than `x`, `y` or `both` was supplied.
    #[error("invalid axis '{0}', expected one of 'x', 'y' or 'both'")]
    InvalidAxis(String),

    /// The panel cursor would move past the last cell of the grid.
    #[error("no more box: the {rows}x{cols} grid is full")]
    GridExhausted {
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },

    /// `show` was called without an interactive display.
    #[error("display unavailable")]
    DisplayUnavailable,

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// A value could not be represented as `f64`.
    #[error("value at index {index} is not representable as f64")]
    NonNumeric {
        /// Position of the value in the flattened input.
        index: usize,
    },

    /// The output path has an extension no backend can write.
    #[error("unsupported output format: '{extension}'")]
    UnsupportedFormat {
        /// Extension found on the path (empty if none).
        extension: String,
    },

    /// The plotting engine failed while drawing.
    #[error("rendering failed: {0}")]
    Render(String),

    /// IO error while writing output or launching a viewer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HonenError {
    /// Create a LengthMismatch error.
    pub const fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Returns true if the error was caused by caller input rather than the environment.
    pub const fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::DisplayUnavailable | Self::Render(_) | Self::Io(_)
        )
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for HonenError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Render(err.to_string())
    }
}
