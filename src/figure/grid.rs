//! Linear cursor over the panel grid.
//!
//! Positions are 1-based and run row-major, the same numbering matplotlib
//! uses for `add_subplot(rows, cols, index)`.

use crate::{HonenError, HonenResult};

/// A `rows x cols` grid and the position of the current panel in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGrid {
    rows: usize,
    cols: usize,
    position: usize,
}

impl PanelGrid {
    /// Create a grid with the cursor on the first cell.
    pub fn new(rows: usize, cols: usize) -> HonenResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(HonenError::invalid_parameter(format!(
                "grid must have at least one row and one column, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(HonenError::invalid_parameter(format!(
                "a {rows}x{cols} grid has more cells than can be counted"
            )));
        }
        Ok(Self {
            rows,
            cols,
            position: 1,
        })
    }

    /// A 1x1 grid.
    pub const fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            position: 1,
        }
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Current 1-based position.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of cells.
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of cells after the current one.
    pub const fn remaining(&self) -> usize {
        self.capacity() - self.position
    }

    /// Move to the next cell and return its position.
    ///
    /// # Errors
    /// [`HonenError::GridExhausted`] on the last cell; the cursor does not move.
    pub fn advance(&mut self) -> HonenResult<usize> {
        if self.position >= self.capacity() {
            return Err(HonenError::GridExhausted {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.position += 1;
        Ok(self.position)
    }

    /// Zero-based `(row, col)` of a 1-based position.
    pub const fn cell(&self, position: usize) -> (usize, usize) {
        let index = position.saturating_sub(1);
        (index / self.cols, index % self.cols)
    }
}
