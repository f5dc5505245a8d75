//! Figure configuration.

use serde::{Deserialize, Serialize};

use super::core::Style;
use crate::{HonenError, HonenResult};

/// Whether `show` may try to reach an interactive display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Check for a display when `show` is called.
    #[default]
    Auto,
    /// Never display; `show` always fails with `DisplayUnavailable`.
    Headless,
}

/// Construction-time settings for a [`Figure`](super::Figure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Grid shape as `(rows, cols)`.
    pub boxes: (usize, usize),
    /// Named style selecting the theme.
    pub style: Style,
    /// Figure size in inches.
    pub figsize: (f64, f64),
    /// Resolution used by `save`.
    pub dpi: u32,
    /// Whether `show` may open a viewer.
    pub display: DisplayMode,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            boxes: (1, 1),
            style: Style::Default,
            figsize: (6.4, 4.8),
            dpi: 300,
            display: DisplayMode::Auto,
        }
    }
}

impl FigureConfig {
    /// Set the grid shape
    pub const fn with_boxes(mut self, rows: usize, cols: usize) -> Self {
        self.boxes = (rows, cols);
        self
    }

    /// Set the style
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the figure size in inches
    pub const fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }

    /// Set the default save resolution
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Disable interactive display
    pub const fn headless(mut self) -> Self {
        self.display = DisplayMode::Headless;
        self
    }

    pub(crate) fn validate(&self) -> HonenResult<()> {
        let (rows, cols) = self.boxes;
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
        let (w, h) = self.figsize;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(HonenError::invalid_parameter(format!(
                "figsize must be positive, got {w}x{h}"
            )));
        }
        if self.dpi == 0 {
            return Err(HonenError::invalid_parameter("dpi must be > 0"));
        }
        Ok(())
    }
}
