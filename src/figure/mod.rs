//! Multi-panel figures built through chained calls.
//!
//! A [`Figure`] owns a grid of panels and a cursor pointing at the current
//! one. Series, labels and axis settings go to the current panel until
//! [`Figure::next`] moves the cursor on. Nothing is drawn until the figure
//! is saved or shown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use honen::{Figure, FigureConfig, Style};
//!
//! # fn example() -> honen::HonenResult<()> {
//! let config = FigureConfig::default()
//!     .with_boxes(2, 1)
//!     .with_style(Style::Ggplot);
//! let mut figure = Figure::from_config(config)?;
//! figure
//!     .add_plot_y(vec![0.0, 1.0, 4.0, 9.0], Some("squares"))?
//!     .add_box_legend(Some("upper left"))?
//!     .next()?
//!     .prepare_bar(3, 2, None)?
//!     .add_bar(vec![1.0, 2.0, 3.0], Some("a"))?
//!     .add_bar(vec![2.0, 1.0, 2.5], Some("b"))?
//!     .set_bar_labels(&["x", "y", "z"])?
//!     .tight_layout()
//!     .save("overview.svg")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **core**: bounds, colors, themes, legend and tick settings
//! - **config**: serialisable figure configuration
//! - **grid**: the panel cursor
//! - **elements**: line, band and bar series stored on panels
//! - **panel**: per-panel state and the grouped bar layout
//! - **composer**: the [`Figure`] builder
//! - **render**: drawing through plotters backends

pub mod composer;
pub mod config;
pub mod core;
pub mod elements;
pub mod grid;
pub mod panel;
mod render;

pub use self::core::{
    AxisSelector, LegendPosition, LineStyle, LineStyleType, PlotBounds, PlotColor, PlotTheme,
    Spacing, Style, TickParams,
};
pub use composer::Figure;
pub use config::{DisplayMode, FigureConfig};
pub use elements::{BandElement, BarElement, LineElement, PanelElement, PlotElement};
pub use grid::PanelGrid;
pub use panel::{BarLayout, Panel};

#[cfg(test)]
mod tests;
