// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)]

//! # Honen
//!
//! A fluent figure builder for multi-panel plots, drawn with `plotters`.
//!
//! A [`Figure`] is a grid of panels with a cursor on the current one. Every
//! call adds to the current panel and returns the figure again, so a whole
//! figure reads as one chain:
//!
//! ```rust,no_run
//! use honen::{Figure, TickParams};
//!
//! # fn example() -> honen::HonenResult<()> {
//! Figure::with_boxes(1, 2)?
//!     .add_plot(vec![0.0, 0.5, 1.0], vec![1.0, 0.2, 0.7], Some("loss"))?
//!     .add_xlabel("epoch")
//!     .add_box_title("training")
//!     .set_tick_params("both", TickParams::default().with_label_size(8.0))?
//!     .next()?
//!     .add_fill_plot_y(vec![vec![0.1, 0.4, 0.8], vec![0.2, 0.5, 0.7]], Some("accuracy"), None)?
//!     .add_global_legend(Some("lower center"))?
//!     .save("training.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Inputs
//!
//! Series accept anything implementing [`IntoSeries`]: vectors, slices and
//! arrays of any primitive number, 1-D `ndarray` arrays and integer ranges.
//! Replicate runs accept anything implementing [`IntoReplicates`]: nested
//! vectors, fixed-size 2-D arrays and 2-D `ndarray` arrays, one run per row.
//!
//! ## Error Handling
//!
//! Every fallible call returns [`HonenResult`]. Validation happens before
//! the figure is touched, so an `Err` leaves the builder unchanged:
//!
//! ```rust
//! use honen::{Figure, HonenError};
//!
//! let mut figure = Figure::new();
//! match figure.add_plot(vec![1, 2, 3], vec![1, 2], None) {
//!     Err(HonenError::LengthMismatch { expected, actual, .. }) => {
//!         assert_eq!((expected, actual), (3, 2));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! assert!(figure.current_panel().elements().is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events: figure creation and saving at `debug`,
//! each added series and panel change at `trace`. Install any subscriber to
//! see them.

mod error;

pub mod conversions;
pub mod figure;
pub mod statistics;
pub mod utils;

pub use crate::conversions::{IntoReplicates, IntoSeries};
pub use crate::error::{HonenError, HonenResult};
pub use crate::figure::{
    AxisSelector, BarLayout, DisplayMode, Figure, FigureConfig, LegendPosition, LineStyle,
    LineStyleType, Panel, PlotColor, PlotTheme, Spacing, Style, TickParams,
};
pub use crate::statistics::ReplicateSummary;
