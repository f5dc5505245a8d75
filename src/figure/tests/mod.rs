//! Tests for the figure builder.
//!
//! Builder state and validation are checked without drawing anything;
//! the render tests write real PNG, JPEG, BMP and SVG files.

use super::composer::Figure;
use super::elements::{BandElement, BarElement, LineElement, PanelElement};
use super::panel::Panel;

mod error_tests;
mod render_tests;

/// The line element at `index` of `panel`.
pub(crate) fn line_at(panel: &Panel, index: usize) -> &LineElement {
    match &panel.elements()[index] {
        PanelElement::Line(line) => line,
        other => panic!("expected a line at {index}, got {other:?}"),
    }
}

/// The band element at `index` of `panel`.
pub(crate) fn band_at(panel: &Panel, index: usize) -> &BandElement {
    match &panel.elements()[index] {
        PanelElement::Band(band) => band,
        other => panic!("expected a band at {index}, got {other:?}"),
    }
}

/// The bar element at `index` of `panel`.
pub(crate) fn bar_at(panel: &Panel, index: usize) -> &BarElement {
    match &panel.elements()[index] {
        PanelElement::Bar(bar) => bar,
        other => panic!("expected bars at {index}, got {other:?}"),
    }
}

/// A 2x2 figure touching every kind of series.
pub(crate) fn create_test_figure() -> Figure {
    let mut figure = Figure::with_boxes(2, 2).expect("Failed to create figure");
    let replicate_bars = vec![vec![1.0, 2.0, 1.0], vec![3.0, 2.0, 2.0]];
    figure
        .add_plot(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 2.0], Some("line"))
        .and_then(|f| f.add_box_legend(None))
        .and_then(|f| f.next())
        .and_then(|f| {
            f.add_fill_plot_y(
                vec![vec![1.0, 2.0, 3.0], vec![2.0, 2.0, 4.0], vec![3.0, 2.0, 5.0]],
                Some("runs"),
                None,
            )
        })
        .and_then(|f| f.next())
        .and_then(|f| f.prepare_bar(3, 2, None))
        .and_then(|f| f.add_bar(vec![1.0, 2.0, 3.0], Some("plain")))
        .and_then(|f| f.add_bar_with_error(replicate_bars, Some("err")))
        .and_then(|f| f.set_bar_labels(&["a", "b", "c"]))
        .expect("Failed to build test figure");
    figure
}
