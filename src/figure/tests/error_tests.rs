//! Tests for builder validation and error reporting.

use super::super::composer::Figure;
use super::super::config::FigureConfig;
use super::super::core::{Spacing, TickParams};
use super::create_test_figure;
use crate::HonenError;

#[test]
fn test_grid_exhausted_keeps_cursor() {
    let mut figure = Figure::with_boxes(1, 2).unwrap();
    figure.add_plot_y(vec![1.0, 2.0], None).unwrap();
    figure.next().unwrap();
    figure.add_plot_y(vec![3.0, 4.0], None).unwrap();

    let err = figure.next().unwrap_err();
    assert!(matches!(
        err,
        HonenError::GridExhausted { rows: 1, cols: 2 }
    ));
    assert!(err.to_string().contains("no more box"));

    assert_eq!(figure.position(), 2);
    assert_eq!(figure.current_panel().elements().len(), 1);
    assert_eq!(figure.panels().count(), 2);

    // the builder stays usable
    figure.add_xlabel("still here");
    assert_eq!(figure.current_panel().x_label(), Some("still here"));
}

#[test]
fn test_single_panel_figure_has_no_next() {
    let mut figure = Figure::new();
    assert!(matches!(
        figure.next(),
        Err(HonenError::GridExhausted { rows: 1, cols: 1 })
    ));
}

#[test]
fn test_length_mismatch_leaves_panel_untouched() {
    let mut figure = Figure::new();
    let err = figure
        .add_plot(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], Some("bad"))
        .unwrap_err();
    match err {
        HonenError::LengthMismatch {
            expected, actual, ..
        } => assert_eq!((expected, actual), (3, 2)),
        other => panic!("expected LengthMismatch, got {other:?}"),
    }
    assert!(figure.current_panel().elements().is_empty());
}

#[test]
fn test_fill_plot_rejects_mismatched_x() {
    let mut figure = Figure::new();
    let replicates = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]];
    let err = figure
        .add_fill_plot(vec![0.0, 1.0], replicates, None, None)
        .unwrap_err();
    assert!(matches!(err, HonenError::LengthMismatch { .. }));
}

#[test]
fn test_fill_plot_needs_two_replicates() {
    let mut figure = Figure::new();
    let err = figure
        .add_fill_plot_y(vec![vec![1.0, 2.0, 3.0]], None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        HonenError::InsufficientReplicates {
            required: 2,
            found: 1
        }
    ));

    let empty: Vec<Vec<f64>> = Vec::new();
    let err = figure.add_fill_plot_y(empty, None, None).unwrap_err();
    assert!(matches!(
        err,
        HonenError::InsufficientReplicates { found: 0, .. }
    ));
    assert!(figure.current_panel().elements().is_empty());
}

#[test]
fn test_ragged_replicates_rejected() {
    let mut figure = Figure::new();
    let err = figure
        .add_fill_plot_y(vec![vec![1.0, 2.0], vec![1.0]], None, None)
        .unwrap_err();
    assert!(matches!(err, HonenError::LengthMismatch { .. }));
}

#[test]
fn test_bars_require_prepare() {
    let mut figure = Figure::new();
    assert!(matches!(
        figure.add_bar(vec![1.0, 2.0], None),
        Err(HonenError::BarsNotConfigured)
    ));
    assert!(matches!(
        figure.set_bar_labels(&["a", "b"]),
        Err(HonenError::BarsNotConfigured)
    ));

    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        figure.add_bar_with_error(empty, None),
        Err(HonenError::BarsNotConfigured)
    ));
}

#[test]
fn test_bar_layout_is_per_panel() {
    let mut figure = Figure::with_boxes(1, 2).unwrap();
    figure.prepare_bar(2, 1, None).unwrap();
    figure.next().unwrap();
    assert!(matches!(
        figure.add_bar(vec![1.0, 2.0], None),
        Err(HonenError::BarsNotConfigured)
    ));
}

#[test]
fn test_bar_count_and_height_checks() {
    let mut figure = Figure::new();
    figure.prepare_bar(2, 1, None).unwrap();

    let err = figure.add_bar(vec![1.0, 2.0, 3.0], None).unwrap_err();
    assert!(matches!(
        err,
        HonenError::LengthMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));

    figure.add_bar(vec![1.0, 2.0], None).unwrap();
    let err = figure.add_bar(vec![1.0, 2.0], None).unwrap_err();
    assert!(matches!(err, HonenError::InvalidParameter(_)));
    assert_eq!(figure.current_panel().elements().len(), 1);
}

#[test]
fn test_bar_labels_must_match_groups() {
    let mut figure = Figure::new();
    figure.prepare_bar(3, 1, None).unwrap();
    let err = figure.set_bar_labels(&["a", "b"]).unwrap_err();
    assert!(matches!(
        err,
        HonenError::LengthMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_invalid_bar_layouts() {
    let mut figure = Figure::new();
    assert!(figure.prepare_bar(0, 1, None).is_err());
    assert!(figure.prepare_bar(2, 0, None).is_err());
    assert!(figure.prepare_bar(2, 2, Some(-0.1)).is_err());
    assert!(figure.current_panel().bar_layout().is_none());
}

#[test]
fn test_invalid_axis_names() {
    let mut figure = Figure::new();
    match figure.set_lim("z", 0.0, 1.0) {
        Err(HonenError::InvalidAxis(name)) => assert_eq!(name, "z"),
        other => panic!("expected InvalidAxis, got {other:?}"),
    }
    assert!(matches!(
        figure.set_tick_params("xy", TickParams::default()),
        Err(HonenError::InvalidAxis(_))
    ));
    assert!(figure.current_panel().x_limits().is_none());
}

#[test]
fn test_invalid_limits_and_sizes() {
    let mut figure = Figure::new();
    assert!(figure.set_xlim(1.0, 1.0).is_err());
    assert!(figure.set_ylim(2.0, 1.0).is_err());
    assert!(figure.set_xlim(f64::NAN, 1.0).is_err());
    assert!(
        figure
            .set_tick_params("x", TickParams::default().with_label_size(0.0))
            .is_err()
    );
    assert!(
        figure
            .apply_layout(Spacing {
                outer_margin_pt: -1.0,
                panel_gap_pt: 0.0,
            })
            .is_err()
    );
    assert_eq!(*figure.spacing(), Spacing::default());
}

#[test]
fn test_unknown_legend_position() {
    let mut figure = Figure::new();
    assert!(matches!(
        figure.add_box_legend(Some("somewhere")),
        Err(HonenError::InvalidParameter(_))
    ));
    assert!(figure.add_global_legend(Some("nowhere")).is_err());
    assert!(figure.current_panel().legend().is_none());
    assert!(figure.legend().is_none());
}

#[test]
fn test_invalid_construction() {
    assert!(Figure::with_boxes(0, 2).is_err());
    assert!(matches!(
        Figure::with_boxes(usize::MAX, 2),
        Err(HonenError::InvalidParameter(_))
    ));
    let zero_dpi = FigureConfig::default().with_dpi(0);
    assert!(Figure::from_config(zero_dpi).is_err());
    let flat = FigureConfig::default().with_figsize(0.0, 4.0);
    assert!(Figure::from_config(flat).is_err());
}

#[test]
fn test_headless_show_is_display_unavailable() {
    let figure = Figure::from_config(FigureConfig::default().headless()).unwrap();
    let err = figure.show().unwrap_err();
    assert!(matches!(err, HonenError::DisplayUnavailable));
    assert!(!err.is_validation());
}

#[test]
fn test_save_rejects_unknown_extension_and_zero_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let figure = create_test_figure();

    let target = dir.path().join("figure.pdf");
    match figure.save(&target) {
        Err(HonenError::UnsupportedFormat { extension }) => assert_eq!(extension, "pdf"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert!(!target.exists());

    let err = figure
        .save_with_dpi(dir.path().join("figure.png"), 0)
        .unwrap_err();
    assert!(matches!(err, HonenError::InvalidParameter(_)));
    assert!(err.is_validation());
}
