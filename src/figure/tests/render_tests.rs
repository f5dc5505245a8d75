//! Tests that draw figures to disk.

use super::super::composer::Figure;
use super::super::config::FigureConfig;
use super::super::core::{LineStyle, LineStyleType, Style, TickParams};
use super::create_test_figure;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Width and height from the IHDR chunk of a PNG file.
fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert!(bytes.len() > 24, "PNG too short");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(&bytes[12..16], b"IHDR");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

#[test]
fn test_png_size_is_figsize_times_dpi() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sized.png");

    let config = FigureConfig::default().with_figsize(4.0, 3.0);
    let mut figure = Figure::from_config(config).unwrap();
    figure
        .add_plot_y(vec![1.0, 3.0, 2.0], Some("line"))
        .unwrap();
    figure.save_with_dpi(&path, 50).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_dimensions(&bytes), figure.pixel_size(50));
    assert_eq!(figure.pixel_size(50), (200, 150));
}

#[test]
fn test_save_uses_configured_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.png");

    let config = FigureConfig::default().with_figsize(2.0, 1.5).with_dpi(80);
    let figure = Figure::from_config(config).unwrap();
    figure.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_dimensions(&bytes), (160, 120));
}

#[test]
fn test_save_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bars.jpg");

    let figure = create_test_figure();
    figure.save_with_dpi(&path, 40).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 2);
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_save_png_with_every_element() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.png");

    let mut figure = create_test_figure();
    figure
        .add_global_title("all elements")
        .add_global_legend(Some("lower right"))
        .unwrap()
        .save_with_dpi(&path, 72)
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_dimensions(&bytes), figure.pixel_size(72));
}

#[test]
fn test_save_svg_writes_document() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.svg");

    let config = FigureConfig::default()
        .with_boxes(1, 2)
        .with_style(Style::Ggplot)
        .with_dpi(72);
    let mut figure = Figure::from_config(config).unwrap();
    figure
        .add_styled_plot(
            0..10usize,
            (0..10).map(|i| (i * i) as f64).collect::<Vec<_>>(),
            LineStyle::default().with_style(LineStyleType::Dotted),
            Some("squares"),
        )
        .and_then(|f| {
            f.add_styled_plot(
                0..10usize,
                (0..10).map(|i| (2 * i) as f64).collect::<Vec<_>>(),
                LineStyle::default().with_style(LineStyleType::Dashed),
                Some("doubles"),
            )
        })
        .and_then(|f| f.set_tick_params("x", TickParams::default().hidden()))
        .and_then(|f| f.add_box_legend(Some("upper left")))
        .and_then(|f| f.next())
        .unwrap();
    figure.add_box_title("empty").tight_layout();
    figure.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("<svg"));
    let (width, height) = figure.pixel_size(72);
    assert!(contents.contains(&format!("width=\"{width}\"")));
    assert!(contents.contains(&format!("height=\"{height}\"")));
}

#[test]
fn test_save_partially_filled_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.bmp");

    let mut figure = Figure::with_boxes(3, 3).unwrap();
    figure
        .add_plot_y(vec![1.0, 1.0, 1.0], None)
        .and_then(|f| f.set_grid(false).save_with_dpi(&path, 50))
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
}
