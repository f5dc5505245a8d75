//! Rendering a [`Figure`] through a plotters backend.
//!
//! The figure area is split evenly into the grid; each created panel is
//! drawn into its cell, cells without a panel stay blank.

use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::{debug, warn};

use super::composer::Figure;
use super::core::{LegendPosition, LineStyleType, PlotTheme, TickParams};
use super::elements::{BandElement, BarElement, LineElement, PanelElement, PlotElement};
use super::panel::Panel;
use crate::utils::pt_to_px;
use crate::{HonenError, HonenResult};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Default number of tick labels per axis.
const DEFAULT_TICKS: usize = 6;

/// Output encodings chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG, JPEG or BMP through the bitmap backend.
    Bitmap,
    /// SVG document.
    Svg,
}

impl OutputFormat {
    /// Pick the backend for `path`.
    pub fn from_path(path: &Path) -> HonenResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" => Ok(Self::Bitmap),
            "svg" => Ok(Self::Svg),
            _ => Err(HonenError::unsupported_format(ext)),
        }
    }
}

pub(crate) fn render_to_path(figure: &Figure, path: &Path, dpi: u32) -> HonenResult<()> {
    let format = OutputFormat::from_path(path)?;
    let size = figure.pixel_size(dpi);
    match format {
        OutputFormat::Bitmap => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_figure(figure, &root, dpi)?;
            root.present()?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_figure(figure, &root, dpi)?;
            root.present()?;
        }
    }
    Ok(())
}

fn text_style(theme: &PlotTheme, px: u32) -> TextStyle<'_> {
    FontDesc::new(
        FontFamily::from(theme.font_family.as_str()),
        f64::from(px),
        FontStyle::Normal,
    )
    .color(&theme.text_color)
}

fn legend_swatch(dpi: u32) -> i32 {
    pt_to_px(20.0, dpi) as i32
}

/// Draw every panel of `figure`, plus its title and figure-level legend, onto `root`.
pub fn draw_figure<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
    dpi: u32,
) -> HonenResult<()> {
    let theme = figure.theme();
    let spacing = figure.spacing();
    root.fill(&theme.figure_background)?;

    let outer = pt_to_px(spacing.outer_margin_pt, dpi) as i32;
    let area = root.margin(outer, outer, outer, outer);
    let title_style = text_style(theme, pt_to_px(theme.title_size_pt * 1.2, dpi));
    let area = match figure.title() {
        Some(title) => area.titled(title, title_style)?,
        None => area,
    };

    let grid = figure.grid();
    let cells = area.split_evenly((grid.rows(), grid.cols()));
    let gap = (pt_to_px(spacing.panel_gap_pt, dpi) / 2) as i32;
    for panel in figure.panels() {
        let Some(cell) = cells.get(panel.position() - 1) else {
            continue;
        };
        let cell = cell.margin(gap, gap, gap, gap);
        draw_panel(panel, &cell, theme, dpi)?;
    }

    if let Some(position) = figure.legend() {
        draw_figure_legend(figure, &area, position, dpi)?;
    }
    Ok(())
}

fn x_tick_count(panel: &Panel, ticks: &TickParams) -> usize {
    if !ticks.visible {
        return 0;
    }
    match (ticks.count, panel.bar_layout()) {
        (Some(count), _) => count,
        (None, Some(layout)) => layout.num_groups().max(2),
        (None, None) => DEFAULT_TICKS,
    }
}

fn draw_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
    theme: &PlotTheme,
    dpi: u32,
) -> HonenResult<()> {
    if panel.elements().is_empty() {
        debug!(panel = panel.position(), "drawing empty panel");
    }

    let bounds = panel.view_bounds().non_degenerate();
    let x_ticks = panel.x_ticks();
    let y_ticks = panel.y_ticks();
    let label_px = pt_to_px(theme.label_size_pt, dpi);
    let x_tick_px = pt_to_px(x_ticks.label_size_pt.unwrap_or(theme.tick_size_pt), dpi);
    let y_tick_px = pt_to_px(y_ticks.label_size_pt.unwrap_or(theme.tick_size_pt), dpi);

    let x_desc_px = panel.x_label().map_or(0, |_| label_px * 2);
    let y_desc_px = panel.y_label().map_or(0, |_| label_px * 2);
    let x_area = (if x_ticks.visible { x_tick_px * 2 } else { 0 }) + x_desc_px;
    let y_area = (if y_ticks.visible { y_tick_px * 4 } else { 0 }) + y_desc_px;

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(pt_to_px(4.0, dpi) as i32)
        .x_label_area_size(x_area as i32)
        .y_label_area_size(y_area as i32);
    if let Some(title) = panel.title() {
        let caption_style = text_style(theme, pt_to_px(theme.title_size_pt, dpi));
        builder.caption(title, caption_style);
    }
    let x_range = bounds.x_min..bounds.x_max;
    let y_range = bounds.y_min..bounds.y_max;
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
    chart.plotting_area().fill(&theme.panel_background)?;

    let x_format = |v: &f64| panel.format_x_tick(*v);
    let y_format = |v: &f64| panel.format_y_tick(*v);
    let x_label_style = text_style(theme, x_tick_px);
    let y_label_style = text_style(theme, y_tick_px);
    let desc_style = text_style(theme, label_px);

    let mut mesh = chart.configure_mesh();
    mesh.x_label_formatter(&x_format)
        .y_label_formatter(&y_format)
        .x_label_style(x_label_style.clone())
        .y_label_style(y_label_style)
        .axis_desc_style(desc_style)
        .axis_style(theme.axis_color.stroke_width(1))
        .bold_line_style(theme.grid_color.mix(0.6).stroke_width(1))
        .light_line_style(theme.panel_background.stroke_width(1))
        .x_labels(x_tick_count(panel, x_ticks))
        .y_labels(if y_ticks.visible {
            y_ticks.count.unwrap_or(DEFAULT_TICKS)
        } else {
            0
        });
    if let Some(label) = panel.x_label() {
        mesh.x_desc(label);
    }
    if let Some(label) = panel.y_label() {
        mesh.y_desc(label);
    }
    if !panel.grid().unwrap_or(theme.grid) {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for element in panel.elements() {
        match element {
            PanelElement::Line(line) => draw_line(&mut chart, line, dpi)?,
            PanelElement::Band(band) => draw_band(&mut chart, band, dpi)?,
            PanelElement::Bar(bar) => draw_bars(&mut chart, bar, theme, dpi)?,
        }
    }

    if let Some(position) = panel.legend() {
        if panel.has_legend_entries() {
            chart
                .configure_series_labels()
                .position(position.series_label_position())
                .background_style(theme.figure_background.mix(0.8).filled())
                .border_style(theme.axis_color.stroke_width(1))
                .label_font(x_label_style)
                .draw()?;
        } else {
            warn!(
                panel = panel.position(),
                "legend requested but no series has a label"
            );
        }
    }
    Ok(())
}

fn draw_line<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    line: &LineElement,
    dpi: u32,
) -> HonenResult<()> {
    let width = pt_to_px(line.width_pt, dpi);
    let color = line.color;
    let style = color.stroke_width(width);
    let xs = line.x.iter().copied();
    let points: Vec<(f64, f64)> = xs.zip(line.y.iter().copied()).collect();
    let dash = width as i32;

    let anno = match line.style {
        LineStyleType::Solid => chart.draw_series(LineSeries::new(points, style))?,
        LineStyleType::Dashed => {
            chart.draw_series(DashedLineSeries::new(points, dash * 4, dash * 2, style))?
        }
        LineStyleType::Dotted => {
            chart.draw_series(DashedLineSeries::new(points, dash, dash * 2, style))?
        }
    };
    if let Some(label) = line.label() {
        let swatch = legend_swatch(dpi);
        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + swatch, y)], color.stroke_width(width))
        });
    }
    Ok(())
}

fn draw_band<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    band: &BandElement,
    dpi: u32,
) -> HonenResult<()> {
    let color = band.color;
    let alpha = band.alpha;
    let fill = Polygon::new(band.outline(), color.mix(alpha).filled());
    chart.draw_series(std::iter::once(fill))?;

    let width = pt_to_px(1.5, dpi);
    let anno = chart.draw_series(LineSeries::new(band.mean_line(), color.stroke_width(width)))?;
    if let Some(label) = band.label() {
        let swatch = legend_swatch(dpi);
        let half = width as i32 * 2;
        anno.label(label).legend(move |(x, y)| {
            Rectangle::new(
                [(x, y - half), (x + swatch, y + half)],
                color.mix(alpha).filled(),
            )
        });
    }
    Ok(())
}

fn draw_bars<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    bar: &BarElement,
    theme: &PlotTheme,
    dpi: u32,
) -> HonenResult<()> {
    let color = bar.color;
    let anno = chart.draw_series(
        bar.rects()
            .into_iter()
            .map(move |(x0, x1, h)| Rectangle::new([(x0, 0.0), (x1, h)], color.filled())),
    )?;
    if let Some(label) = bar.label() {
        let swatch = legend_swatch(dpi);
        let half = swatch / 4;
        anno.label(label).legend(move |(x, y)| {
            Rectangle::new([(x, y - half), (x + swatch, y + half)], color.filled())
        });
    }

    let whiskers = bar.error_bars();
    if !whiskers.is_empty() {
        let ecolor = theme.text_color;
        let line = pt_to_px(1.0, dpi);
        let cap = pt_to_px(4.0, dpi);
        chart.draw_series(whiskers.into_iter().map(move |(c, lo, mid, hi)| {
            ErrorBar::new_vertical(c, lo, mid, hi, ecolor.stroke_width(line), cap)
        }))?;
    }
    Ok(())
}

fn draw_figure_legend<DB: DrawingBackend>(
    figure: &Figure,
    area: &DrawingArea<DB, Shift>,
    position: LegendPosition,
    dpi: u32,
) -> HonenResult<()> {
    let theme = figure.theme();
    let entries: Vec<(&str, RGBColor)> = figure
        .panels()
        .flat_map(|panel| panel.elements().iter())
        .filter_map(|element| element.label().map(|label| (label, element.color())))
        .collect();
    if entries.is_empty() {
        warn!("global legend requested but no series has a label");
        return Ok(());
    }

    let style = text_style(theme, pt_to_px(theme.tick_size_pt, dpi));
    let pad = pt_to_px(4.0, dpi);
    let swatch = legend_swatch(dpi);

    let mut text_w = 0;
    let mut text_h = 0;
    for (label, _) in &entries {
        let (w, h) = area.estimate_text_size(label, &style)?;
        text_w = text_w.max(w);
        text_h = text_h.max(h);
    }
    let row_h = text_h + pad;
    let box_w = pad * 3 + swatch as u32 + text_w;
    let box_h = pad + row_h * entries.len() as u32;
    let (x0, y0) = position.anchor(area.dim_in_pixel(), (box_w, box_h), pad);
    let corner = (x0 + box_w as i32, y0 + box_h as i32);

    area.draw(&Rectangle::new(
        [(x0, y0), corner],
        theme.figure_background.mix(0.8).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(x0, y0), corner],
        theme.axis_color.stroke_width(1),
    ))?;

    let line = pt_to_px(1.5, dpi);
    for (i, (label, color)) in entries.iter().enumerate() {
        let top = y0 + (pad + row_h * i as u32) as i32;
        let mid = top + text_h as i32 / 2;
        let left = x0 + pad as i32;
        area.draw(&PathElement::new(
            vec![(left, mid), (left + swatch, mid)],
            color.stroke_width(line),
        ))?;
        area.draw(&Text::new(
            label.to_string(),
            (left + swatch + pad as i32, top),
            style.clone(),
        ))?;
    }
    Ok(())
}
