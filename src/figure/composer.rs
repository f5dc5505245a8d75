//! The figure builder.
//!
//! [`Figure`] records panels and series through chained calls and only
//! drives plotters when the figure is saved or shown.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};

use super::config::{DisplayMode, FigureConfig};
use super::core::{
    AxisSelector, LegendPosition, LineStyle, PlotColor, PlotTheme, Spacing, TickParams,
};
use super::elements::{BandElement, BarElement, LineElement, PanelElement};
use super::grid::PanelGrid;
use super::panel::{BarLayout, Panel};
use super::render;
use crate::conversions::{IntoReplicates, IntoSeries, index_series, length_check};
use crate::statistics::summarize_replicates;
use crate::utils::{display_available, inches_to_px, launch_viewer, viewer_command};
use crate::{HonenError, HonenResult};

/// Default color of banded plots.
const BAND_COLOR: PlotColor = PlotColor(plotters::style::RGBColor(0, 0, 255));

/// Opacity of the ±1 std band.
const BAND_ALPHA: f64 = 0.5;

static SHOW_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A multi-panel figure built through chained method calls.
///
/// ```rust,no_run
/// use honen::Figure;
///
/// # fn example() -> honen::HonenResult<()> {
/// let mut figure = Figure::with_boxes(1, 2)?;
/// figure
///     .add_plot(0..4usize, vec![1.0, 4.0, 2.0, 3.0], Some("first"))?
///     .add_xlabel("step")
///     .add_box_legend(None)?
///     .next()?
///     .add_fill_plot_y(vec![vec![1, 2, 3], vec![2, 3, 5]], Some("runs"), None)?
///     .add_global_title("Experiments")
///     .save("experiments.png")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    config: FigureConfig,
    theme: PlotTheme,
    grid: PanelGrid,
    current: Panel,
    previous: Vec<Panel>,
    title: Option<String>,
    legend: Option<LegendPosition>,
    spacing: Spacing,
}

impl Figure {
    /// A figure with a single panel and default settings.
    pub fn new() -> Self {
        Self::assemble(FigureConfig::default(), PanelGrid::single())
    }

    /// A figure laid out as a `rows x cols` grid of panels.
    pub fn with_boxes(rows: usize, cols: usize) -> HonenResult<Self> {
        Self::from_config(FigureConfig::default().with_boxes(rows, cols))
    }

    /// A figure built from a full configuration.
    pub fn from_config(config: FigureConfig) -> HonenResult<Self> {
        config.validate()?;
        let (rows, cols) = config.boxes;
        let grid = PanelGrid::new(rows, cols)?;
        Ok(Self::assemble(config, grid))
    }

    fn assemble(config: FigureConfig, grid: PanelGrid) -> Self {
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            style = %config.style,
            "creating figure"
        );
        let theme = config.style.theme();
        let current = Panel::new(grid.position(), grid.cell(grid.position()));
        Self {
            config,
            theme,
            grid,
            current,
            previous: Vec::new(),
            title: None,
            legend: None,
            spacing: Spacing::default(),
        }
    }

    /// Move to the next panel of the grid.
    ///
    /// # Errors
    /// [`HonenError::GridExhausted`] when the current panel is the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> HonenResult<&mut Self> {
        let position = self.grid.advance()?;
        let panel = Panel::new(position, self.grid.cell(position));
        let finished = std::mem::replace(&mut self.current, panel);
        self.previous.push(finished);
        trace!(
            position,
            capacity = self.grid.capacity(),
            "advanced to next panel"
        );
        Ok(self)
    }

    /// The configuration the figure was built from.
    pub const fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Colors and sizes used when drawing.
    pub const fn theme(&self) -> &PlotTheme {
        &self.theme
    }

    /// Replace the theme derived from the configured style.
    pub fn with_theme(&mut self, theme: PlotTheme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// The panel grid and its cursor.
    pub const fn grid(&self) -> &PanelGrid {
        &self.grid
    }

    /// 1-based position of the current panel.
    pub const fn position(&self) -> usize {
        self.grid.position()
    }

    /// Total number of panel cells.
    pub const fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    /// The panel that receives series, labels and settings.
    pub const fn current_panel(&self) -> &Panel {
        &self.current
    }

    /// Mutable access to the current panel, for state the builder does not wrap.
    pub const fn current_panel_mut(&mut self) -> &mut Panel {
        &mut self.current
    }

    /// Panels created before the current one, in grid order.
    pub fn previous_panels(&self) -> &[Panel] {
        &self.previous
    }

    /// Every created panel, in grid order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.previous.iter().chain(std::iter::once(&self.current))
    }

    /// Figure-level title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Position of the figure-level legend, if one was requested.
    pub const fn legend(&self) -> Option<LegendPosition> {
        self.legend
    }

    /// Margins around and between panels.
    pub const fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// Add a line series.
    ///
    /// # Errors
    /// [`HonenError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn add_plot<X, Y>(&mut self, x: X, y: Y, label: Option<&str>) -> HonenResult<&mut Self>
    where
        X: IntoSeries,
        Y: IntoSeries,
    {
        self.add_styled_plot(x, y, LineStyle::default(), label)
    }

    /// Add a line series against the implicit index `0..len(y)`.
    pub fn add_plot_y<Y>(&mut self, y: Y, label: Option<&str>) -> HonenResult<&mut Self>
    where
        Y: IntoSeries,
    {
        let y = y.into_series()?;
        let x = index_series(y.len());
        self.add_styled_plot(x, y, LineStyle::default(), label)
    }

    /// Add a line series with an explicit style.
    pub fn add_styled_plot<X, Y>(
        &mut self,
        x: X,
        y: Y,
        style: LineStyle,
        label: Option<&str>,
    ) -> HonenResult<&mut Self>
    where
        X: IntoSeries,
        Y: IntoSeries,
    {
        let x = x.into_series()?;
        let y = y.into_series()?;
        length_check(x.len(), y.len())?;
        if !(style.width_pt.is_finite() && style.width_pt > 0.0) {
            return Err(HonenError::invalid_parameter(format!(
                "line width must be positive, got {}",
                style.width_pt
            )));
        }

        let color = match style.color {
            Some(color) => color.rgb(),
            None => self.current.next_color(&self.theme.palette),
        };
        trace!(points = x.len(), panel = self.position(), "adding line");
        self.current.push(PanelElement::Line(LineElement {
            x,
            y,
            color,
            width_pt: style.width_pt,
            style: style.style,
            label: label.map(str::to_string),
        }));
        Ok(self)
    }

    /// Add the mean of replicate runs with a shaded ±1 std band.
    ///
    /// `ys` holds one run per row; `x` must match the row length.
    ///
    /// # Errors
    /// [`HonenError::LengthMismatch`] if `x` does not match the rows, and
    /// [`HonenError::InsufficientReplicates`] with fewer than two rows.
    pub fn add_fill_plot<X, Ys>(
        &mut self,
        x: X,
        ys: Ys,
        label: Option<&str>,
        color: Option<PlotColor>,
    ) -> HonenResult<&mut Self>
    where
        X: IntoSeries,
        Ys: IntoReplicates,
    {
        let x = x.into_series()?;
        let ys = ys.into_replicates()?;
        if ys.nrows() > 0 {
            length_check(x.len(), ys.ncols())?;
        }
        let summary = summarize_replicates(&ys, 2)?;

        trace!(
            points = x.len(),
            replicates = ys.nrows(),
            panel = self.position(),
            "adding band"
        );
        self.current.push(PanelElement::Band(BandElement {
            x,
            summary,
            color: color.unwrap_or(BAND_COLOR).rgb(),
            alpha: BAND_ALPHA,
            label: label.map(str::to_string),
        }));
        Ok(self)
    }

    /// [`add_fill_plot`](Self::add_fill_plot) against the implicit index.
    pub fn add_fill_plot_y<Ys>(
        &mut self,
        ys: Ys,
        label: Option<&str>,
        color: Option<PlotColor>,
    ) -> HonenResult<&mut Self>
    where
        Ys: IntoReplicates,
    {
        let ys = ys.into_replicates()?;
        let x = index_series(ys.ncols());
        self.add_fill_plot(x, ys, label, color)
    }

    /// Configure grouped bars on the current panel.
    ///
    /// `num_groups` groups sit at positions `0..num_groups`; each holds
    /// `num_series` bars of `width` (default `0.8 / num_series`).
    pub fn prepare_bar(
        &mut self,
        num_groups: usize,
        num_series: usize,
        width: Option<f64>,
    ) -> HonenResult<&mut Self> {
        let layout = BarLayout::new(num_groups, num_series, width)?;
        debug!(
            num_groups,
            num_series,
            width = layout.width(),
            panel = self.position(),
            "prepared bar layout"
        );
        self.current.set_bar_layout(layout);
        Ok(self)
    }

    /// Add the next bar series at the running offset.
    ///
    /// # Errors
    /// [`HonenError::BarsNotConfigured`] before [`prepare_bar`](Self::prepare_bar),
    /// [`HonenError::LengthMismatch`] if `heights` does not match the group count.
    pub fn add_bar<H>(&mut self, heights: H, label: Option<&str>) -> HonenResult<&mut Self>
    where
        H: IntoSeries,
    {
        let heights = heights.into_series()?;
        self.place_bars(heights, None, label)
    }

    /// Add the next bar series as the mean of replicate rows, with std error bars.
    pub fn add_bar_with_error<Ys>(
        &mut self,
        replicates: Ys,
        label: Option<&str>,
    ) -> HonenResult<&mut Self>
    where
        Ys: IntoReplicates,
    {
        let replicates = replicates.into_replicates()?;
        // layout problems take precedence over data problems
        self.current.bar_layout_mut()?;
        let summary = summarize_replicates(&replicates, 1)?;
        self.place_bars(summary.mean, Some(summary.std), label)
    }

    fn place_bars(
        &mut self,
        heights: ndarray::Array1<f64>,
        errors: Option<ndarray::Array1<f64>>,
        label: Option<&str>,
    ) -> HonenResult<&mut Self> {
        let layout = self.current.bar_layout_mut()?;
        if heights.len() != layout.num_groups() {
            return Err(HonenError::length_mismatch(
                "bar heights and groups",
                layout.num_groups(),
                heights.len(),
            ));
        }
        let centers = layout.next_centers()?;
        let width = layout.width();
        layout.advance();

        let color = self.current.next_color(&self.theme.palette);
        trace!(
            groups = heights.len(),
            panel = self.position(),
            "adding bars"
        );
        self.current.push(PanelElement::Bar(BarElement {
            centers,
            heights,
            width,
            errors,
            color,
            label: label.map(str::to_string),
        }));
        Ok(self)
    }

    /// Name the bar groups; the labels replace numeric x ticks.
    pub fn set_bar_labels<S>(&mut self, labels: &[S]) -> HonenResult<&mut Self>
    where
        S: AsRef<str>,
    {
        let labels = labels.iter().map(|s| s.as_ref().to_string()).collect();
        self.current.bar_layout_mut()?.set_labels(labels)?;
        Ok(self)
    }

    /// Label the x axis of the current panel.
    pub fn add_xlabel(&mut self, text: impl Into<String>) -> &mut Self {
        self.current.set_x_label(text.into());
        self
    }

    /// Label the y axis of the current panel.
    pub fn add_ylabel(&mut self, text: impl Into<String>) -> &mut Self {
        self.current.set_y_label(text.into());
        self
    }

    /// Title of the current panel.
    pub fn add_box_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.current.set_title(title.into());
        self
    }

    /// Title above the whole figure.
    pub fn add_global_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Show a legend on the current panel; `None` means `"best"`.
    pub fn add_box_legend(&mut self, position: Option<&str>) -> HonenResult<&mut Self> {
        let position = parse_legend(position)?;
        self.current.set_legend(position);
        Ok(self)
    }

    /// Show one legend for the labelled series of every panel.
    pub fn add_global_legend(&mut self, position: Option<&str>) -> HonenResult<&mut Self> {
        self.legend = Some(parse_legend(position)?);
        Ok(self)
    }

    /// Set tick parameters of the current panel for `axis` (`x`, `y` or `both`).
    ///
    /// # Errors
    /// [`HonenError::InvalidAxis`] for any other axis name.
    pub fn set_tick_params(&mut self, axis: &str, params: TickParams) -> HonenResult<&mut Self> {
        let axis: AxisSelector = axis.parse()?;
        if let Some(size) = params.label_size_pt {
            if !(size.is_finite() && size > 0.0) {
                return Err(HonenError::invalid_parameter(format!(
                    "tick label size must be positive, got {size}"
                )));
            }
        }
        if axis.includes_x() {
            self.current.set_x_ticks(params);
        }
        if axis.includes_y() {
            self.current.set_y_ticks(params);
        }
        Ok(self)
    }

    /// Fix the visible range of `axis` (`x`, `y` or `both`) on the current panel.
    pub fn set_lim(&mut self, axis: &str, min: f64, max: f64) -> HonenResult<&mut Self> {
        let axis: AxisSelector = axis.parse()?;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(HonenError::invalid_parameter(format!(
                "axis limits must be finite with min < max, got ({min}, {max})"
            )));
        }
        if axis.includes_x() {
            self.current.set_x_limits(min, max);
        }
        if axis.includes_y() {
            self.current.set_y_limits(min, max);
        }
        Ok(self)
    }

    /// Shorthand for `set_lim("x", min, max)`.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> HonenResult<&mut Self> {
        self.set_lim("x", min, max)
    }

    /// Shorthand for `set_lim("y", min, max)`.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> HonenResult<&mut Self> {
        self.set_lim("y", min, max)
    }

    /// Turn grid lines of the current panel on or off.
    pub fn set_grid(&mut self, on: bool) -> &mut Self {
        self.current.set_grid(on);
        self
    }

    /// Set the figure spacing.
    pub fn apply_layout(&mut self, spacing: Spacing) -> HonenResult<&mut Self> {
        spacing.validate()?;
        self.spacing = spacing;
        Ok(self)
    }

    /// Compact spacing around and between panels.
    pub fn tight_layout(&mut self) -> &mut Self {
        self.spacing = Spacing::tight();
        self
    }

    /// Pixel size of the figure at `dpi`.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let (w, h) = self.config.figsize;
        (inches_to_px(w, dpi), inches_to_px(h, dpi))
    }

    /// Write the figure at the configured resolution.
    ///
    /// The backend is chosen from the extension: `png`, `jpg`, `jpeg` and
    /// `bmp` are rasterised, `svg` is written as vector graphics.
    pub fn save(&self, path: impl AsRef<Path>) -> HonenResult<&Self> {
        self.save_with_dpi(path, self.config.dpi)
    }

    /// Write the figure at `dpi`.
    pub fn save_with_dpi(&self, path: impl AsRef<Path>, dpi: u32) -> HonenResult<&Self> {
        if dpi == 0 {
            return Err(HonenError::invalid_parameter("dpi must be > 0"));
        }
        let path = path.as_ref();
        let size = self.pixel_size(dpi);
        debug!(path = %path.display(), width = size.0, height = size.1, dpi, "saving figure");
        render::render_to_path(self, path, dpi)?;
        Ok(self)
    }

    /// Open the figure in the platform image viewer.
    ///
    /// The figure is written as a 100 dpi PNG named `honen-<pid>-<n>.png` in
    /// the system temp directory. The file is left in place for the viewer
    /// and is never removed by this crate.
    ///
    /// # Errors
    /// [`HonenError::DisplayUnavailable`] in headless mode or when no display
    /// server is reachable, [`HonenError::Io`] if the viewer launcher fails.
    pub fn show(&self) -> HonenResult<&Self> {
        if self.config.display == DisplayMode::Headless || !display_available() {
            return Err(HonenError::DisplayUnavailable);
        }
        let path = show_path();
        // screen resolution
        self.save_with_dpi(&path, 100)?;
        launch_viewer(viewer_command(&path))?;
        debug!(path = %path.display(), "opened viewer");
        Ok(self)
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_legend(position: Option<&str>) -> HonenResult<LegendPosition> {
    position.map_or(Ok(LegendPosition::Best), str::parse)
}

fn show_path() -> PathBuf {
    let n = SHOW_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!("honen-{}-{n}.png", std::process::id());
    std::env::temp_dir().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_paths_are_unique_temp_pngs() {
        let first = show_path();
        let second = show_path();
        assert_ne!(first, second);
        assert!(first.starts_with(std::env::temp_dir()));
        assert_eq!(first.extension().and_then(|e| e.to_str()), Some("png"));
    }
}
