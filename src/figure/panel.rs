//! Panels (subplots) and their per-panel state.

use ndarray::Array1;
use plotters::style::RGBColor;

use super::core::{LegendPosition, PlotBounds, TickParams};
use super::elements::{PanelElement, PlotElement};
use crate::conversions::index_series;
use crate::utils::format_tick;
use crate::{HonenError, HonenResult};

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Grouped-bar layout of one panel.
///
/// Groups sit at integer positions `0..num_groups`; each `add_bar` call
/// places the next series at a running offset so that the `num_series`
/// bars of a group are centred on the group position.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    num_groups: usize,
    num_series: usize,
    width: f64,
    added: usize,
    labels: Option<Vec<String>>,
}

impl BarLayout {
    /// Lay out `num_groups` groups of `num_series` bars each.
    ///
    /// `width` defaults to `0.8 / num_series`, leaving a gap between groups.
    pub fn new(num_groups: usize, num_series: usize, width: Option<f64>) -> HonenResult<Self> {
        if num_groups == 0 || num_series == 0 {
            return Err(HonenError::invalid_parameter(
                "bar layout needs at least one group and one series",
            ));
        }
        let width = width.unwrap_or(0.8 / num_series as f64);
        if !(width.is_finite() && width > 0.0) {
            return Err(HonenError::invalid_parameter(format!(
                "bar width must be positive, got {width}"
            )));
        }
        Ok(Self {
            num_groups,
            num_series,
            width,
            added: 0,
            labels: None,
        })
    }

    /// Number of bar groups.
    pub const fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Number of series per group.
    pub const fn num_series(&self) -> usize {
        self.num_series
    }

    /// Width of one bar.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Number of series already placed.
    pub const fn added(&self) -> usize {
        self.added
    }

    /// Category labels of the groups, if set.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Group index positions.
    pub fn positions(&self) -> Array1<f64> {
        index_series(self.num_groups)
    }

    /// Offset of the next series from its group position.
    pub fn next_offset(&self) -> HonenResult<f64> {
        if self.added >= self.num_series {
            return Err(HonenError::invalid_parameter(format!(
                "all {} bar series of this panel are already placed",
                self.num_series
            )));
        }
        let centre = (self.num_series as f64 - 1.0) / 2.0;
        Ok((self.added as f64 - centre) * self.width)
    }

    /// Bar centres of the next series.
    pub fn next_centers(&self) -> HonenResult<Array1<f64>> {
        let offset = self.next_offset()?;
        Ok(self.positions() + offset)
    }

    pub(crate) const fn advance(&mut self) {
        self.added += 1;
    }

    pub(crate) fn set_labels(&mut self, labels: Vec<String>) -> HonenResult<()> {
        if labels.len() != self.num_groups {
            return Err(HonenError::length_mismatch(
                "bar labels and groups",
                self.num_groups,
                labels.len(),
            ));
        }
        self.labels = Some(labels);
        Ok(())
    }

    /// Category label for a tick at `value`, if it falls on a group position.
    pub fn label_at(&self, value: f64) -> Option<&str> {
        let labels = self.labels.as_ref()?;
        let index = value.round();
        if (value - index).abs() > 1e-6 || index < 0.0 {
            return None;
        }
        labels.get(index as usize).map(String::as_str)
    }
}

/// One subplot region within a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    position: usize,
    cell: (usize, usize),
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: Option<LegendPosition>,
    x_ticks: TickParams,
    y_ticks: TickParams,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    grid: Option<bool>,
    elements: Vec<PanelElement>,
    color_index: usize,
    bar_layout: Option<BarLayout>,
}

impl Panel {
    pub(crate) fn new(position: usize, cell: (usize, usize)) -> Self {
        Self {
            position,
            cell,
            title: None,
            x_label: None,
            y_label: None,
            legend: None,
            x_ticks: TickParams::default(),
            y_ticks: TickParams::default(),
            x_limits: None,
            y_limits: None,
            grid: None,
            elements: Vec::new(),
            color_index: 0,
            bar_layout: None,
        }
    }

    /// 1-based position in the figure grid.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Zero-based `(row, col)` in the figure grid.
    pub const fn cell(&self) -> (usize, usize) {
        self.cell
    }

    /// Panel title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// X axis label.
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Y axis label.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Legend position, if a legend was requested.
    pub const fn legend(&self) -> Option<LegendPosition> {
        self.legend
    }

    /// Tick settings of the x axis.
    pub const fn x_ticks(&self) -> &TickParams {
        &self.x_ticks
    }

    /// Tick settings of the y axis.
    pub const fn y_ticks(&self) -> &TickParams {
        &self.y_ticks
    }

    /// Fixed x range.
    pub const fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    /// Fixed y range.
    pub const fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    /// Explicit grid-line setting; `None` defers to the theme.
    pub const fn grid(&self) -> Option<bool> {
        self.grid
    }

    /// Series in insertion order.
    pub fn elements(&self) -> &[PanelElement] {
        &self.elements
    }

    /// Grouped-bar layout, once prepared.
    pub const fn bar_layout(&self) -> Option<&BarLayout> {
        self.bar_layout.as_ref()
    }

    /// Returns true if at least one element carries a legend label.
    pub fn has_legend_entries(&self) -> bool {
        self.elements.iter().any(PlotElement::has_legend)
    }

    /// Union of the bounds of all elements.
    pub fn data_bounds(&self) -> Option<PlotBounds> {
        self.elements
            .iter()
            .filter_map(PlotElement::data_bounds)
            .reduce(|mut acc, b| {
                acc.expand_to_include(&b);
                acc
            })
    }

    /// Coordinate ranges to draw: padded data bounds, overridden by explicit limits.
    pub fn view_bounds(&self) -> PlotBounds {
        let padded = self
            .data_bounds()
            .map(|b| b.non_degenerate().with_margin(AXIS_MARGIN))
            .unwrap_or_default();
        let (x_min, x_max) = self.x_limits.unwrap_or((padded.x_min, padded.x_max));
        let (y_min, y_max) = self.y_limits.unwrap_or((padded.y_min, padded.y_max));
        PlotBounds::new(x_min, x_max, y_min, y_max)
    }

    /// Text of an x tick, using bar category labels when they are set.
    pub fn format_x_tick(&self, value: f64) -> String {
        match self.bar_layout.as_ref().filter(|l| l.labels().is_some()) {
            Some(layout) => layout.label_at(value).unwrap_or_default().to_string(),
            None => format_tick(value, self.x_ticks.precision),
        }
    }

    /// Text of a y tick.
    pub fn format_y_tick(&self, value: f64) -> String {
        format_tick(value, self.y_ticks.precision)
    }

    pub(crate) fn next_color(&mut self, palette: &[RGBColor]) -> RGBColor {
        let color = palette
            .get(self.color_index % palette.len().max(1))
            .copied()
            .unwrap_or(RGBColor(0, 0, 0));
        self.color_index += 1;
        color
    }

    pub(crate) fn push(&mut self, element: PanelElement) {
        self.elements.push(element);
    }

    /// Set the panel title.
    pub fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Set the x axis label.
    pub fn set_x_label(&mut self, label: String) {
        self.x_label = Some(label);
    }

    /// Set the y axis label.
    pub fn set_y_label(&mut self, label: String) {
        self.y_label = Some(label);
    }

    /// Show a legend at `position`.
    pub const fn set_legend(&mut self, position: LegendPosition) {
        self.legend = Some(position);
    }

    /// Replace the x tick settings.
    pub const fn set_x_ticks(&mut self, params: TickParams) {
        self.x_ticks = params;
    }

    /// Replace the y tick settings.
    pub const fn set_y_ticks(&mut self, params: TickParams) {
        self.y_ticks = params;
    }

    pub(crate) const fn set_x_limits(&mut self, min: f64, max: f64) {
        self.x_limits = Some((min, max));
    }

    pub(crate) const fn set_y_limits(&mut self, min: f64, max: f64) {
        self.y_limits = Some((min, max));
    }

    /// Turn grid lines on or off.
    pub const fn set_grid(&mut self, on: bool) {
        self.grid = Some(on);
    }

    pub(crate) fn set_bar_layout(&mut self, layout: BarLayout) {
        self.bar_layout = Some(layout);
    }

    pub(crate) fn bar_layout_mut(&mut self) -> HonenResult<&mut BarLayout> {
        self.bar_layout
            .as_mut()
            .ok_or(HonenError::BarsNotConfigured)
    }
}
