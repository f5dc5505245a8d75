//! Core types for the figure builder.
//!
//! Bounds, colors, line styles, themes and the small selector enums that the
//! builder parses from matplotlib-style strings.

use std::fmt;
use std::str::FromStr;

use plotters::prelude::SeriesLabelPosition;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::{HonenError, HonenResult};

/// Bounds for plot data in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl PlotBounds {
    /// Create bounds from explicit edges.
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Smallest bounds containing every finite point, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<Self>, (x, y)| match acc {
                None => Some(Self::new(x, x, y, y)),
                Some(mut b) => {
                    b.expand_to_include(&Self::new(x, x, y, y));
                    Some(b)
                }
            })
    }

    /// Grow these bounds to cover `other`.
    pub fn expand_to_include(&mut self, other: &PlotBounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Pad each axis by `margin_percent` of its span.
    pub fn with_margin(&self, margin_percent: f64) -> Self {
        let x_margin = (self.x_max - self.x_min) * margin_percent;
        let y_margin = (self.y_max - self.y_min) * margin_percent;
        Self {
            x_min: self.x_min - x_margin,
            x_max: self.x_max + x_margin,
            y_min: self.y_min - y_margin,
            y_max: self.y_max + y_margin,
        }
    }

    /// Widen zero-span axes so that a coordinate system can be built on them.
    pub fn non_degenerate(&self) -> Self {
        let widen = |lo: f64, hi: f64| {
            if hi > lo {
                (lo, hi)
            } else {
                let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
                (lo - pad, hi + pad)
            }
        };
        let (x_min, x_max) = widen(self.x_min, self.x_max);
        let (y_min, y_max) = widen(self.y_min, self.y_max);
        Self::new(x_min, x_max, y_min, y_max)
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// A color accepted by the builder, parsed from matplotlib-style names.
///
/// Accepts `#rrggbb`, the single letters `b g r c m y k w`, the cycle
/// references `C0`..`C9`, `tab:` names and a handful of CSS names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotColor(pub RGBColor);

impl PlotColor {
    /// The wrapped plotters color.
    pub const fn rgb(&self) -> RGBColor {
        self.0
    }
}

impl From<RGBColor> for PlotColor {
    fn from(color: RGBColor) -> Self {
        Self(color)
    }
}

/// matplotlib's `tab10` cycle.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(148, 103, 189), // purple
    RGBColor(140, 86, 75),   // brown
    RGBColor(227, 119, 194), // pink
    RGBColor(127, 127, 127), // gray
    RGBColor(188, 189, 34),  // olive
    RGBColor(23, 190, 207),  // cyan
];

const TAB_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for PlotColor {
    type Err = HonenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let color = match name.as_str() {
            "b" => Some(RGBColor(0, 0, 255)),
            "g" => Some(RGBColor(0, 128, 0)),
            "r" => Some(RGBColor(255, 0, 0)),
            "c" => Some(RGBColor(0, 191, 191)),
            "m" => Some(RGBColor(191, 0, 191)),
            "y" => Some(RGBColor(191, 191, 0)),
            "k" | "black" => Some(RGBColor(0, 0, 0)),
            "w" | "white" => Some(RGBColor(255, 255, 255)),
            "blue" => Some(RGBColor(0, 0, 255)),
            "green" => Some(RGBColor(0, 128, 0)),
            "red" => Some(RGBColor(255, 0, 0)),
            "cyan" => Some(RGBColor(0, 255, 255)),
            "magenta" => Some(RGBColor(255, 0, 255)),
            "yellow" => Some(RGBColor(255, 255, 0)),
            "orange" => Some(RGBColor(255, 165, 0)),
            "purple" => Some(RGBColor(128, 0, 128)),
            "brown" => Some(RGBColor(165, 42, 42)),
            "pink" => Some(RGBColor(255, 192, 203)),
            "gray" | "grey" => Some(RGBColor(128, 128, 128)),
            "olive" => Some(RGBColor(128, 128, 0)),
            other => {
                if let Some(hex) = other.strip_prefix('#') {
                    parse_hex(hex)
                } else if let Some(tab) = other.strip_prefix("tab:") {
                    TAB_NAMES.iter().position(|n| *n == tab).map(|i| TAB10[i])
                } else if let Some(idx) = other.strip_prefix('c') {
                    idx.parse::<usize>()
                        .ok()
                        .and_then(|i| TAB10.get(i).copied())
                } else {
                    None
                }
            }
        };
        color
            .map(PlotColor)
            .ok_or_else(|| HonenError::invalid_parameter(format!("unknown color '{s}'")))
    }
}

/// Line dash patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyleType {
    /// Continuous line (`-`).
    #[default]
    Solid,
    /// Long dashes (`--`).
    Dashed,
    /// Short dots (`:`).
    Dotted,
}

impl FromStr for LineStyleType {
    type Err = HonenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(Self::Solid),
            "--" | "dashed" => Ok(Self::Dashed),
            ":" | "dotted" => Ok(Self::Dotted),
            other => Err(HonenError::invalid_parameter(format!(
                "unknown line style '{other}'"
            ))),
        }
    }
}

/// Style configuration for line elements
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Explicit color; `None` takes the next color of the panel's cycle.
    pub color: Option<PlotColor>,
    /// Stroke width in points.
    pub width_pt: f64,
    /// Dash pattern.
    pub style: LineStyleType,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            width_pt: 1.5,
            style: LineStyleType::Solid,
        }
    }
}

impl LineStyle {
    /// Use a fixed color instead of the palette.
    pub const fn with_color(mut self, color: PlotColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Line width in points.
    pub const fn with_width(mut self, width_pt: f64) -> Self {
        self.width_pt = width_pt;
        self
    }

    /// Dash pattern.
    pub const fn with_style(mut self, style: LineStyleType) -> Self {
        self.style = style;
        self
    }
}

/// Named figure styles, mirroring the matplotlib style sheets of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// White background, `tab10` palette.
    #[default]
    Default,
    /// Black background with light text.
    DarkBackground,
    /// Gray panels with a white grid.
    Ggplot,
    /// Shades of gray only.
    Grayscale,
    /// White background, primary colors, no grid.
    Classic,
}

impl Style {
    /// Name as accepted by [`Style::from_str`].
    pub const fn name(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::DarkBackground => "dark_background",
            Style::Ggplot => "ggplot",
            Style::Grayscale => "grayscale",
            Style::Classic => "classic",
        }
    }

    /// Colors and sizes used when rendering with this style.
    pub fn theme(&self) -> PlotTheme {
        match self {
            Style::Default => PlotTheme::default(),
            Style::DarkBackground => PlotTheme::dark(),
            Style::Ggplot => PlotTheme::ggplot(),
            Style::Grayscale => PlotTheme::grayscale(),
            Style::Classic => PlotTheme::classic(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = HonenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(Style::Default),
            "dark_background" | "dark" => Ok(Style::DarkBackground),
            "ggplot" => Ok(Style::Ggplot),
            "grayscale" => Ok(Style::Grayscale),
            "classic" => Ok(Style::Classic),
            other => Err(HonenError::invalid_parameter(format!(
                "unknown style '{other}'"
            ))),
        }
    }
}

/// Theme configuration for plots
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTheme {
    /// Fill behind the whole figure.
    pub figure_background: RGBColor,
    /// Fill of each plotting area.
    pub panel_background: RGBColor,
    /// Titles, labels and tick text.
    pub text_color: RGBColor,
    /// Axis lines and legend borders.
    pub axis_color: RGBColor,
    /// Grid lines.
    pub grid_color: RGBColor,
    /// Font family name passed to plotters.
    pub font_family: String,
    /// Panel title size in points; the figure title is 20% larger.
    pub title_size_pt: f64,
    /// Axis label size in points.
    pub label_size_pt: f64,
    /// Tick label and legend text size in points.
    pub tick_size_pt: f64,
    /// Grid lines drawn unless a panel turns them off.
    pub grid: bool,
    /// Color cycle for series without an explicit color.
    pub palette: Vec<RGBColor>,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            figure_background: RGBColor(255, 255, 255),
            panel_background: RGBColor(255, 255, 255),
            text_color: RGBColor(0, 0, 0),
            axis_color: RGBColor(0, 0, 0),
            grid_color: RGBColor(176, 176, 176),
            font_family: "sans-serif".to_string(),
            title_size_pt: 12.0,
            label_size_pt: 10.0,
            tick_size_pt: 10.0,
            grid: false,
            palette: TAB10.to_vec(),
        }
    }
}

/// Theme variants
impl PlotTheme {
    /// Theme of the `dark_background` style.
    pub fn dark() -> Self {
        Self {
            figure_background: RGBColor(0, 0, 0),
            panel_background: RGBColor(0, 0, 0),
            text_color: RGBColor(255, 255, 255),
            axis_color: RGBColor(255, 255, 255),
            grid_color: RGBColor(255, 255, 255),
            palette: vec![
                RGBColor(141, 211, 199),
                RGBColor(254, 255, 179),
                RGBColor(191, 187, 217),
                RGBColor(250, 129, 116),
                RGBColor(129, 177, 210),
                RGBColor(253, 180, 98),
                RGBColor(179, 222, 105),
                RGBColor(188, 130, 189),
                RGBColor(204, 235, 196),
                RGBColor(255, 237, 111),
            ],
            ..Self::default()
        }
    }

    /// Theme of the `ggplot` style.
    pub fn ggplot() -> Self {
        Self {
            panel_background: RGBColor(229, 229, 229),
            text_color: RGBColor(85, 85, 85),
            axis_color: RGBColor(255, 255, 255),
            grid_color: RGBColor(255, 255, 255),
            title_size_pt: 14.4,
            label_size_pt: 12.0,
            grid: true,
            palette: vec![
                RGBColor(226, 74, 51),
                RGBColor(52, 138, 189),
                RGBColor(152, 142, 213),
                RGBColor(119, 119, 119),
                RGBColor(251, 193, 94),
                RGBColor(142, 186, 66),
                RGBColor(255, 181, 184),
            ],
            ..Self::default()
        }
    }

    /// Theme of the `grayscale` style.
    pub fn grayscale() -> Self {
        Self {
            grid_color: RGBColor(178, 178, 178),
            palette: vec![
                RGBColor(0, 0, 0),
                RGBColor(102, 102, 102),
                RGBColor(153, 153, 153),
                RGBColor(178, 178, 178),
            ],
            ..Self::default()
        }
    }

    /// Theme of the `classic` style.
    pub fn classic() -> Self {
        Self {
            grid_color: RGBColor(0, 0, 0),
            title_size_pt: 14.0,
            label_size_pt: 12.0,
            tick_size_pt: 12.0,
            palette: vec![
                RGBColor(0, 0, 255),
                RGBColor(0, 128, 0),
                RGBColor(255, 0, 0),
                RGBColor(0, 191, 191),
                RGBColor(191, 0, 191),
                RGBColor(191, 191, 0),
                RGBColor(0, 0, 0),
            ],
            ..Self::default()
        }
    }
}

/// Where a legend box is placed, using matplotlib's location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    /// matplotlib picks the least crowded corner; this renderer uses the upper right.
    #[default]
    Best,
    /// Top right corner.
    UpperRight,
    /// Top left corner.
    UpperLeft,
    /// Bottom left corner.
    LowerLeft,
    /// Bottom right corner.
    LowerRight,
    /// Right edge, same placement as `CenterRight`.
    Right,
    /// Left edge, vertically centred.
    CenterLeft,
    /// Right edge, vertically centred.
    CenterRight,
    /// Bottom edge, horizontally centred.
    LowerCenter,
    /// Top edge, horizontally centred.
    UpperCenter,
    /// Middle of the area.
    Center,
}

impl LegendPosition {
    /// Equivalent plotters series-label position for panel legends.
    pub const fn series_label_position(&self) -> SeriesLabelPosition {
        match self {
            LegendPosition::Best | LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
            LegendPosition::Right | LegendPosition::CenterRight => {
                SeriesLabelPosition::MiddleRight
            }
            LegendPosition::CenterLeft => SeriesLabelPosition::MiddleLeft,
            LegendPosition::LowerCenter => SeriesLabelPosition::LowerMiddle,
            LegendPosition::UpperCenter => SeriesLabelPosition::UpperMiddle,
            LegendPosition::Center => SeriesLabelPosition::MiddleMiddle,
        }
    }

    /// Top-left pixel of a `box_size` legend inside an `area` with `pad` pixels of inset.
    pub fn anchor(&self, area: (u32, u32), box_size: (u32, u32), pad: u32) -> (i32, i32) {
        let (w, h) = (area.0 as i32, area.1 as i32);
        let (bw, bh) = (box_size.0 as i32, box_size.1 as i32);
        let pad = pad as i32;

        let left = pad;
        let h_center = (w - bw) / 2;
        let right = w - bw - pad;
        let top = pad;
        let v_center = (h - bh) / 2;
        let bottom = h - bh - pad;

        match self {
            LegendPosition::Best | LegendPosition::UpperRight => (right, top),
            LegendPosition::UpperLeft => (left, top),
            LegendPosition::LowerLeft => (left, bottom),
            LegendPosition::LowerRight => (right, bottom),
            LegendPosition::Right | LegendPosition::CenterRight => (right, v_center),
            LegendPosition::CenterLeft => (left, v_center),
            LegendPosition::LowerCenter => (h_center, bottom),
            LegendPosition::UpperCenter => (h_center, top),
            LegendPosition::Center => (h_center, v_center),
        }
    }
}

impl FromStr for LegendPosition {
    type Err = HonenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" => Ok(Self::Best),
            "upper right" => Ok(Self::UpperRight),
            "upper left" => Ok(Self::UpperLeft),
            "lower left" => Ok(Self::LowerLeft),
            "lower right" => Ok(Self::LowerRight),
            "right" => Ok(Self::Right),
            "center left" => Ok(Self::CenterLeft),
            "center right" => Ok(Self::CenterRight),
            "lower center" => Ok(Self::LowerCenter),
            "upper center" => Ok(Self::UpperCenter),
            "center" => Ok(Self::Center),
            other => Err(HonenError::invalid_parameter(format!(
                "unknown legend position '{other}'"
            ))),
        }
    }
}

/// Axis selector for tick and limit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// Both axes.
    Both,
}

impl AxisSelector {
    /// Returns true if the x axis is selected.
    pub const fn includes_x(&self) -> bool {
        matches!(self, AxisSelector::X | AxisSelector::Both)
    }

    /// Returns true if the y axis is selected.
    pub const fn includes_y(&self) -> bool {
        matches!(self, AxisSelector::Y | AxisSelector::Both)
    }
}

impl FromStr for AxisSelector {
    type Err = HonenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(AxisSelector::X),
            "y" => Ok(AxisSelector::Y),
            "both" => Ok(AxisSelector::Both),
            _ => Err(HonenError::InvalidAxis(s.to_string())),
        }
    }
}

/// Tick configuration for one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickParams {
    /// Tick label size in points; the theme's size when `None`.
    pub label_size_pt: Option<f64>,
    /// Upper bound on the number of tick labels.
    pub count: Option<usize>,
    /// Fixed number of decimals in tick labels.
    pub precision: Option<usize>,
    /// Draw tick labels.
    pub visible: bool,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            label_size_pt: None,
            count: None,
            precision: None,
            visible: true,
        }
    }
}

impl TickParams {
    /// Tick label size in points.
    pub const fn with_label_size(mut self, size_pt: f64) -> Self {
        self.label_size_pt = Some(size_pt);
        self
    }

    /// Upper bound on the number of tick labels.
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Fixed number of decimals.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Hide the tick labels.
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Figure spacing, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Blank border around the whole figure.
    pub outer_margin_pt: f64,
    /// Gap between neighbouring panels.
    pub panel_gap_pt: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            outer_margin_pt: 10.0,
            panel_gap_pt: 18.0,
        }
    }
}

impl Spacing {
    /// Compact spacing, the counterpart of matplotlib's `tight_layout`.
    pub const fn tight() -> Self {
        Self {
            outer_margin_pt: 3.0,
            panel_gap_pt: 6.0,
        }
    }

    pub(crate) fn validate(&self) -> HonenResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.outer_margin_pt) || !ok(self.panel_gap_pt) {
            return Err(HonenError::invalid_parameter(
                "spacing must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points_skips_non_finite() {
        let points = vec![(0.0, 1.0), (f64::NAN, 5.0), (2.0, -1.0)];
        let b = PlotBounds::from_points(points).unwrap();
        assert_eq!(b, PlotBounds::new(0.0, 2.0, -1.0, 1.0));
        assert!(PlotBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_margin_and_degenerate() {
        let b = PlotBounds::new(0.0, 10.0, 0.0, 2.0).with_margin(0.05);
        assert_eq!(b, PlotBounds::new(-0.5, 10.5, -0.1, 2.1));

        let flat = PlotBounds::new(1.0, 1.0, 0.0, 0.0).non_degenerate();
        assert!(flat.x_max > flat.x_min);
        assert_eq!((flat.y_min, flat.y_max), (-0.5, 0.5));
    }

    #[test]
    fn test_color_parsing() {
        let rgb = |name: &str| name.parse::<PlotColor>().map(|c| c.rgb());
        assert_eq!(rgb("blue").unwrap(), RGBColor(0, 0, 255));
        assert_eq!(rgb("#FF8000").unwrap(), RGBColor(255, 128, 0));
        assert_eq!(rgb("C1").unwrap(), TAB10[1]);
        assert_eq!(rgb("C9").unwrap(), TAB10[9]);
        assert!(rgb("C10").is_err());
        assert_eq!(rgb("tab:green").unwrap(), TAB10[2]);
        assert!(rgb("#12").is_err());
        assert!(rgb("chartreuse-ish").is_err());
    }

    #[test]
    fn test_style_names_round_trip_through_from_str() {
        for style in [
            Style::Default,
            Style::DarkBackground,
            Style::Ggplot,
            Style::Grayscale,
            Style::Classic,
        ] {
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
            assert!(!style.theme().palette.is_empty());
        }
        assert!("seaborn-v9".parse::<Style>().is_err());
    }

    #[test]
    fn test_axis_selector() {
        assert_eq!("X".parse::<AxisSelector>().unwrap(), AxisSelector::X);
        assert!("both".parse::<AxisSelector>().unwrap().includes_y());
        match "z".parse::<AxisSelector>() {
            Err(HonenError::InvalidAxis(name)) => assert_eq!(name, "z"),
            other => panic!("expected InvalidAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_legend_position_parsing_and_anchor() {
        assert_eq!(
            "upper left".parse::<LegendPosition>().unwrap(),
            LegendPosition::UpperLeft
        );
        assert!("top".parse::<LegendPosition>().is_err());

        let area = (200, 100);
        let size = (50, 20);
        assert_eq!(LegendPosition::UpperLeft.anchor(area, size, 5), (5, 5));
        assert_eq!(LegendPosition::LowerRight.anchor(area, size, 5), (145, 75));
        assert_eq!(LegendPosition::Center.anchor(area, size, 5), (75, 40));
    }

    #[test]
    fn test_line_style_parsing() {
        let parse = |s: &str| s.parse::<LineStyleType>();
        assert_eq!(parse("--").unwrap(), LineStyleType::Dashed);
        assert_eq!(parse("dotted").unwrap(), LineStyleType::Dotted);
        assert!(parse("-.").is_err());
    }

    #[test]
    fn test_spacing_validation() {
        assert!(Spacing::tight().validate().is_ok());
        let bad = Spacing {
            outer_margin_pt: -1.0,
            ..Spacing::default()
        };
        assert!(bad.validate().is_err());
    }
}
