//! Series elements stored on a panel.
//!
//! Elements are plain data; the renderer turns them into plotters series.

use ndarray::Array1;
use plotters::style::RGBColor;

use super::core::{LineStyleType, PlotBounds};
use crate::statistics::ReplicateSummary;

/// Behaviour shared by every element a panel can hold.
pub trait PlotElement {
    /// Get the data bounds of this element, `None` if it has no finite points.
    fn data_bounds(&self) -> Option<PlotBounds>;

    /// Legend label, if the element should appear in a legend.
    fn label(&self) -> Option<&str>;

    /// Color used for the element and its legend swatch.
    fn color(&self) -> RGBColor;

    /// Check if this element should be included in legend
    fn has_legend(&self) -> bool {
        self.label().is_some()
    }
}

/// A plain line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    /// X coordinates.
    pub x: Array1<f64>,
    /// Y coordinates, same length as `x`.
    pub y: Array1<f64>,
    /// Line color.
    pub color: RGBColor,
    /// Line width in points.
    pub width_pt: f64,
    /// Dash pattern.
    pub style: LineStyleType,
    /// Legend label.
    pub label: Option<String>,
}

impl PlotElement for LineElement {
    fn data_bounds(&self) -> Option<PlotBounds> {
        PlotBounds::from_points(self.x.iter().copied().zip(self.y.iter().copied()))
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn color(&self) -> RGBColor {
        self.color
    }
}

/// A mean line with a shaded ±1 std band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandElement {
    /// X coordinates, one per replicate column.
    pub x: Array1<f64>,
    /// Mean and std across replicate rows.
    pub summary: ReplicateSummary,
    /// Color of the mean line and the band.
    pub color: RGBColor,
    /// Opacity of the band fill.
    pub alpha: f64,
    /// Legend label.
    pub label: Option<String>,
}

impl BandElement {
    /// Outline of the band: upper edge left to right, then lower edge back.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let upper = self.summary.upper();
        let lower = self.summary.lower();
        self.x
            .iter()
            .zip(upper.iter())
            .map(|(&x, &y)| (x, y))
            .chain(
                self.x
                    .iter()
                    .zip(lower.iter())
                    .rev()
                    .map(|(&x, &y)| (x, y)),
            )
            .collect()
    }

    /// Points of the mean line.
    pub fn mean_line(&self) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .copied()
            .zip(self.summary.mean.iter().copied())
            .collect()
    }
}

impl PlotElement for BandElement {
    fn data_bounds(&self) -> Option<PlotBounds> {
        PlotBounds::from_points(self.outline())
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn color(&self) -> RGBColor {
        self.color
    }
}

/// One series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarElement {
    /// Bar centres on the x axis.
    pub centers: Array1<f64>,
    /// Bar heights.
    pub heights: Array1<f64>,
    /// Width of every bar in data units.
    pub width: f64,
    /// Half-length of the error bar for each bar.
    pub errors: Option<Array1<f64>>,
    /// Fill color.
    pub color: RGBColor,
    /// Legend label.
    pub label: Option<String>,
}

impl BarElement {
    /// `(left, right, height)` of every bar.
    pub fn rects(&self) -> Vec<(f64, f64, f64)> {
        let half = self.width / 2.0;
        self.centers
            .iter()
            .zip(self.heights.iter())
            .map(|(&c, &h)| (c - half, c + half, h))
            .collect()
    }

    /// `(center, low, mid, high)` of every error bar.
    pub fn error_bars(&self) -> Vec<(f64, f64, f64, f64)> {
        match &self.errors {
            Some(errors) => self
                .centers
                .iter()
                .zip(self.heights.iter())
                .zip(errors.iter())
                .map(|((&c, &h), &e)| (c, h - e, h, h + e))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl PlotElement for BarElement {
    fn data_bounds(&self) -> Option<PlotBounds> {
        let bars = self
            .rects()
            .into_iter()
            .flat_map(|(l, r, h)| [(l, 0.0), (r, h)]);
        let whiskers = self
            .error_bars()
            .into_iter()
            .flat_map(|(c, lo, _, hi)| [(c, lo), (c, hi)]);
        PlotBounds::from_points(bars.chain(whiskers))
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn color(&self) -> RGBColor {
        self.color
    }
}

/// Any element a panel can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelElement {
    /// Line series.
    Line(LineElement),
    /// Mean line with a ±1 std band.
    Band(BandElement),
    /// One series of grouped bars.
    Bar(BarElement),
}

impl PanelElement {
    fn inner(&self) -> &dyn PlotElement {
        match self {
            PanelElement::Line(e) => e,
            PanelElement::Band(e) => e,
            PanelElement::Bar(e) => e,
        }
    }
}

impl PlotElement for PanelElement {
    fn data_bounds(&self) -> Option<PlotBounds> {
        self.inner().data_bounds()
    }

    fn label(&self) -> Option<&str> {
        self.inner().label()
    }

    fn color(&self) -> RGBColor {
        self.inner().color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn bar(errors: Option<Array1<f64>>) -> BarElement {
        BarElement {
            centers: array![0.0, 1.0],
            heights: array![2.0, -1.0],
            width: 0.4,
            errors,
            color: RGBColor(0, 0, 0),
            label: None,
        }
    }

    #[test]
    fn test_band_outline_is_closed_loop_order() {
        let band = BandElement {
            x: array![0.0, 1.0],
            summary: ReplicateSummary {
                mean: array![1.0, 2.0],
                std: array![0.5, 0.5],
            },
            color: RGBColor(0, 0, 255),
            alpha: 0.5,
            label: Some("runs".to_string()),
        };
        assert_eq!(
            band.outline(),
            vec![(0.0, 1.5), (1.0, 2.5), (1.0, 1.5), (0.0, 0.5)]
        );
        let b = band.data_bounds().unwrap();
        assert_eq!((b.y_min, b.y_max), (0.5, 2.5));
        assert!(band.has_legend());
    }

    #[test]
    fn test_bar_bounds_include_baseline_and_errors() {
        let plain = bar(None).data_bounds().unwrap();
        assert_eq!(plain, PlotBounds::new(-0.2, 1.2, -1.0, 2.0));

        let with_err = bar(Some(array![0.5, 0.5])).data_bounds().unwrap();
        assert_eq!((with_err.y_min, with_err.y_max), (-1.5, 2.5));
    }

    #[test]
    fn test_line_bounds_and_enum_delegation() {
        let line = PanelElement::Line(LineElement {
            x: array![0.0, 1.0, 2.0],
            y: array![3.0, -1.0, 4.0],
            color: RGBColor(1, 2, 3),
            width_pt: 1.5,
            style: LineStyleType::Solid,
            label: None,
        });
        assert_eq!(
            line.data_bounds(),
            Some(PlotBounds::new(0.0, 2.0, -1.0, 4.0))
        );
        assert_eq!(line.color(), RGBColor(1, 2, 3));
        assert!(!line.has_legend());
    }
}
