//! Figure Module
//! The shared figure that accumulates one power-coefficient curve per turbine.

use crate::charts::PlotStyle;

pub const X_LABEL: &str = "Azimuthal angle (degrees)";
/// Power coefficient, C with subscript P.
pub const Y_LABEL: &str = "C\u{209A}";
pub const TITLE: &str = "Power Coefficient vs Azimuthal Angle for 2×2 VAWT Array";

/// Calculate plot range with padding.
/// Adds 5% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
    (min - padding, max + padding)
}

/// One labelled line on the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Plot description shared by the PNG renderer and the interactive window.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub style: PlotStyle,
    curves: Vec<Curve>,
}

impl Figure {
    pub fn new(style: PlotStyle) -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            show_legend: false,
            style,
            curves: Vec::new(),
        }
    }

    pub fn add_curve(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>) {
        self.curves.push(Curve {
            label: label.into(),
            points,
        });
    }

    /// Apply axis labels, title and legend once all curves are in.
    pub fn finalize(&mut self) {
        self.x_label = X_LABEL.to_string();
        self.y_label = Y_LABEL.to_string();
        self.title = TITLE.to_string();
        self.show_legend = true;
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Padded x range over all finite points.
    pub fn x_range(&self) -> (f64, f64) {
        self.range_of(|&(x, _)| x)
    }

    /// Padded y range over all finite points.
    pub fn y_range(&self) -> (f64, f64) {
        self.range_of(|&(_, y)| y)
    }

    fn range_of(&self, pick: impl Fn(&(f64, f64)) -> f64) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self
            .curves
            .iter()
            .flat_map(|c| c.points.iter())
            .map(&pick)
            .filter(|v| v.is_finite())
        {
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            return (0.0, 1.0);
        }
        calculate_range(min, max)
    }
}
