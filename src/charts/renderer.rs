//! Static Chart Renderer
//! Renders a Figure to a PNG file with plotters.
//!
//! Layout follows the interactive window: caption on top, one line per
//! curve, legend in the upper right. Label areas are sized from the label
//! text so axis descriptions never overlap tick labels.

use crate::charts::Figure;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// 10 x 6 inches at 100 dpi
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE_TITLE: u32 = 24;
const FONT_SIZE_AXIS_LABEL: u32 = 18;
const FONT_SIZE_TICK: u32 = 14;
const FONT_SIZE_LEGEND: u32 = 14;
const LINE_WIDTH: u32 = 2;
const MARGIN: u32 = 15;
const CHAR_WIDTH_RATIO: f64 = 0.6;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw figure: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Renders figures as PNG images.
#[derive(Debug, Clone, Copy)]
pub struct PngRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PngRenderer {
    /// Pixels to reserve below the plot for tick labels and the x description.
    pub fn x_label_area(figure: &Figure) -> u32 {
        let desc = if figure.x_label.is_empty() {
            0
        } else {
            FONT_SIZE_AXIS_LABEL + 10
        };
        FONT_SIZE_TICK + 10 + desc
    }

    /// Pixels to reserve left of the plot, from the widest y tick label.
    pub fn y_label_area(figure: &Figure) -> u32 {
        let (y_min, y_max) = figure.y_range();
        let widest = Self::tick_label(y_min).len().max(Self::tick_label(y_max).len());
        let ticks = (widest as f64 * FONT_SIZE_TICK as f64 * CHAR_WIDTH_RATIO).ceil() as u32;
        let desc = if figure.y_label.is_empty() {
            0
        } else {
            FONT_SIZE_AXIS_LABEL + 10
        };
        ticks + 10 + desc
    }

    fn tick_label(v: f64) -> String {
        format!("{:.2}", v)
    }

    fn rgb(c: [u8; 3]) -> RGBColor {
        RGBColor(c[0], c[1], c[2])
    }

    pub fn render_to_file(&self, figure: &Figure, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (x_min, x_max) = figure.x_range();
        let (y_min, y_max) = figure.y_range();

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, (FONT_FAMILY, FONT_SIZE_TITLE))
            .margin(MARGIN)
            .x_label_area_size(Self::x_label_area(figure))
            .y_label_area_size(Self::y_label_area(figure))
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(draw_err)?;

        chart
            .plotting_area()
            .fill(&Self::rgb(figure.style.background()))
            .map_err(draw_err)?;

        let grid = Self::rgb(figure.style.grid());
        chart
            .configure_mesh()
            .x_desc(&figure.x_label)
            .y_desc(&figure.y_label)
            .y_label_formatter(&|y| Self::tick_label(*y))
            .bold_line_style(grid.mix(1.0))
            .light_line_style(grid.mix(0.5))
            .label_style((FONT_FAMILY, FONT_SIZE_TICK))
            .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
            .draw()
            .map_err(draw_err)?;

        for (i, curve) in figure.curves().iter().enumerate() {
            let color = Self::rgb(figure.style.series_color(i));
            let points: Vec<(f64, f64)> = curve
                .points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();

            chart
                .draw_series(LineSeries::new(points, color.stroke_width(LINE_WIDTH)))
                .map_err(draw_err)?
                .label(&curve.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
                });
        }

        if figure.show_legend && !figure.curves().is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .label_font((FONT_FAMILY, FONT_SIZE_LEGEND))
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        info!(path = %path.display(), "rendered figure");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PlotStyle;

    #[test]
    fn label_areas_grow_with_descriptions() {
        let mut figure = Figure::new(PlotStyle::Seaborn);
        figure.add_curve("Turbine 1", vec![(0.0, 0.35), (720.0, 0.35)]);
        let bare_x = PngRenderer::x_label_area(&figure);
        let bare_y = PngRenderer::y_label_area(&figure);

        figure.finalize();

        assert!(PngRenderer::x_label_area(&figure) > bare_x);
        assert!(PngRenderer::y_label_area(&figure) > bare_y);
    }

    #[test]
    fn y_label_area_fits_widest_tick() {
        let mut narrow = Figure::new(PlotStyle::Ggplot);
        narrow.add_curve("Turbine 1", vec![(0.0, 0.1), (1.0, 0.2)]);
        let mut wide = Figure::new(PlotStyle::Ggplot);
        wide.add_curve("Turbine 1", vec![(0.0, -1000.0), (1.0, 2000.0)]);

        assert!(PngRenderer::y_label_area(&wide) > PngRenderer::y_label_area(&narrow));
    }
}
