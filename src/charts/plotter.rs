//! Figure Plotter Module
//! Draws a Figure interactively using egui_plot.

use crate::charts::Figure;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Draws figures with egui_plot.
pub struct FigurePlotter;

impl FigurePlotter {
    pub fn to_color32(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Finite points of a curve in egui_plot form.
    pub fn plot_points(points: &[(f64, f64)]) -> Vec<[f64; 2]> {
        points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| [x, y])
            .collect()
    }

    /// Draw the title and plot, filling the remaining space.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&figure.title).strong().size(16.0));
        });
        ui.add_space(4.0);

        let mut plot = Plot::new("figure")
            .x_axis_label(figure.x_label.as_str())
            .y_axis_label(figure.y_label.as_str())
            .allow_scroll(false);
        if figure.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for (i, curve) in figure.curves().iter().enumerate() {
                let color = Self::to_color32(figure.style.series_color(i));
                plot_ui.line(
                    Line::new(PlotPoints::from(Self::plot_points(&curve.points)))
                        .color(color)
                        .width(1.5)
                        .name(&curve.label),
                );
            }
        });
    }
}
