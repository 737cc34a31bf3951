//! Figure Window
//! Native window that displays the finished report figure.

use crate::charts::{Figure, FigurePlotter};
use eframe::egui;

const WINDOW_TITLE: &str = "VAWT Array Report";

/// Read-only viewer for one figure.
pub struct FigureWindow {
    figure: Figure,
}

impl FigureWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            FigurePlotter::draw_figure(ui, &self.figure);
        });
    }
}

/// Open a window showing `figure` and block until it is closed.
pub fn show_figure(figure: Figure) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(FigureWindow::new(cc, figure)))),
    )
}
