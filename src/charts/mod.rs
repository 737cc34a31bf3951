//! Charts module - figure model and rendering

mod figure;
mod plotter;
mod renderer;
mod style;

pub use figure::{calculate_range, Curve, Figure, TITLE, X_LABEL, Y_LABEL};
pub use plotter::FigurePlotter;
pub use renderer::{PngRenderer, RenderError};
pub use style::PlotStyle;
