//! Plot styling chosen once at startup. Styling never affects statistics.

/// Colour scheme applied to every rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    /// Seaborn "darkgrid" look with the "deep" palette.
    #[default]
    Seaborn,
    /// Built-in ggplot look, used when no preferred style is configured.
    Ggplot,
}

const SEABORN_PALETTE: [[u8; 3]; 6] = [
    [76, 114, 176],
    [221, 132, 82],
    [85, 168, 104],
    [196, 78, 82],
    [129, 114, 179],
    [147, 120, 96],
];

const GGPLOT_PALETTE: [[u8; 3]; 7] = [
    [226, 74, 51],
    [52, 138, 189],
    [152, 142, 213],
    [119, 119, 119],
    [251, 193, 94],
    [142, 186, 66],
    [255, 181, 184],
];

impl PlotStyle {
    /// Use the preferred style when one is configured, else fall back to ggplot.
    pub fn resolve(preferred: Option<PlotStyle>) -> PlotStyle {
        preferred.unwrap_or(PlotStyle::Ggplot)
    }

    /// Plot-area background.
    pub fn background(self) -> [u8; 3] {
        match self {
            PlotStyle::Seaborn => [234, 234, 242],
            PlotStyle::Ggplot => [229, 229, 229],
        }
    }

    pub fn grid(self) -> [u8; 3] {
        [255, 255, 255]
    }

    /// Line colour for the curve at `index`, cycling through the palette.
    pub fn series_color(self, index: usize) -> [u8; 3] {
        match self {
            PlotStyle::Seaborn => SEABORN_PALETTE[index % SEABORN_PALETTE.len()],
            PlotStyle::Ggplot => GGPLOT_PALETTE[index % GGPLOT_PALETTE.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_configured_style() {
        assert_eq!(PlotStyle::resolve(Some(PlotStyle::Seaborn)), PlotStyle::Seaborn);
        assert_eq!(PlotStyle::resolve(None), PlotStyle::Ggplot);
    }

    #[test]
    fn palette_cycles() {
        let style = PlotStyle::Ggplot;
        assert_eq!(style.series_color(0), style.series_color(GGPLOT_PALETTE.len()));
        assert_ne!(style.series_color(0), style.series_color(1));
    }
}
