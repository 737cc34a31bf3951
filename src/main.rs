//! VAWT Report - Post-process a 2x2 VAWT actuator line simulation.
//!
//! Run from the case directory. Prints per-turbine statistics and shows the
//! C_P vs azimuthal angle figure.

use anyhow::{Context, Result};
use std::io;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vawt_report::charts::PngRenderer;
use vawt_report::gui;
use vawt_report::report::ReportGenerator;

const FALLBACK_PNG: &str = "vawt_cp_vs_angle.png";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let generator = ReportGenerator::default();
    let report = generator
        .generate(&mut io::stdout().lock())
        .context("failed to generate turbine report")?;

    // Fall back to an image in the platform viewer when no window can be opened.
    if let Err(err) = gui::show_figure(report.figure.clone()) {
        warn!(error = %err, "interactive window unavailable, rendering PNG instead");
        let path = std::env::temp_dir().join(FALLBACK_PNG);
        PngRenderer::default()
            .render_to_file(&report.figure, &path)
            .context("failed to render figure")?;
        open::that(&path).with_context(|| format!("failed to open {}", path.display()))?;
    }

    Ok(())
}
