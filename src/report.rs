//! Report Generator
//! Walks the turbine output files, prints steady-state performance and
//! collects one power-coefficient curve per turbine into a figure.

use crate::charts::{Figure, PlotStyle};
use crate::data::{DatasetProcessor, LoaderError, TurbineLoader};
use crate::stats::{StatsCalculator, SummaryStatistics};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Output directory of the turbine function objects, relative to the case.
pub const DEFAULT_BASE_DIR: &str = "postProcessing/turbines/0";
pub const TURBINE_FILES: [&str; 4] = [
    "turbine1.csv",
    "turbine2.csv",
    "turbine3.csv",
    "turbine4.csv",
];
/// Default start of the steady-state window, in degrees of rotation.
pub const DEFAULT_ANGLE0: f64 = 540.0;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Inputs of one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub base_dir: PathBuf,
    /// Turbine files in turbine order.
    pub turbine_files: Vec<String>,
    pub angle0: f64,
    /// Preferred plot style; `None` falls back to ggplot.
    pub style: Option<PlotStyle>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            turbine_files: TURBINE_FILES.iter().map(|f| f.to_string()).collect(),
            angle0: DEFAULT_ANGLE0,
            style: Some(PlotStyle::Seaborn),
        }
    }
}

/// What happened to one turbine file.
#[derive(Debug, Clone, PartialEq)]
pub enum TurbineOutcome {
    Missing(PathBuf),
    Processed(SummaryStatistics),
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct Report {
    pub outcomes: Vec<TurbineOutcome>,
    pub figure: Figure,
}

impl Report {
    pub fn processed(&self) -> impl Iterator<Item = &SummaryStatistics> {
        self.outcomes.iter().filter_map(|o| match o {
            TurbineOutcome::Processed(stats) => Some(stats),
            TurbineOutcome::Missing(_) => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            TurbineOutcome::Missing(path) => Some(path),
            TurbineOutcome::Processed(_) => None,
        })
    }
}

/// Produces the turbine performance report.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Process every turbine file in order, writing the text report to `out`.
    ///
    /// A missing file is reported and skipped. Any other failure aborts the
    /// run; turbines after the failing one are not reported.
    pub fn generate<W: Write>(&self, out: &mut W) -> Result<Report, ReportError> {
        let mut figure = Figure::new(PlotStyle::resolve(self.config.style));
        let mut outcomes = Vec::with_capacity(self.config.turbine_files.len());

        // Shared by all turbines: once a short run drops it to 0.0, every
        // later turbine is averaged from 0.0 as well.
        // TODO: decide with the simulation owners whether this should reset per file.
        let mut threshold = self.config.angle0;

        for (index, file_name) in self.config.turbine_files.iter().enumerate() {
            let turbine = index + 1;
            let path = self.config.base_dir.join(file_name);

            if !path.is_file() {
                writeln!(out, "⚠️ File not found: {}", path.display())?;
                warn!(turbine, path = %path.display(), "turbine file not found, skipping");
                outcomes.push(TurbineOutcome::Missing(path));
                continue;
            }

            let dataset = DatasetProcessor::dedup_by_time(TurbineLoader::load_csv(&path)?);
            if dataset.is_empty() {
                warn!(turbine, path = %path.display(), "turbine file has no rows");
            }

            threshold =
                StatsCalculator::effective_threshold(threshold, StatsCalculator::max_angle(&dataset));
            let stats = StatsCalculator::summarize(turbine, &dataset, threshold);

            write_summary(out, &stats)?;
            info!(
                turbine,
                rows = dataset.len(),
                window_rows = stats.count,
                threshold,
                "processed turbine"
            );

            figure.add_curve(format!("Turbine {turbine}"), DatasetProcessor::cp_curve(&dataset));
            outcomes.push(TurbineOutcome::Processed(stats));
        }

        figure.finalize();
        Ok(Report { outcomes, figure })
    }
}

/// Fixed-point text for a report value. Undefined values print as `nan`.
fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Write one turbine's statistics block.
pub fn write_summary<W: Write>(out: &mut W, stats: &SummaryStatistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Turbine {} performance from {}–{} degrees:",
        stats.turbine,
        fixed(stats.threshold, 1),
        fixed(stats.max_angle, 1)
    )?;
    writeln!(out, "Mean TSR = {}", fixed(stats.mean_tsr, 2))?;
    writeln!(out, "Mean C_P = {}", fixed(stats.mean_cp, 2))?;
    writeln!(out, "Mean C_D = {}", fixed(stats.mean_cd, 2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_block_formatting() {
        let stats = SummaryStatistics {
            turbine: 2,
            threshold: 540.0,
            max_angle: 719.96,
            count: 10,
            mean_tsr: 3.104,
            mean_cp: 0.3456,
            mean_cd: 1.0,
        };
        let mut out = Vec::new();

        write_summary(&mut out, &stats).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nTurbine 2 performance from 540.0–720.0 degrees:\n\
             Mean TSR = 3.10\n\
             Mean C_P = 0.35\n\
             Mean C_D = 1.00\n"
        );
    }

    #[test]
    fn nan_means_are_printed_not_rejected() {
        let stats = SummaryStatistics {
            turbine: 1,
            threshold: 540.0,
            ..SummaryStatistics::default()
        };
        let mut out = Vec::new();

        write_summary(&mut out, &stats).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Turbine 1 performance from 540.0–nan degrees:"));
        assert!(text.contains("Mean TSR = nan\n"));
        assert!(text.contains("Mean C_P = nan\n"));
        assert!(text.contains("Mean C_D = nan\n"));
    }

    #[test]
    fn default_config_points_at_turbine_outputs() {
        let config = ReportConfig::default();
        assert_eq!(config.angle0, 540.0);
        assert_eq!(
            config.base_dir.join(&config.turbine_files[3]),
            PathBuf::from("postProcessing/turbines/0/turbine4.csv")
        );
    }
}
