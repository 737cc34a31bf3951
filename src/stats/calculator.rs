//! Statistics Calculator Module
//! Steady-state means of turbine performance over an azimuthal window.

use crate::data::{DatasetProcessor, TurbineDataset};
use statrs::statistics::Statistics;

/// Mean performance of one turbine over `threshold..=max_angle` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    /// 1-based turbine index.
    pub turbine: usize,
    pub threshold: f64,
    pub max_angle: f64,
    /// Rows inside the window.
    pub count: usize,
    pub mean_tsr: f64,
    pub mean_cp: f64,
    pub mean_cd: f64,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self {
            turbine: 0,
            threshold: f64::NAN,
            max_angle: f64::NAN,
            count: 0,
            mean_tsr: f64::NAN,
            mean_cp: f64::NAN,
            mean_cd: f64::NAN,
        }
    }
}

/// Handles the per-turbine statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Largest azimuthal angle, ignoring NaN. NaN for a dataset without angles.
    pub fn max_angle(dataset: &TurbineDataset) -> f64 {
        let angles: Vec<f64> = dataset
            .records()
            .iter()
            .map(|r| r.angle_deg)
            .filter(|a| !a.is_nan())
            .collect();
        Statistics::max(&angles)
    }

    /// Threshold to apply to a dataset reaching `max_angle`.
    ///
    /// A run that never reaches the current threshold drops it to 0.0. The
    /// caller carries the result into the next turbine.
    pub fn effective_threshold(current: f64, max_angle: f64) -> f64 {
        if max_angle < current {
            0.0
        } else {
            current
        }
    }

    /// Arithmetic mean skipping NaN entries. NaN when nothing remains.
    pub fn mean<I>(values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        Statistics::mean(&values)
    }

    /// Compute the window means for one turbine.
    pub fn summarize(turbine: usize, dataset: &TurbineDataset, threshold: f64) -> SummaryStatistics {
        let window: Vec<_> = DatasetProcessor::rows_from(dataset, threshold).collect();

        SummaryStatistics {
            turbine,
            threshold,
            max_angle: Self::max_angle(dataset),
            count: window.len(),
            mean_tsr: Self::mean(window.iter().map(|r| r.tsr)),
            mean_cp: Self::mean(window.iter().map(|r| r.cp)),
            mean_cd: Self::mean(window.iter().map(|r| r.cd)),
        }
    }
}
