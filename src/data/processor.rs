//! Dataset Processor Module
//! Handles data cleaning and selection on turbine time series.

use crate::data::{TimeSeriesRecord, TurbineDataset};
use std::collections::HashSet;
use tracing::debug;

/// Handles data cleaning and filtering operations.
pub struct DatasetProcessor;

impl DatasetProcessor {
    /// Drop rows whose `time` repeats, keeping the last occurrence.
    ///
    /// Survivors stay at their original relative positions. Restarted
    /// simulations append overlapping rows, so the later row wins.
    pub fn dedup_by_time(dataset: TurbineDataset) -> TurbineDataset {
        let records = dataset.into_records();
        let before = records.len();

        let mut seen: HashSet<u64> = HashSet::with_capacity(before);
        let mut kept: Vec<TimeSeriesRecord> = records
            .into_iter()
            .rev()
            .filter(|r| seen.insert(Self::time_key(r.time)))
            .collect();
        kept.reverse();

        if kept.len() != before {
            debug!(
                dropped = before - kept.len(),
                remaining = kept.len(),
                "removed duplicate timestamps"
            );
        }

        TurbineDataset::new(kept)
    }

    /// Hash key for a timestamp. `-0.0` and `0.0` collide, as do all NaNs.
    fn time_key(time: f64) -> u64 {
        if time.is_nan() {
            f64::NAN.to_bits()
        } else if time == 0.0 {
            0.0f64.to_bits()
        } else {
            time.to_bits()
        }
    }

    /// Rows at or past the given azimuthal angle.
    pub fn rows_from(
        dataset: &TurbineDataset,
        angle_deg: f64,
    ) -> impl Iterator<Item = &TimeSeriesRecord> {
        dataset
            .records()
            .iter()
            .filter(move |r| r.angle_deg >= angle_deg)
    }

    /// Full `(angle_deg, cp)` series for plotting, no window applied.
    pub fn cp_curve(dataset: &TurbineDataset) -> Vec<(f64, f64)> {
        dataset
            .records()
            .iter()
            .map(|r| (r.angle_deg, r.cp))
            .collect()
    }
}
