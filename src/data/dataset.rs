//! Turbine time-series records.

/// One row of a turbine output file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesRecord {
    /// Simulation time in seconds.
    pub time: f64,
    /// Azimuthal angle of the rotor in degrees.
    pub angle_deg: f64,
    /// Tip-speed ratio.
    pub tsr: f64,
    /// Power coefficient.
    pub cp: f64,
    /// Drag coefficient.
    pub cd: f64,
}

impl TimeSeriesRecord {
    pub fn new(time: f64, angle_deg: f64, tsr: f64, cp: f64, cd: f64) -> Self {
        Self {
            time,
            angle_deg,
            tsr,
            cp,
            cd,
        }
    }
}

/// All rows loaded from one turbine file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurbineDataset {
    records: Vec<TimeSeriesRecord>,
}

impl TurbineDataset {
    pub fn new(records: Vec<TimeSeriesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TimeSeriesRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<TimeSeriesRecord> for TurbineDataset {
    fn from_iter<I: IntoIterator<Item = TimeSeriesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_rows_in_order() {
        let dataset: TurbineDataset = (0..3)
            .map(|i| TimeSeriesRecord::new(i as f64, i as f64 * 90.0, 3.0, 0.3, 1.0))
            .collect();

        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.records()[2].angle_deg, 180.0);
        assert!(TurbineDataset::default().is_empty());
    }
}
