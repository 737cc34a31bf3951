//! Turbine CSV Loader Module
//! Reads one turbine output file into memory using Polars.

use crate::data::{TimeSeriesRecord, TurbineDataset};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column '{column}' in {path} is not numeric (found {dtype})")]
    NonNumericColumn {
        path: String,
        column: String,
        dtype: String,
    },
}

/// Loads turbine time series from CSV files.
pub struct TurbineLoader;

impl TurbineLoader {
    /// Load a turbine CSV file. The header row drives column lookup.
    pub fn load_csv(path: &Path) -> Result<TurbineDataset, LoaderError> {
        // Full-file schema inference: a column that turns fractional late in
        // a long run must not be typed as integer.
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded turbine csv"
        );

        Self::dataset_from_frame(&df, path)
    }

    /// Extract the required columns of a loaded DataFrame into records.
    ///
    /// Requires `time`, `angle_deg`, `tsr`, `cp` and `cd` in any order. Extra
    /// columns are ignored. Null cells become NaN.
    pub fn dataset_from_frame(df: &DataFrame, path: &Path) -> Result<TurbineDataset, LoaderError> {
        let time = Self::numeric_column(df, "time", path)?;
        let angle_deg = Self::numeric_column(df, "angle_deg", path)?;
        let tsr = Self::numeric_column(df, "tsr", path)?;
        let cp = Self::numeric_column(df, "cp", path)?;
        let cd = Self::numeric_column(df, "cd", path)?;

        Ok((0..df.height())
            .map(|i| TimeSeriesRecord::new(time[i], angle_deg[i], tsr[i], cp[i], cd[i]))
            .collect())
    }

    fn numeric_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<f64>, LoaderError> {
        let column = df.column(name)?;

        // A header-only file or an all-empty column has no values to infer
        // a numeric type from; both load as NaN.
        let all_null = column.null_count() == column.len();
        if !all_null && !Self::is_numeric(column.dtype()) {
            return Err(LoaderError::NonNumericColumn {
                path: path.display().to_string(),
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }

        let values = column.cast(&DataType::Float64)?;
        let ca = values.f64()?;
        Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn extracts_columns_by_name_in_any_order() {
        let df = frame(vec![
            Column::new("cd".into(), vec![1.1, 1.2]),
            Column::new("extra".into(), vec!["a", "b"]),
            Column::new("cp".into(), vec![0.3, 0.4]),
            Column::new("tsr".into(), vec![3.0, 3.1]),
            Column::new("angle_deg".into(), vec![10.0, 20.0]),
            Column::new("time".into(), vec![0.01, 0.02]),
        ]);

        let dataset = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap();

        assert_eq!(
            dataset.records(),
            &[
                TimeSeriesRecord::new(0.01, 10.0, 3.0, 0.3, 1.1),
                TimeSeriesRecord::new(0.02, 20.0, 3.1, 0.4, 1.2),
            ]
        );
    }

    #[test]
    fn widens_integer_columns() {
        let df = frame(vec![
            Column::new("time".into(), vec![1i64, 2]),
            Column::new("angle_deg".into(), vec![90i64, 180]),
            Column::new("tsr".into(), vec![3.0, 3.0]),
            Column::new("cp".into(), vec![0.5, 0.5]),
            Column::new("cd".into(), vec![1i32, 1]),
        ]);

        let dataset = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap();
        assert_eq!(dataset.records()[1].angle_deg, 180.0);
        assert_eq!(dataset.records()[0].cd, 1.0);
    }

    #[test]
    fn rejects_missing_column() {
        let df = frame(vec![
            Column::new("time".into(), vec![0.0]),
            Column::new("angle_deg".into(), vec![0.0]),
            Column::new("tsr".into(), vec![0.0]),
            Column::new("cp".into(), vec![0.0]),
        ]);

        let err = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::CsvError(_)));
    }

    #[test]
    fn rejects_text_column() {
        let df = frame(vec![
            Column::new("time".into(), vec![0.0]),
            Column::new("angle_deg".into(), vec![0.0]),
            Column::new("tsr".into(), vec!["fast"]),
            Column::new("cp".into(), vec![0.0]),
            Column::new("cd".into(), vec![0.0]),
        ]);

        let err = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap_err();
        match err {
            LoaderError::NonNumericColumn { column, .. } => assert_eq!(column, "tsr"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn all_empty_text_column_becomes_nan() {
        let df = frame(vec![
            Column::new("time".into(), vec![0.0, 1.0]),
            Column::new("angle_deg".into(), vec![600.0, 700.0]),
            Column::new("tsr".into(), vec![3.0, 3.0]),
            Column::new("cp".into(), vec![0.3, 0.3]),
            Column::new("cd".into(), vec![None::<&str>, None]),
        ]);

        let dataset = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap();
        assert!(dataset.records().iter().all(|r| r.cd.is_nan()));
        assert_eq!(dataset.records()[1].cp, 0.3);
    }

    #[test]
    fn null_cells_become_nan() {
        let df = frame(vec![
            Column::new("time".into(), vec![Some(0.0), Some(1.0)]),
            Column::new("angle_deg".into(), vec![Some(0.0), Some(1.0)]),
            Column::new("tsr".into(), vec![Some(3.0), None]),
            Column::new("cp".into(), vec![Some(0.1), Some(0.2)]),
            Column::new("cd".into(), vec![Some(1.0), Some(1.0)]),
        ]);

        let dataset = TurbineLoader::dataset_from_frame(&df, Path::new("t.csv")).unwrap();
        assert!(dataset.records()[1].tsr.is_nan());
    }
}
