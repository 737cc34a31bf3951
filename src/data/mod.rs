//! Data module - turbine CSV loading and cleaning

mod dataset;
mod loader;
mod processor;

pub use dataset::{TimeSeriesRecord, TurbineDataset};
pub use loader::{LoaderError, TurbineLoader};
pub use processor::DatasetProcessor;
