//! VAWT Report - power coefficient report for a 2x2 VAWT array
//!
//! Reads the per-turbine CSV output of an actuator line simulation, prints
//! steady-state mean TSR, C_P and C_D per turbine, and builds a comparison
//! figure of C_P against azimuthal angle.

pub mod charts;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;
