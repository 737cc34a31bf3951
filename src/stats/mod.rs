//! Stats module - steady-state performance statistics

mod calculator;

pub use calculator::{StatsCalculator, SummaryStatistics};
