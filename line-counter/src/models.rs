// src/models.rs
pub mod line_record;
pub mod stats_report;

pub use line_record::{LineKind, LineRecord};
pub use stats_report::{LineTally, StatsReport};
