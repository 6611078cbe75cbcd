// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

pub use crate::cli::{Args, run};
pub use crate::core::{DEFAULT_MAX_FILE_SIZE, InputFile, analyze, analyze_reader, resolve_input};
pub use crate::error::LineCounterError;
pub use crate::models::{LineKind, LineRecord, LineTally, StatsReport};
pub use crate::output::{OutputFormat, TextReport, render, render_text};
