// src/core.rs
pub mod engine;
pub mod input;

pub use engine::{analyze, analyze_reader};
pub use input::{DEFAULT_MAX_FILE_SIZE, InputFile, resolve_input};
