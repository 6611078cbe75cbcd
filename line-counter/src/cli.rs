// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::core::{DEFAULT_MAX_FILE_SIZE, analyze_reader, resolve_input};
use crate::error::LineCounterError;
use crate::output::{OutputFormat, render};

const BIN_NAME: &str = "line-counter";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to analyse
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reject files larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolves the input file, analyses it and prints the report.
///
/// # Errors
///
/// This function may return an error if:
/// * No path was given (usage help is printed to stderr first)
/// * The path is missing, a directory, unreadable or too large
/// * The content is not valid UTF-8
/// * The report cannot be serialized
pub fn run(args: Args) -> Result<()> {
    if args.path.is_none() {
        print_usage_help();
        return Err(LineCounterError::MissingArgument.into());
    }

    let input = resolve_input(args.path.as_deref(), args.max_size)?;
    let path = input.path();

    if args.format == OutputFormat::Text {
        println!("📊 正在处理文件: {}", path.display());
    }

    let report = analyze_reader(input.open()?)
        .with_context(|| format!("无法分析文件 '{}'", path.display()))?;
    info!(
        path = %path.display(),
        total = report.total_lines(),
        blank = report.blank_lines(),
        "analysed file"
    );

    print!("{}", render(args.format, path, input.size(), &report)?);
    Ok(())
}

fn print_usage_help() {
    eprintln!("❌ 错误: 缺少文件路径参数");
    eprintln!("📖 用法: {BIN_NAME} <文件路径>");
    eprintln!("💡 示例: {BIN_NAME} example.txt");
}
