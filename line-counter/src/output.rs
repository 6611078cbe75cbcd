// src/output.rs
use crate::models::StatsReport;
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

/// Structured form of a report, used by the machine-readable formats.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub path: String,
    pub file_size: u64,
    pub stats: &'a StatsReport,
}

impl<'a> ReportDocument<'a> {
    #[must_use]
    pub fn new(path: &Path, file_size: u64, stats: &'a StatsReport) -> Self {
        Self {
            path: path.display().to_string(),
            file_size,
            stats,
        }
    }
}

/// The human-readable report. The labels are matched verbatim by scripts, so
/// they must not change.
#[derive(Debug)]
pub struct TextReport<'a> {
    pub path: &'a Path,
    pub file_size: u64,
    pub report: &'a StatsReport,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "✅ 文件分析完成!")?;
        writeln!(f, "📄 文件: {}", self.path.display())?;
        writeln!(f, "📏 文件大小: {} bytes", self.file_size)?;
        writeln!(f, "📊 总行数: {}", report.total_lines())?;
        writeln!(f, "📝 非空行数: {}", report.non_blank_lines())?;
        writeln!(f, "🔲 空行数: {}", report.blank_lines())?;
        writeln!(f, "📈 空行占比: {}", report.formatted_percentage())?;
        writeln!(f, "📐 最长行: {} 字符", report.max_line_length())?;
        writeln!(
            f,
            "🔤 字符数: {} (字节数: {})",
            report.char_count(),
            report.byte_count()
        )
    }
}

#[must_use]
pub fn render_text(path: &Path, file_size: u64, report: &StatsReport) -> String {
    TextReport {
        path,
        file_size,
        report,
    }
    .to_string()
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization to a structured format fails.
pub fn render(
    format: OutputFormat,
    path: &Path,
    file_size: u64,
    report: &StatsReport,
) -> Result<String> {
    let document = ReportDocument::new(path, file_size, report);
    let rendered = match format {
        OutputFormat::Text => render_text(path, file_size, report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&document).context("Failed to serialize report as JSON")?
        }
        OutputFormat::Yaml => {
            serde_yaml_ng::to_string(&document).context("Failed to serialize report as YAML")?
        }
        OutputFormat::Toml => {
            toml::to_string(&document).context("Failed to serialize report as TOML")?
        }
    };
    Ok(rendered)
}
