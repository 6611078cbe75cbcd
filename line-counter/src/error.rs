// src/error.rs
use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised while resolving the input path or analysing its content.
///
/// Display strings are the user-facing messages printed by the binary, so
/// integration tests match on them.
#[derive(Error, Debug)]
pub enum LineCounterError {
    /// No file path was given on the command line
    #[error("缺少文件路径参数")]
    MissingArgument,

    #[error("文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("文件是一个目录，不是文件: {path}")]
    IsDirectory { path: String },

    #[error("权限不足，无法访问文件: {path}")]
    PermissionDenied { path: String },

    #[error("无法读取文件: {path}")]
    FileReadError { path: String },

    /// The file exceeds the configured size limit
    #[error("文件过大，无法处理: {path}, 大小: {size} bytes")]
    FileTooLarge { path: String, size: u64 },

    /// A line is not valid UTF-8 (1-based line number)
    #[error("第 {line} 行不是有效的 UTF-8 文本")]
    Decode {
        line: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("读取第 {line} 行时发生错误")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
