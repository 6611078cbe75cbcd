// src/core/input.rs
use crate::error::LineCounterError;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files larger than this are rejected unless `--max-size` says otherwise.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// A path that has been checked to be a regular file within the size limit.
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
    size: u64,
}

impl InputFile {
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes, as reported by the filesystem.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Opens the file for buffered reading. The handle closes when the
    /// returned reader is dropped.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied`, `FileNotFound` or `FileReadError` depending
    /// on why the open failed.
    pub fn open(&self) -> Result<BufReader<File>, LineCounterError> {
        let file = File::open(&self.path).map_err(|e| map_io_error(&e, &self.path))?;
        Ok(BufReader::new(file))
    }
}

/// Validates `path` before any content is read.
///
/// # Arguments
///
/// * `path` - The path from the command line, if one was given
/// * `max_size` - Upper bound on the file size in bytes
///
/// # Errors
///
/// This function may return an error if:
/// * No path was given
/// * The path does not exist or cannot be inspected
/// * The path is a directory
/// * The file is larger than `max_size`
pub fn resolve_input(path: Option<&Path>, max_size: u64) -> Result<InputFile, LineCounterError> {
    let path = path.ok_or(LineCounterError::MissingArgument)?;
    let metadata = fs::metadata(path).map_err(|e| map_io_error(&e, path))?;

    if metadata.is_dir() {
        return Err(LineCounterError::IsDirectory {
            path: path.display().to_string(),
        });
    }

    if metadata.len() > max_size {
        return Err(LineCounterError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
        });
    }

    debug!(path = %path.display(), size = metadata.len(), "resolved input file");
    Ok(InputFile {
        path: path.to_path_buf(),
        size: metadata.len(),
    })
}

fn map_io_error(err: &io::Error, path: &Path) -> LineCounterError {
    let path = path.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => LineCounterError::FileNotFound { path },
        io::ErrorKind::PermissionDenied => LineCounterError::PermissionDenied { path },
        _ => LineCounterError::FileReadError { path },
    }
}
