// tests/integration_tests/common.rs
use anyhow::Result;
use line_counter::{DEFAULT_MAX_FILE_SIZE, StatsReport, analyze_reader, resolve_input};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

pub fn analyze_file(path: &Path) -> Result<StatsReport> {
    let input = resolve_input(Some(path), DEFAULT_MAX_FILE_SIZE)?;
    Ok(analyze_reader(input.open()?)?)
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
