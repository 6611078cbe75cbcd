// tests/integration_tests/input_errors_test.rs
use super::common::{analyze_file, create_test_file};
use anyhow::Result;
use line_counter::{LineCounterError, resolve_input};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nonexistent_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nonexistent_file_12345.txt");

    let err = resolve_input(Some(path.as_path()), 1024).unwrap_err();
    assert!(err.to_string().contains("文件不存在"));
    Ok(())
}

#[test]
fn test_directory_as_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir_path = temp_dir.path().join("test_dir");
    fs::create_dir(&dir_path)?;

    let err = resolve_input(Some(dir_path.as_path()), 1024).unwrap_err();
    assert!(matches!(err, LineCounterError::IsDirectory { .. }));
    Ok(())
}

#[test]
fn test_file_over_size_limit() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "big.txt", &[b'x'; 2048])?;

    let err = resolve_input(Some(path.as_path()), 1024).unwrap_err();
    assert!(err.to_string().contains("2048 bytes"));
    Ok(())
}

#[test]
fn test_invalid_utf8_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "binary.dat", b"ABC\nDEF\n\xc3\x28\n")?;

    let err = analyze_file(&path).unwrap_err();
    let decode = err.downcast_ref::<LineCounterError>();
    assert!(matches!(decode, Some(LineCounterError::Decode { line: 3, .. })));
    Ok(())
}

#[test]
fn test_ascii_data_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "binary.dat", b"ABC\nDEF\n")?;

    let report = analyze_file(&path)?;
    assert_eq!(report.total_lines(), 2);
    Ok(())
}
