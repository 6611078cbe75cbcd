// tests/integration_tests/fixture_test.rs
use super::common::{analyze_file, fixture_path};
use anyhow::Result;
use std::fs;

#[test]
fn test_unicode_fixture() -> Result<()> {
    let report = analyze_file(&fixture_path("unicode_sample.txt"))?;

    assert_eq!(report.total_lines(), 24);
    assert_eq!(report.blank_lines(), 6);
    assert_eq!(report.non_blank_lines(), 18);
    assert_eq!(report.formatted_percentage(), "25.0%");
    // The "长行" section holds 120 CJK characters
    assert_eq!(report.max_line_length(), 120);
    assert_eq!(report.char_count(), 302);
    assert_eq!(report.byte_count(), 747);
    Ok(())
}

#[test]
fn test_fixture_streaming_matches_in_memory() -> Result<()> {
    let path = fixture_path("unicode_sample.txt");
    let content = fs::read_to_string(&path)?;
    assert_eq!(analyze_file(&path)?, line_counter::analyze(&content));
    Ok(())
}
