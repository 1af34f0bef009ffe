use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

/// Read a subjects file (one subject ID per line, no header).
pub fn read_subjects_file(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read subjects file {}", path.display()))?;
    Ok(parse_subjects(&raw))
}

/// Trim every line and keep the non-blank ones, in file order.
pub fn parse_subjects(raw: &str) -> Vec<String> {
    let mut blank = 0usize;
    let subjects: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| {
            let keep = !l.is_empty();
            if !keep {
                blank += 1;
            }
            keep
        })
        .map(str::to_owned)
        .collect();

    if blank > 0 {
        debug!("Ignored {blank} blank line(s) in subjects list");
    }
    subjects
}
