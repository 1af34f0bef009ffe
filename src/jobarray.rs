//! Job-array configuration table: one row per array task, listing the
//! subjects that task should process.
//!
//! ```text
//! ArrayTaskID NumSubjects Subjects
//! 0 2 s1,s2
//! 1 2 s3,s4
//! ```

use std::fmt::Write as _;

use anyhow::{ensure, Result};
use log::debug;

use crate::partition::Chunk;

pub const HEADER: &str = "ArrayTaskID NumSubjects Subjects";
pub const DEFAULT_SEPARATOR: &str = ",";
pub const DEFAULT_OUTPUT_FILE: &str = "jobarray_config.txt";

/// Columns are space-separated, so the subject separator must be non-empty
/// and free of whitespace.
pub fn validate_separator(separator: &str) -> Result<()> {
    ensure!(!separator.is_empty(), "subject separator must not be empty");
    ensure!(
        !separator.chars().any(char::is_whitespace),
        "subject separator {separator:?} must not contain whitespace"
    );
    Ok(())
}

/// Render the header plus one newline-terminated row per chunk.
pub fn render_table(chunks: &[Chunk<'_>], separator: &str) -> Result<String> {
    validate_separator(separator)?;

    let mut table = String::new();
    table.push_str(HEADER);
    table.push('\n');

    for chunk in chunks {
        debug!(
            "Array task {} gets {} subject(s)",
            chunk.index,
            chunk.len()
        );
        // writing into a String cannot fail
        let _ = writeln!(
            table,
            "{} {} {}",
            chunk.index,
            chunk.len(),
            chunk.subjects.join(separator)
        );
    }
    Ok(table)
}
