use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

use crate::partition::Chunk;

pub const DEFAULT_PREFIX: &str = "subjects_job";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where chunk files go and how they are named: `<dir>/<prefix><index>.<extension>`
#[derive(Debug, Clone)]
pub struct ChunkFileLayout {
    pub dir: PathBuf,
    pub prefix: String,
    pub extension: String,
}

impl Default for ChunkFileLayout {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ChunkFileLayout {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}{index}.{}", self.prefix, self.extension))
    }

    /// Write one file per chunk, subjects newline-joined (no trailing newline).
    /// Existing files with the same names are overwritten, others are left alone.
    pub fn write_chunks(&self, chunks: &[Chunk<'_>]) -> Result<Vec<PathBuf>> {
        if chunks.is_empty() {
            info!("No chunks to write.");
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("could not create output directory {}", self.dir.display()))?;

        let mut written = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let path = self.path_for(chunk.index);
            write_to_textfile(&path, &chunk.subjects.join("\n"))?;
            written.push(path);
        }

        info!("All {} files written.", written.len());
        Ok(written)
    }

    /// The file right after the last one written, if it exists. Its presence
    /// means an earlier run produced more chunks than this one.
    pub fn stale_file(&self, num_written: usize) -> Option<PathBuf> {
        let next = self.path_for(num_written);
        next.is_file().then_some(next)
    }
}

pub fn write_to_textfile(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Result written to file '{}'.", path.display());
    Ok(())
}
