//! The FreeSurfer subject files we publish, plus checksum and copy helpers.

use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::warn;
use md5::{Digest, Md5};

const HEMIS: [&str; 2] = ["lh", "rh"];
const MRI_VOLUMES: [&str; 5] = ["brainmask.mgz", "orig.mgz", "T1.mgz", "aseg.mgz", "brain.mgz"];
const SURFACES: [&str; 4] = ["inflated", "pial", "sphere", "white"];
const NATIVE_MEASURES: [&str; 5] = ["thickness", "area", "curv", "sulc", "volume"];
const REGISTRATIONS: [&str; 1] = ["sphere.reg"];
const MAPPED_MEASURES: [&str; 3] = ["thickness", "area", "sulc"];
const SMOOTHINGS: [&str; 1] = ["10"];
const LABELS: [&str; 1] = ["cortex.label"];
const ATLASES: [&str; 2] = ["aparc.annot", "aparc.a2009s.annot"];

/// A file inside a subject directory, as path components (`["surf", "lh.white"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFile {
    parts: Vec<String>,
}

impl SubjectFile {
    pub fn new(subdir: &str, file: impl Into<String>) -> Self {
        Self {
            parts: vec![subdir.to_string(), file.into()],
        }
    }

    /// Path relative to the subject directory.
    pub fn inner_path(&self) -> PathBuf {
        self.parts.iter().collect()
    }

    pub fn full_path(&self, subject_dir: &Path) -> PathBuf {
        subject_dir.join(self.inner_path())
    }

    /// R snippet for fsbrain download lists: `c(base_path_subject, 'surf','lh.white'),`
    pub fn r_path(&self) -> String {
        let quoted: Vec<String> = self.parts.iter().map(|p| format!("'{p}'")).collect();
        format!("c(base_path_subject, {}),", quoted.join(","))
    }
}

/// Every file we would like to have for a subject, in output order.
pub fn relevant_file_candidates() -> Vec<SubjectFile> {
    let mut files: Vec<SubjectFile> = MRI_VOLUMES
        .iter()
        .map(|f| SubjectFile::new("mri", *f))
        .collect();

    for hemi in HEMIS {
        for name in SURFACES
            .iter()
            .chain(NATIVE_MEASURES.iter())
            .chain(REGISTRATIONS.iter())
        {
            files.push(SubjectFile::new("surf", format!("{hemi}.{name}")));
        }
        for fwhm in SMOOTHINGS {
            for measure in MAPPED_MEASURES {
                files.push(SubjectFile::new(
                    "surf",
                    format!("{hemi}.{measure}.fwhm{fwhm}.fsaverage.mgh"),
                ));
            }
        }
        for label in LABELS.iter().chain(ATLASES.iter()) {
            files.push(SubjectFile::new("label", format!("{hemi}.{label}")));
        }
    }
    files
}

/// The candidates that exist under `subject_dir`; missing ones and duplicates
/// are skipped with a warning.
pub fn relevant_subject_files(subject_dir: &Path) -> Vec<SubjectFile> {
    let mut found: Vec<SubjectFile> = Vec::new();
    for candidate in relevant_file_candidates() {
        let full = candidate.full_path(subject_dir);
        if !full.exists() {
            warn!("File not found, skipping: {}", full.display());
        } else if found.contains(&candidate) {
            warn!("File already in list, skipping: {}", full.display());
        } else {
            found.push(candidate);
        }
    }
    found
}

/// Hex MD5 digest of a file, read in blocks.
pub fn md5sum(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Md5::new();
    let mut buf = [0u8; 128 * 64];
    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// What to print per file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMode {
    #[value(name = "md5")]
    Md5,
    #[value(name = "fullpath")]
    FullPath,
    #[value(name = "innerpath")]
    InnerPath,
    #[value(name = "Rpath")]
    RPath,
    #[default]
    #[value(name = "full_with_md5")]
    FullWithMd5,
    #[value(name = "all")]
    All,
}

impl PrintMode {
    fn shows(self, form: PrintMode) -> bool {
        self == form || self == PrintMode::All
    }

    fn needs_md5(self) -> bool {
        self.shows(PrintMode::Md5) || self.shows(PrintMode::FullWithMd5)
    }
}

/// Output lines for one file; with `All` they come in md5, fullpath,
/// innerpath, Rpath, full_with_md5 order.
pub fn report_lines(mode: PrintMode, subject_dir: &Path, file: &SubjectFile) -> Result<Vec<String>> {
    let full = file.full_path(subject_dir);
    let digest = if mode.needs_md5() {
        md5sum(&full)?
    } else {
        String::new()
    };

    let mut lines = Vec::new();
    if mode.shows(PrintMode::Md5) {
        lines.push(digest.clone());
    }
    if mode.shows(PrintMode::FullPath) {
        lines.push(full.display().to_string());
    }
    if mode.shows(PrintMode::InnerPath) {
        lines.push(file.inner_path().display().to_string());
    }
    if mode.shows(PrintMode::RPath) {
        lines.push(file.r_path());
    }
    if mode.shows(PrintMode::FullWithMd5) {
        lines.push(format!("{digest}  {}", full.display()));
    }
    Ok(lines)
}

/// Copy `file` from the subject directory to the same relative path under
/// `copy_dir`, creating intermediate directories.
pub fn copy_subject_file(subject_dir: &Path, copy_dir: &Path, file: &SubjectFile) -> Result<PathBuf> {
    let src = file.full_path(subject_dir);
    let dst = copy_dir.join(file.inner_path());
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create directory {}", parent.display()))?;
    }
    fs::copy(&src, &dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(dst)
}
