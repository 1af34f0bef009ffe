/*
cargo run --bin subject_files_md5 -- $SUBJECTS_DIR/bert

cargo run --bin subject_files_md5 -- \
    $SUBJECTS_DIR/bert \
    --print all \
    --copy upload/bert
*/

// Compute the md5sum of all relevant files in a FreeSurfer subject directory,
// optionally copying them. Used to prepare subjects for upload to the web
// server the fsbrain R package downloads from.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use simplelog::TerminalMode;

use fs_pipeline_tools::{
    logging::{self, LogArgs},
    subject_files::{
        copy_subject_file, relevant_file_candidates, relevant_subject_files, report_lines,
        PrintMode,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute md5sum of all relevant subject files")]
struct Cli {
    /// Path to the subject directory (<SUBJECTS_DIR>/<your_subject>)
    subject_dir: PathBuf,

    /// What to print for each file
    #[arg(long, value_enum, default_value_t = PrintMode::FullWithMd5)]
    print: PrintMode,

    /// Directory to copy the files to; must exist and be writable
    #[arg(long, value_name = "DIR")]
    copy: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // stdout carries the checksums, keep the log on stderr
    logging::init("subject_files_md5", &cli.log, TerminalMode::Stderr)?;

    if !cli.subject_dir.exists() {
        bail!("Subject directory not found: {}", cli.subject_dir.display());
    }
    if let Some(dir) = &cli.copy {
        if !dir.is_dir() {
            bail!(
                "Copy directory specified with argument --copy not found, it must exist: '{}'",
                dir.display()
            );
        }
    }

    let files = relevant_subject_files(&cli.subject_dir);
    info!(
        "Found {} of {} relevant files in {}",
        files.len(),
        relevant_file_candidates().len(),
        cli.subject_dir.display()
    );

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )?);

    for file in &files {
        bar.set_message(file.inner_path().display().to_string());

        if let Some(dir) = &cli.copy {
            let dst = copy_subject_file(&cli.subject_dir, dir, file)?;
            debug!("Copied to {}", dst.display());
        }

        for line in report_lines(cli.print, &cli.subject_dir, file)? {
            bar.suspend(|| println!("{line}"));
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(())
}
