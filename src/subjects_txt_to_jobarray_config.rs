/*
cargo run --bin subjects_txt_to_jobarray_config

cargo run --bin subjects_txt_to_jobarray_config -- \
    --subjects-file subjects.txt \
    --num-jobs 50 \
    --separator ';' \
    --output slurm/jobarray_config.txt
*/

// Same split as split_subjects_txt, but written as a single table for a
// job array: the array task reads its row and processes the listed subjects.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::TerminalMode;

use fs_pipeline_tools::{
    jobarray::{self, DEFAULT_OUTPUT_FILE, DEFAULT_SEPARATOR},
    logging::{self, LogArgs},
    partition, read_subjects_file,
    split_files::write_to_textfile,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Write a job-array config table from a subjects.txt file.")]
struct Cli {
    /// Input file, one subject per line
    #[arg(long = "subjects-file", value_name = "PATH", default_value = "subjects.txt")]
    subjects_file: PathBuf,

    /// Maximal number of array tasks
    #[arg(
        long = "num-jobs",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    num_jobs: u64,

    /// Joins the subjects within one row
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Where the table is written
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init("subjects_txt_to_jobarray_config", &cli.log, TerminalMode::Stdout)?;

    jobarray::validate_separator(&cli.separator)?;
    let max_jobs = usize::try_from(cli.num_jobs).context("job count does not fit this platform")?;

    info!(
        "Building job array config from '{}' with at most {max_jobs} tasks.",
        cli.subjects_file.display()
    );
    let subjects = read_subjects_file(&cli.subjects_file)?;

    let chunks = partition(&subjects, Some(max_jobs))?;
    if chunks.is_empty() {
        info!(
            "No subjects in '{}', not writing '{}'.",
            cli.subjects_file.display(),
            cli.output.display()
        );
        return Ok(());
    }

    let table = jobarray::render_table(&chunks, &cli.separator)?;
    write_to_textfile(&cli.output, &table)?;
    info!("Job array needs {} tasks (0-{}).", chunks.len(), chunks.len() - 1);

    Ok(())
}
