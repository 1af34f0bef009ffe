/*
cargo run --bin split_subjects_txt -- 20

cargo run --bin split_subjects_txt -- \
    --subjects-file $SUBJECTS_DIR/subjects.txt \
    --output-dir jobs \
    --log-dir logs \
    40
*/

// Split a subjects.txt file into chunks, one file per cluster job. Useful when
// the cluster limits how many jobs you may submit and hands each job a whole
// node: every job then runs its chunk of subjects through GNU parallel.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use simplelog::TerminalMode;

use fs_pipeline_tools::{
    logging::{self, LogArgs},
    partition, read_subjects_file,
    split_files::{ChunkFileLayout, DEFAULT_PREFIX},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Split subjects.txt file into N chunks.")]
struct Cli {
    /// The number of chunks, typically the number of jobs you are allowed to run
    /// on the cluster (default: one chunk per subject)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    num_chunks: Option<u64>,

    /// The input subjects file that should be split
    #[arg(long = "subjects-file", value_name = "PATH", default_value = "subjects.txt")]
    subjects_file: PathBuf,

    /// Directory the chunk files are written to
    #[arg(long = "output-dir", value_name = "PATH", default_value = ".")]
    output_dir: PathBuf,

    /// File name prefix, chunk i goes to <prefix><i>.txt
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = logging::init("split_subjects_txt", &cli.log, TerminalMode::Stdout)? {
        info!("Logging to {}", path.display());
    }

    match cli.num_chunks {
        Some(n) => info!("Splitting file '{}' into {n} chunks.", cli.subjects_file.display()),
        None => info!(
            "Splitting file '{}' into one chunk per subject.",
            cli.subjects_file.display()
        ),
    }

    let subjects = read_subjects_file(&cli.subjects_file)?;
    let max_jobs = cli
        .num_chunks
        .map(usize::try_from)
        .transpose()
        .context("chunk count does not fit this platform")?;

    let chunks = partition(&subjects, max_jobs)?;
    if chunks.is_empty() {
        info!(
            "No subjects in '{}', no files written.",
            cli.subjects_file.display()
        );
        return Ok(());
    }

    let layout = ChunkFileLayout::new(cli.output_dir, cli.prefix);
    let written = layout.write_chunks(&chunks)?;

    if let Some(stale) = layout.stale_file(written.len()) {
        warn!(
            "WARNING: Wrote {} subjects files ({} .. {}), but the file '{}' also exists, maybe from an older run?",
            written.len(),
            layout.path_for(0).display(),
            layout.path_for(written.len() - 1).display(),
            stale.display()
        );
        warn!(
            "WARNING (cont.): You may want to delete old '{}*' files before a run to avoid confusion.",
            layout.prefix
        );
    }

    Ok(())
}
