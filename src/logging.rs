use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use time::macros::format_description;

/// Logging flags shared by all tools.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Also write the log to a timestamped file in this directory
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log debug messages too
    #[arg(short, long)]
    pub verbose: bool,
}

impl LogArgs {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// `<tool>_<YYYY-mm-dd_HH-MM-SS>.log`
pub fn log_file_name(tool: &str) -> String {
    format!("{tool}_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

fn terminal_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_custom(format_description!("[hour]:[minute]:[second]"))
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Install the process logger. Call once, first thing in `main`.
///
/// Returns the path of the log file, if one was requested.
pub fn init(tool: &str, args: &LogArgs, terminal: TerminalMode) -> Result<Option<PathBuf>> {
    let level = args.level();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        terminal_config(),
        terminal,
        ColorChoice::Auto,
    )];

    let log_path = match &args.log_dir {
        Some(dir) => {
            let path = create_log_file_path(dir, tool)?;
            let file = File::create(&path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            loggers.push(WriteLogger::new(level, Config::default(), file));
            Some(path)
        }
        None => None,
    };

    CombinedLogger::init(loggers).context("failed to initialise logger")?;
    Ok(log_path)
}

fn create_log_file_path(dir: &Path, tool: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create log directory {}", dir.display()))?;
    Ok(dir.join(log_file_name(tool)))
}
