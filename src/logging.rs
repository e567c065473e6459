use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Explicit logger configuration, built in `main` and applied once.
pub struct LogConfig {
    /// Route debug-level logs to a dated file instead of stderr.
    pub to_file: bool,
    /// Directory for the dated log files.
    pub dir: PathBuf,
    /// Debug-level stderr logging when file logging is off.
    pub verbose: bool,
}

pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let mut builder = Builder::new();
    if config.to_file {
        fs::create_dir_all(&config.dir)?;
        let path = config
            .dir
            .join(format!("{}.log", Local::now().format("%Y-%m-%d")));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        builder
            .filter_level(LevelFilter::Debug)
            .target(Target::Pipe(Box::new(file)));
    } else {
        let level = if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        builder.filter_level(level);
    }
    builder.try_init()?;
    Ok(())
}
