use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use catalog_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};
use clap::{Parser, ValueEnum};
use movies_engine::{BundledSource, CatalogSource, FileSource, LoadSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

/// Browse a movie catalog and drill into movies, directors and actors.
#[derive(Debug, Clone, Parser)]
#[command(name = "movies", version)]
pub struct AppConfig {
    /// Catalog JSON file to load instead of the bundled dataset.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Simulated network delay before the catalog arrives.
    #[arg(long, value_name = "MS", default_value_t = 2_000)]
    pub delay_ms: u64,

    /// Where diagnostics are written.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file used by the `file` and `both` targets.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            delay: Duration::from_millis(self.delay_ms),
        }
    }

    pub fn source(&self) -> Arc<dyn CatalogSource> {
        match &self.data {
            Some(path) => Arc::new(FileSource::new(path.clone())),
            None => Arc::new(BundledSource),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
