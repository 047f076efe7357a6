//! File logging. Output never goes to stderr while the UI owns the terminal.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};
use folio_config::{Config, LogConfig};

/// Start logging to the configured file. `RUST_LOG` overrides the level.
///
/// Returns the log file path, or `None` if no file could be opened, in which
/// case logging stays disabled.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let path = config.file.clone().or_else(Config::default_log_path)?;
    let file = open_log_file(&path).ok()?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    log::info!("folio {} starting", env!("CARGO_PKG_VERSION"));
    Some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
