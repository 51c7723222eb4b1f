//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so in that mode logs go to a file under the
//! data directory. Poll commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{PondusError, Result, APP_NAME, LOG_FILE};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "pondus=info";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Standard log file location: $DATA_HOME/pondus/pondus.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| PondusError::Config("Unable to determine data directory".to_string()))?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| PondusError::Config(format!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_path() {
        let path = log_file_path().unwrap();
        assert!(path.to_string_lossy().contains("pondus"));
        assert!(path.ends_with(LOG_FILE));
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("pondus.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
