//! Poll catalog persistence
//!
//! Handles saving and loading the poll catalog as versioned JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::poll::PollCatalog;
use crate::{PondusError, Result, APP_NAME, POLLS_FILE};

const FORMAT_VERSION: u32 = 1;

/// Poll catalog storage manager
#[derive(Debug)]
pub struct PollStorage {
    polls_path: PathBuf,
}

/// Catalog file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct PollsFile {
    version: u32,
    catalog: PollCatalog,
}

impl PollStorage {
    /// Create a storage manager at the standard location
    pub fn new() -> Result<Self> {
        Ok(Self::at(Self::polls_file_path()?))
    }

    /// Create a storage manager for an explicit file
    pub fn at(polls_path: impl Into<PathBuf>) -> Self {
        Self {
            polls_path: polls_path.into(),
        }
    }

    /// Get the standard catalog file path
    /// Uses $DATA_HOME/pondus/polls.json
    pub fn polls_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| PondusError::Config("Unable to determine data directory".to_string()))?;

        Ok(data_dir.join(APP_NAME).join(POLLS_FILE))
    }

    /// Load the catalog, or an empty one if nothing was saved yet
    pub fn load(&self) -> Result<PollCatalog> {
        if !self.polls_path.exists() {
            debug!(path = %self.polls_path.display(), "no catalog file, starting empty");
            return Ok(PollCatalog::default());
        }

        let content = fs::read_to_string(&self.polls_path).map_err(|e| {
            PondusError::Persistence(format!(
                "Failed to read catalog file {}: {}",
                self.polls_path.display(),
                e
            ))
        })?;

        let file: PollsFile = serde_json::from_str(&content).map_err(|e| {
            PondusError::Persistence(format!(
                "Failed to parse catalog file {}: {}",
                self.polls_path.display(),
                e
            ))
        })?;

        if file.version != FORMAT_VERSION {
            return Err(PondusError::Persistence(format!(
                "Unsupported catalog version {} in {}",
                file.version,
                self.polls_path.display()
            )));
        }

        Ok(file.catalog)
    }

    /// Write the whole catalog
    pub fn save(&self, catalog: &PollCatalog) -> Result<()> {
        if let Some(parent) = self.polls_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PondusError::Persistence(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = PollsFile {
            version: FORMAT_VERSION,
            catalog: catalog.clone(),
        };

        let content = serde_json::to_string_pretty(&file)?;

        fs::write(&self.polls_path, content).map_err(|e| {
            PondusError::Persistence(format!(
                "Failed to write catalog file {}: {}",
                self.polls_path.display(),
                e
            ))
        })?;

        debug!(polls = catalog.polls.len(), votes = catalog.votes.len(), "catalog saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.polls_path
    }
}
