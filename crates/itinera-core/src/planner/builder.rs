//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Planner;
use crate::error::{ItineraryError, Result};

/// Resolves where the database lives before handing out a [`Planner`].
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// `None` keeps the default, `$XDG_DATA_HOME/itinera/itinera.db`
    /// (usually `~/.local/share/itinera/itinera.db`).
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the planner, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the parent directory cannot
    /// be created, `ItineraryError::XdgDirectory` if no default location is
    /// available and `ItineraryError::Storage` if the database cannot be
    /// opened.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => {
                ensure_parent_dir(&path)?;
                path
            }
            // place_data_file creates the directory itself
            None => Self::default_database_path()?,
        };

        let planner = Planner::new(db_path);
        // Create the file and schema now
        planner.run(|_| Ok(())).await?;

        debug!("Using database at {}", planner.database_path().display());
        Ok(planner)
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("itinera")
            .place_data_file("itinera.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
