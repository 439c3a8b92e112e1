//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{Result, WatchPlanError},
};

/// XDG prefix under the user data directory.
const DATA_DIR_PREFIX: &str = "watchplan";

/// File name of the database inside the data directory.
const DATABASE_FILE_NAME: &str = "watchplan.db";

/// Configures where a [`Planner`] keeps its data.
///
/// All plans live in one SQLite file holding a single `storage` table with
/// the `plansData` and `planData` documents. The file is created on
/// [`build`](Self::build) if missing; an existing file, including one that
/// only has the legacy `planData` key, is opened as is.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as the database file. `None` keeps the default of
    /// `$XDG_DATA_HOME/watchplan/watchplan.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the database path, makes sure its directory exists and
    /// initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::XdgDirectory` if the default location cannot
    /// be determined, `WatchPlanError::FileSystem` if the directory cannot
    /// be created and `WatchPlanError::Storage` if the schema fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };
        ensure_parent_dir(&db_path)?;

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(WatchPlanError::join)??;

        info!("Using plan database at {}", db_path.display());
        Ok(Planner::new(db_path))
    }
}

/// `$XDG_DATA_HOME/watchplan/watchplan.db`, creating the directory.
fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_DIR_PREFIX)
        .place_data_file(DATABASE_FILE_NAME)
        .map_err(|e| WatchPlanError::XdgDirectory(e.to_string()))
}

/// Creates the directory holding `db_path`. A bare file name has an empty
/// parent, meaning the working directory, and needs nothing.
fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent).map_err(|source| {
            WatchPlanError::FileSystem {
                path: parent.to_path_buf(),
                source,
            }
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_ensure_parent_dir_creates_nested_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("a").join("b").join("plans.db");

        ensure_parent_dir(&db_path).expect("Failed to create parent");
        assert!(temp_dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new("plans.db")).expect("bare file name");
    }

    #[tokio::test]
    async fn test_build_opens_existing_legacy_only_database() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("watchplan.db");

        let planner = PlannerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to build planner");
        planner
            .with_database(|db| db.set(crate::db::LEGACY_KEY, r#"{"plan":[]}"#))
            .await
            .expect("seed legacy");

        let reopened = PlannerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to reopen planner");
        assert_eq!(reopened.database_path(), db_path.as_path());
        assert!(reopened.load_legacy().await.expect("legacy").is_some());
    }
}
