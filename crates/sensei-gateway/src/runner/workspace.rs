//! Per-run temporary files.
//!
//! Each run gets `temp_<uuid>.<ext>` and `temp_<uuid>.exe` in the work
//! directory. Both are removed when the [`Workspace`] is dropped, whatever
//! way the run ended. Paths are absolute, so commands that run with the
//! work directory as their current directory still find them.

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::domain::RunError;

#[derive(Debug)]
pub struct Workspace {
    id: Uuid,
    dir: PathBuf,
    source: PathBuf,
    executable: PathBuf,
}

impl Workspace {
    /// Create the work directory if needed and write `code` to a fresh
    /// source file.
    pub async fn create(dir: &Path, extension: &str, code: &str) -> Result<Self, RunError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| RunError::Workspace {
                path: dir.to_path_buf(),
                source,
            })?;
        let dir = tokio::fs::canonicalize(dir)
            .await
            .map_err(|source| RunError::Workspace {
                path: dir.to_path_buf(),
                source,
            })?;

        let id = Uuid::new_v4();
        let workspace = Self {
            id,
            source: dir.join(format!("temp_{id}.{extension}")),
            executable: dir.join(format!("temp_{id}.exe")),
            dir,
        };

        tokio::fs::write(&workspace.source, code)
            .await
            .map_err(|source| RunError::Workspace {
                path: workspace.source.clone(),
                source,
            })?;

        Ok(workspace)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Absolute work directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        for path in [&self.source, &self.executable] {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    debug!(path = %path.display(), error = %e, "Failed to remove temp file");
                }
            }
        }
    }
}
