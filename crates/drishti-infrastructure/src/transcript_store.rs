//! Writes exported chat transcripts to disk.

use crate::paths::DrishtiPaths;
use drishti_core::DrishtiError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    pub fn new(paths: &DrishtiPaths) -> Self {
        Self {
            dir: paths.transcripts_dir(),
        }
    }

    /// Stores transcripts in `dir` instead of the default location.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `contents` to `file_name` inside the transcripts directory and
    /// returns the full path.
    pub fn save(&self, contents: &str, file_name: &str) -> Result<PathBuf, DrishtiError> {
        if file_name.contains(['/', '\\']) || file_name.is_empty() {
            return Err(DrishtiError::config(format!(
                "Invalid transcript file name: {file_name:?}"
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), "transcript saved");
        Ok(path)
    }
}
