//! Real filesystem adapter backed by `std::fs`.

use std::path::Path;

use tracing::trace;

use stowage_core::application::ApplicationError;
use stowage_core::application::ports::Filesystem;
use stowage_core::error::StowageResult;

/// Production [`Filesystem`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

fn fs_error(path: &Path, e: std::io::Error) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StowageResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| fs_error(path, e))?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StowageResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| fs_error(path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StowageResult<()> {
        trace!(path = %path.display(), "remove_dir_all");
        std::fs::remove_dir_all(path).map_err(|e| fs_error(path, e))?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
