//! Utility functions and helpers

use crate::error::{ExportError, Result};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = if path == "~" {
            ""
        } else if let Some(rest) = path.strip_prefix("~/") {
            rest
        } else {
            return Ok(PathBuf::from(path));
        };

        dirs::home_dir()
            .map(|home_dir| home_dir.join(rest))
            .ok_or_else(|| ExportError::Config("Cannot determine home directory".to_string()))
    }

    /// Check that the path exists and is a regular file
    pub fn check_regular_file(path: &Path) -> Result<()> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ExportError::FileNotFound(format!("{}: {}", path.display(), e))
            }
            ErrorKind::PermissionDenied => {
                ExportError::PermissionDenied(format!("{}: {}", path.display(), e))
            }
            _ => ExportError::Io(e),
        })?;

        if !metadata.is_file() {
            return Err(ExportError::Config(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        Ok(())
    }

    /// Fail if anything already exists at the path
    pub fn ensure_absent(path: &Path) -> Result<()> {
        match std::fs::symlink_metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            _ => Err(ExportError::OutputExists(path.display().to_string())),
        }
    }

    /// Create a new file, never truncating an existing one
    pub fn create_new(path: &Path) -> Result<File> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ExportError::OutputExists(path.display().to_string()),
                ErrorKind::PermissionDenied => ExportError::PermissionDenied(format!(
                    "failed to create {}: {}",
                    path.display(),
                    e
                )),
                _ => ExportError::Io(e),
            })
    }
}
