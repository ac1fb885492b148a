//! Host filesystem operations used to materialize a provisioning plan.
//!
//! All paths are absolute; the plan decides where things go and the store
//! only carries the writes out.

use std::path::Path;

use crate::domain::AppError;

/// How a link request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    /// Symlinks were unavailable and the target was copied instead.
    Copied,
}

/// Port for writing provisioning artifacts.
pub trait ArtifactStore {
    /// Replace a file's content and set its mode, creating parent directories
    /// as needed. Any previous content is discarded.
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), AppError>;

    /// Remove whatever is at `link`, then point it at `target`.
    fn link_or_copy(&self, target: &Path, link: &Path) -> Result<LinkOutcome, AppError>;

    /// Remove a file. Returns `false` if nothing was there.
    fn remove_file(&self, path: &Path) -> Result<bool, AppError>;

    fn file_exists(&self, path: &Path) -> bool;
}
