//! `ArtifactStore` implementation for `FilesystemArtifactStore`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{ArtifactStore, LinkOutcome};

use super::FilesystemArtifactStore;

/// Sibling path used to stage a write before it replaces the target.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    path.with_file_name(format!(".{}.mcfleet-tmp", file_name))
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(AppError::from)
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: u32) -> Result<(), AppError> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(mode & 0o222 == 0);
    fs::set_permissions(path, perms).map_err(AppError::from)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::Unsupported, "symlinks are not supported"))
}

/// Only a filesystem or platform without symlinks justifies copying.
fn symlinks_unsupported(err: &std::io::Error) -> bool {
    err.kind() == std::io::ErrorKind::Unsupported
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Stage and rename so read-only targets can still be replaced.
        let staged = staging_path(path);
        let result = fs::write(&staged, content)
            .map_err(AppError::from)
            .and_then(|()| set_mode(&staged, mode))
            .and_then(|()| fs::rename(&staged, path).map_err(AppError::from));
        if let Err(err) = result {
            let _ = fs::remove_file(&staged);
            return Err(err);
        }

        debug!(path = %path.display(), mode = %format!("{:o}", mode), "wrote artifact");
        Ok(())
    }

    fn link_or_copy(&self, target: &Path, link: &Path) -> Result<LinkOutcome, AppError> {
        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent)?;
        }
        if fs::symlink_metadata(link).is_ok() {
            fs::remove_file(link)?;
        }

        match symlink(target, link) {
            Ok(()) => {
                debug!(link = %link.display(), target = %target.display(), "linked artifact");
                Ok(LinkOutcome::Linked)
            }
            Err(err) if symlinks_unsupported(&err) => {
                warn!(
                    link = %link.display(),
                    error = %err,
                    "symlink unavailable, copying license marker instead"
                );
                fs::copy(target, link)?;
                Ok(LinkOutcome::Copied)
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn remove_file(&self, path: &Path) -> Result<bool, AppError> {
        if fs::symlink_metadata(path).is_err() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        debug!(path = %path.display(), "removed artifact");
        Ok(true)
    }

    fn file_exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}
