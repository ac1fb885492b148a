//! Filesystem adapter for the `ArtifactStore` port.

mod artifact_store;

/// Writes artifacts straight to the host filesystem.
#[derive(Debug, Clone, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}
