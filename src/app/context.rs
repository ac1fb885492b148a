use crate::domain::UnitRenderer;
use crate::ports::ArtifactStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, R: UnitRenderer> {
    store: S,
    renderer: R,
}

impl<S: ArtifactStore, R: UnitRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the unit renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
