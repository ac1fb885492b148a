pub mod assets;
pub mod filesystem;

pub use assets::unit_template::EmbeddedUnitTemplate;
pub use filesystem::FilesystemArtifactStore;
