mod fleet_builder;

pub use fleet_builder::{FleetBuilder, ServerBuilder};
#[allow(unused_imports)]
pub use ports::{MemoryArtifactStore, StoredEntry, StubUnitRenderer};
