//! Apply command implementation.

use std::path::{Path, PathBuf};

use crate::app::configuration::FleetOverrides;
use crate::domain::AppError;

pub fn run_apply(
    config: &Path,
    data_root: Option<PathBuf>,
    unit_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let overrides = FleetOverrides { data_root, unit_dir };
    let outcome = crate::app::api::apply(config, &overrides)?;

    for name in &outcome.instances {
        println!("✅ Provisioned server '{}'", name);
    }
    for path in &outcome.copied_links {
        println!("⚠️  Symlinks unavailable, copied license to {}", path.display());
    }
    for path in &outcome.removed_units {
        println!("🗑️  Removed {}", path.display());
    }
    println!(
        "✅ Applied fleet: {} server(s), {} file(s) written",
        outcome.instances.len(),
        outcome.written.len()
    );
    Ok(())
}
