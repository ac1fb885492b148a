//! Render command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_render(config: &Path, name: &str) -> Result<(), AppError> {
    let properties = crate::app::api::render(config, name)?;
    println!("{}", properties);
    Ok(())
}
