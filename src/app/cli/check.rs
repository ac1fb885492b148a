//! Check command implementation.

use std::path::Path;

use crate::app::api::CheckOptions;
use crate::domain::AppError;

pub fn run_check(config: &Path, strict: bool) -> Result<i32, AppError> {
    let outcome = crate::app::api::check(config, CheckOptions { strict })?;

    Ok(outcome.exit_code)
}
