pub mod apply;
pub mod check;
mod diagnostics;
pub mod plan;
pub mod render;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
