use crate::domain::{AppError, ServiceUnit, UnitRenderer};

/// Renders a unit as `unit:<description>` so tests can assert on it cheaply.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubUnitRenderer;

impl UnitRenderer for StubUnitRenderer {
    fn render_unit(&self, unit: &ServiceUnit) -> Result<String, AppError> {
        Ok(format!("unit:{}", unit.description))
    }
}
