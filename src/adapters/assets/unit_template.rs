use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value, context};

use crate::domain::unit::{directive_value, quote_command};
use crate::domain::{AppError, ServiceUnit, UnitRenderer};

static UNITS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/units");

const UNIT_TEMPLATE: &str = "minecraft-server.service.j2";

fn unit_template_source() -> Result<&'static str, AppError> {
    UNITS_DIR
        .get_file(UNIT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Missing unit template: {}", UNIT_TEMPLATE)))
}

fn build_template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_template(UNIT_TEMPLATE, unit_template_source()?).map_err(|e| {
        AppError::TemplateError { name: UNIT_TEMPLATE.to_string(), details: e.to_string() }
    })?;

    Ok(env)
}

/// Renders systemd unit files from the embedded template.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedUnitTemplate;

impl EmbeddedUnitTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl UnitRenderer for EmbeddedUnitTemplate {
    fn render_unit(&self, unit: &ServiceUnit) -> Result<String, AppError> {
        let env = build_template_environment()?;
        let template = env.get_template(UNIT_TEMPLATE).map_err(|e| AppError::TemplateError {
            name: UNIT_TEMPLATE.to_string(),
            details: e.to_string(),
        })?;

        let working_directory =
            directive_value("WorkingDirectory", &unit.working_directory.to_string_lossy())?;
        let user = directive_value("User", &unit.user)?;
        let group = directive_value("Group", &unit.group)?;

        let ctx = context! {
            unit => Value::from_serialize(unit),
            environment => unit.environment_assignments(),
            exec_start => quote_command(&unit.exec_start),
            working_directory => working_directory,
            user => user,
            group => group,
            restart => unit.restart.as_str(),
        };

        template.render(ctx).map_err(|e| AppError::TemplateError {
            name: UNIT_TEMPLATE.to_string(),
            details: e.to_string(),
        })
    }
}
