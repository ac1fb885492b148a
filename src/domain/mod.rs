pub mod error;
pub mod eula;
pub mod fleet;
pub mod host;
pub mod identifiers;
pub mod paths;
pub mod properties;
pub mod provision;
pub mod script;
pub mod unit;
pub mod validation;

pub use error::AppError;
pub use fleet::{FleetConfig, InstanceDefinition};
pub use host::{AccountPlan, FirewallPlan, UserRequest};
pub use identifiers::InstanceName;
pub use properties::{OptionValue, ServerProperties, render_properties};
pub use provision::{Artifact, FleetPlan, InstancePlan, Link};
pub use unit::{ServiceUnit, UnitRenderer};
pub use validation::{PortSets, ValidatedFleet, Violation, validate, validate_fleet};
