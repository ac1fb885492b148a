pub mod instance_name;
pub mod validation;

pub use instance_name::InstanceName;
