use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::is_valid_instance_name;
use crate::domain::AppError;

/// A validated server instance name.
///
/// Instance names become directory, state-directory and unit names; see
/// [`is_valid_instance_name`] for the accepted alphabet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceName(String);

impl InstanceName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_instance_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidInstanceName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for InstanceName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for InstanceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<InstanceName> for String {
    fn from(val: InstanceName) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for InstanceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        InstanceName::new(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for InstanceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
