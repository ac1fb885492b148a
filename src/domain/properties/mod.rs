//! `server.properties` model and rendering.
//!
//! A server's configuration is a typed core (ports and RCON/query switches the
//! fleet validator depends on), any number of additional declared options, and
//! a free-form `extra-options` string map layered on top at render time.

mod encode;
mod keys;
mod render;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use encode::{encode_value, escape_value};
pub use keys::{DOTTED_KEYS, normalize_key};
pub use render::render_properties;

/// Default game port, also the default query port.
pub const DEFAULT_SERVER_PORT: u16 = 25565;
/// Default RCON port.
pub const DEFAULT_RCON_PORT: u16 = 25575;

/// A single declared option value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<u16> for OptionValue {
    fn from(value: u16) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

/// Declared configuration of one server (`[servers.<name>.server-config]`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerProperties {
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default)]
    pub enable_rcon: bool,
    #[serde(default = "default_rcon_port")]
    pub rcon_port: u16,
    #[serde(default)]
    pub rcon_password: String,
    #[serde(default)]
    pub enable_query: bool,
    #[serde(default = "default_server_port")]
    pub query_port: u16,
    /// Free-form overrides applied after every declared option.
    #[serde(default)]
    pub extra_options: IndexMap<String, String>,
    /// Declared options outside the typed core, in file order.
    #[serde(flatten)]
    pub options: IndexMap<String, OptionValue>,
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

fn default_rcon_port() -> u16 {
    DEFAULT_RCON_PORT
}

impl Default for ServerProperties {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            enable_rcon: false,
            rcon_port: DEFAULT_RCON_PORT,
            rcon_password: String::new(),
            enable_query: false,
            query_port: DEFAULT_SERVER_PORT,
            extra_options: IndexMap::new(),
            options: IndexMap::new(),
        }
    }
}

impl ServerProperties {
    /// Base map: typed core in fixed order, then declared options in file order.
    pub fn declared_options(&self) -> IndexMap<String, OptionValue> {
        let mut map = IndexMap::with_capacity(6 + self.options.len());
        map.insert("server-port".to_string(), self.server_port.into());
        map.insert("enable-rcon".to_string(), self.enable_rcon.into());
        map.insert("rcon-port".to_string(), self.rcon_port.into());
        map.insert("rcon-password".to_string(), self.rcon_password.clone().into());
        map.insert("enable-query".to_string(), self.enable_query.into());
        map.insert("query-port".to_string(), self.query_port.into());
        for (key, value) in &self.options {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    /// Base map with `extra-options` overlaid.
    ///
    /// An overridden key keeps its original position; new keys are appended.
    pub fn merged_options(&self) -> IndexMap<String, OptionValue> {
        let mut map = self.declared_options();
        for (key, value) in &self.extra_options {
            map.insert(key.clone(), OptionValue::String(value.clone()));
        }
        map
    }
}
