use super::{ServerProperties, encode_value, normalize_key};

/// Render the full `server.properties` text for one server.
///
/// One `key=value` line per merged option, in merge order, joined with `\n`
/// and without a trailing newline.
pub fn render_properties(props: &ServerProperties) -> String {
    props
        .merged_options()
        .iter()
        .map(|(key, value)| format!("{}={}", normalize_key(key), encode_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}
