use super::OptionValue;

/// Characters that are structural in a `key=value` properties line.
const ESCAPED_CHARS: [char; 3] = [':', '=', '\''];

/// Encode one option value as it appears after the `=` of a properties line.
///
/// Booleans become `true`/`false`, strings are escaped, and every other value
/// falls back to its plain `Display` form. There is no error path: a value of
/// an unexpected kind is written as-is rather than rejected.
pub fn encode_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(true) => "true".to_string(),
        OptionValue::Bool(false) => "false".to_string(),
        OptionValue::String(s) => escape_value(s),
        other => other.to_string(),
    }
}

/// Prefix every `:`, `=` and `'` with a backslash.
pub fn escape_value(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
