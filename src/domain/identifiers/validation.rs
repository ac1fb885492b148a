/// Longest accepted instance name. Keeps `mcfleet-<name>.service` well under
/// the service manager's unit name limit.
pub const MAX_NAME_LEN: usize = 64;

/// Whether `name` can be used as a directory, state directory and unit name.
///
/// Accepted: 1 to [`MAX_NAME_LEN`] ASCII letters, digits, `-` and `_`,
/// starting with a letter or digit. This rules out separators, `.`/`..`,
/// hidden names and anything a shell or unit file would need to quote.
pub fn is_valid_instance_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_NAME_LEN
        && first.is_ascii_alphanumeric()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
