use std::borrow::Cow;

/// Keys the server reads in dotted form (`rcon.port`) even though every
/// other key is hyphenated.
pub const DOTTED_KEYS: [&str; 3] = ["query-port", "rcon-password", "rcon-port"];

/// Rewrite a declared key to the name written into `server.properties`.
///
/// Only the members of [`DOTTED_KEYS`] are rewritten; any other key passes
/// through untouched even if it contains hyphens.
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if DOTTED_KEYS.contains(&key) { Cow::Owned(key.replace('-', ".")) } else { Cow::Borrowed(key) }
}
