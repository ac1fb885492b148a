//! Start script generation.

/// First lines of every generated start script: move into the script's own
/// directory so the launch fragment can use relative paths.
pub const START_SCRIPT_PRELUDE: &str = "#!/usr/bin/env bash\ncd \"$(dirname \"$0\")\"\n";

/// Wrap a launch fragment into a complete `start.sh`.
pub fn materialize_start_script(fragment: &str) -> String {
    let mut script = String::with_capacity(START_SCRIPT_PRELUDE.len() + fragment.len() + 1);
    script.push_str(START_SCRIPT_PRELUDE);
    script.push_str(fragment);
    if !fragment.ends_with('\n') {
        script.push('\n');
    }
    script
}
