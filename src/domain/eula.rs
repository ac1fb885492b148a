/// Content of the shared license-acceptance artifact every server's
/// `eula.txt` points at.
pub const EULA_ACCEPTANCE: &str = "# eula.txt managed by mcfleet\neula=true\n";
