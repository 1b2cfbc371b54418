/// Release version of this build of `BioKit`.
pub const BIOKIT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns [`BIOKIT_VERSION`] for diagnostics and compatibility checks.
#[uniffi::export]
#[must_use]
pub fn version() -> String {
    BIOKIT_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!BIOKIT_VERSION.is_empty());
    }
}
