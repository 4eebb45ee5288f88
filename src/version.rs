//! Minimum-version gates for platform features.

use crate::error::{CliError, Result};
use semver::Version;

pub const ARTIFACTORY: &str = "Artifactory";

/// Parse a product version string leniently.
///
/// Products report versions such as `7.84.3`, `7.104` or `7.84.3-rc1`; only the leading
/// numeric components take part in the comparison and missing ones count as zero.
pub fn parse_lenient(raw: &str) -> Option<Version> {
    let core = raw.trim().trim_start_matches('v');
    let mut parts = core
        .split(|c: char| !c.is_ascii_digit())
        .take_while(|p| !p.is_empty())
        .map(|p| p.parse::<u64>());
    let major = parts.next()?.ok()?;
    let minor = parts.next().transpose().ok()?.unwrap_or(0);
    let patch = parts.next().transpose().ok()?.unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

pub fn is_at_least(actual: &str, required: &str) -> bool {
    match (parse_lenient(actual), parse_lenient(required)) {
        (Some(actual), Some(required)) => actual >= required,
        _ => false,
    }
}

/// Fail with `UnsupportedVersion` when `actual` is older than `required`.
pub fn validate_minimum_version(
    product: &str,
    feature: &str,
    actual: &str,
    required: &str,
) -> Result<()> {
    if is_at_least(actual, required) {
        return Ok(());
    }
    Err(CliError::UnsupportedVersion {
        product: product.to_string(),
        feature: feature.to_string(),
        required: required.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("7.84.3"), Some(Version::new(7, 84, 3)));
        assert_eq!(parse_lenient("7.104"), Some(Version::new(7, 104, 0)));
        assert_eq!(parse_lenient("7.84.3-rc1"), Some(Version::new(7, 84, 3)));
        assert_eq!(parse_lenient("garbage"), None);
    }

    #[test]
    fn test_numeric_not_lexical_ordering() {
        assert!(is_at_least("7.104.2", "7.84.3"));
        assert!(!is_at_least("7.84.2", "7.84.3"));
        assert!(is_at_least("7.84.3", "7.84.3"));
    }

    #[test]
    fn test_validate_minimum_version_names_both_versions() {
        let err =
            validate_minimum_version(ARTIFACTORY, "bulk repository creation", "7.80.0", "7.84.3")
                .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("7.84.3"));
        assert!(msg.contains("7.80.0"));
    }
}
