//! Legacy names that are never reported as modules.

use std::sync::LazyLock;

use modscan_core::constants::NAMESPACE_SEPARATOR;
use regex::Regex;

/// Sub-namespaces of the root kept only for backwards compatibility.
/// Each entry is a regex matched against the whole remainder of the name.
pub const LEGACY_EXCLUDED: &[&str] = &["core.*", "config.*"];

static LEGACY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^(?:{})$", LEGACY_EXCLUDED.join("|"))).ok());

/// True if `name` sits in a legacy sub-namespace directly below `root_namespace`.
///
/// Matching is anchored and case-sensitive: with root `my`, `my.core`,
/// `my.core.util` and `my.config` are excluded, `my.photos.core` is not.
pub fn is_excluded(name: &str, root_namespace: &str) -> bool {
    let Some(rest) = name
        .strip_prefix(root_namespace)
        .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
    else {
        return false;
    };
    LEGACY_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(rest))
}
