//! Canonical display names for source files with several spellings.
//!
//! One logical unit shows up in reports under spec, body, and
//! child/separate spellings (`pkg.ads`, `pkg.adb`, `pkg-child.adb`). The
//! aggregator keys them together via [`unit_key`] and folds every spelling
//! it encounters through [`resolve`] to pick the name worth displaying.

use std::path::Path;

/// Whether `name` carries a specification-file extension (`ads`, any case).
fn is_spec_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("ads"))
}

/// Fold one candidate spelling into the currently adopted name.
///
/// Adopts the candidate when no name is held yet (`current` empty), when
/// the candidate is strictly shorter (filters out synthetic
/// child/separate spellings), or when the candidate is a spec file.
///
/// Only the incoming candidate is ever inspected; the held name's own spec
/// status is not re-checked, so a later, shorter body name displaces an
/// already-adopted spec name. Listings depend on this exact fold; keep it.
pub fn resolve(current: &str, candidate: &str) -> String {
    if current.is_empty() || candidate.len() < current.len() || is_spec_file(candidate) {
        candidate.to_string()
    } else {
        current.to_string()
    }
}

/// Key that groups all spellings of one logical source unit.
///
/// GNAT file naming: `pkg.ads`/`pkg.adb` are a unit's spec and body and
/// `pkg-child.adb` a child or separate of it; all share the stem prefix
/// before the first `-`. Directory parts and the extension are dropped and
/// the rest lowercased.
pub fn unit_key(file: &str) -> String {
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file);
    let prefix = stem.split('-').next().unwrap_or(stem);
    prefix.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_adopts_first_candidate() {
        assert_eq!(resolve("", "pkg-child.adb"), "pkg-child.adb");
    }

    #[test]
    fn test_resolve_prefers_shorter() {
        assert_eq!(resolve("pkg-child.adb", "pkg.adb"), "pkg.adb");
    }

    #[test]
    fn test_resolve_prefers_spec_over_equal_length_body() {
        assert_eq!(resolve("pkg.adb", "pkg.ads"), "pkg.ads");
    }

    #[test]
    fn test_resolve_keeps_current_for_longer_body() {
        assert_eq!(resolve("pkg.ads", "pkg-child.adb"), "pkg.ads");
    }

    #[test]
    fn test_resolve_spec_adopted_even_when_longer() {
        assert_eq!(resolve("pkg.adb", "pkg_util.ads"), "pkg_util.ads");
    }

    #[test]
    fn test_resolve_spec_extension_any_case() {
        assert_eq!(resolve("pkg.adb", "pkg.ADS"), "pkg.ADS");
        assert_eq!(resolve("pkg.adb", "pkg.Ads"), "pkg.Ads");
    }

    // The fold never re-checks the held name: a shorter body displaces an
    // adopted spec purely on length.
    #[test]
    fn test_resolve_shorter_body_displaces_adopted_spec() {
        let name = resolve("", "pkg_util.ads");
        assert_eq!(name, "pkg_util.ads");
        let name = resolve(&name, "p.adb");
        assert_eq!(name, "p.adb");
    }

    #[test]
    fn test_resolve_spec_examples() {
        assert_eq!(resolve("", "pkg-child.adb"), "pkg-child.adb");
        assert_eq!(resolve("pkg-child.adb", "pkg.ads"), "pkg.ads");
        assert_eq!(resolve("pkg.ads", "pkg-child.adb"), "pkg.ads");
    }

    #[test]
    fn test_unit_key_strips_extension() {
        assert_eq!(unit_key("pkg.ads"), "pkg");
        assert_eq!(unit_key("pkg.adb"), "pkg");
    }

    #[test]
    fn test_unit_key_truncates_child_suffix() {
        assert_eq!(unit_key("pkg-child.adb"), "pkg");
        assert_eq!(unit_key("pkg-a-b.adb"), "pkg");
    }

    #[test]
    fn test_unit_key_lowercases() {
        assert_eq!(unit_key("Pkg.ADS"), "pkg");
    }

    #[test]
    fn test_unit_key_ignores_directories() {
        assert_eq!(unit_key("src/nested/pkg-sep.adb"), "pkg");
    }

    #[test]
    fn test_unit_key_distinct_units_stay_distinct() {
        assert_ne!(unit_key("pkg.ads"), unit_key("other.ads"));
    }
}
