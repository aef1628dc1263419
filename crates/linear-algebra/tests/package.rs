//! Checks the published package metadata.

use std::path::Path;

/// Returns whether `s` consists of `parts` dot-separated decimal numbers without leading zeros.
fn is_dotted_version(s: &str, parts: usize) -> bool {
    let numbers: Vec<&str> = s.split('.').collect();
    numbers.len() == parts
        && numbers.iter().all(|n| {
            !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) && (*n == "0" || !n.starts_with('0'))
        })
}

#[test]
fn version_is_semver() {
    let version = env!("CARGO_PKG_VERSION");
    assert!(
        is_dotted_version(version, 3),
        "version '{version}' is not MAJOR.MINOR.PATCH"
    );
}

#[test]
fn license() {
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");

    let license = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../LICENSE");
    let text = match std::fs::read_to_string(&license) {
        Ok(text) => text,
        Err(e) => panic!("failed to read {}: {e}", license.display()),
    };
    assert!(text.starts_with("MIT License"), "unexpected LICENSE contents");
}

#[test]
fn rust_version() {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    assert!(
        is_dotted_version(rust_version, 2),
        "rust-version '{rust_version}' is not MAJOR.MINOR"
    );
}

#[test]
fn identity() {
    assert_eq!(env!("CARGO_PKG_NAME"), "linear-algebra");
    assert_eq!(
        env!("CARGO_PKG_REPOSITORY"),
        "https://github.com/alphameo/linear-algebra"
    );
}

#[test]
fn dotted_version_parsing() {
    assert!(is_dotted_version("1.0.0", 3));
    assert!(is_dotted_version("10.20.30", 3));
    assert!(!is_dotted_version("1.0", 3));
    assert!(!is_dotted_version("1.0.0-rc1", 3));
    assert!(!is_dotted_version("01.0.0", 3));
    assert!(is_dotted_version("1.77", 2));
    assert!(!is_dotted_version("1..77", 2));
}
