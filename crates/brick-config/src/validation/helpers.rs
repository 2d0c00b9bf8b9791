//! Shared helpers used by the validators.

use std::sync::LazyLock;

use regex::Regex;

/// URI scheme token, e.g. `https` or `capacitor`.
pub(crate) static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap());

/// One DNS label: alphanumerics with inner hyphens.
const LABEL: &str = r"[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?";

/// Hostname made of dot-separated labels.
pub(crate) static HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{LABEL}(\.{LABEL})*$")).unwrap());

/// A serialized origin: `scheme://host[:port]`, no path.
pub(crate) static ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[A-Za-z0-9.\-]+(:\d{1,5})?$").unwrap()
});

/// Push an error if `values` is empty.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, values: &[String]) {
    if values.is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error for every entry of `values` that does not match `re`.
pub(crate) fn validate_each(errors: &mut Vec<String>, name: &str, values: &[String], re: &Regex) {
    for value in values {
        if !re.is_match(value) {
            errors.push(format!("{name} entry {value:?} is invalid"));
        }
    }
}
