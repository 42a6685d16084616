//! Format validation for caller-supplied path parameters.

use regex::Regex;

/// ISO 639-1 two-letter language code shape.
const ISO_639_1_PATTERN: &str = r"^[a-z]{2}$";

/// ISO 639-3 three-letter language code shape.
const ISO_639_3_PATTERN: &str = r"^[a-z]{3}$";

/// Check whether `code` has the shape of an ISO 639-1 or ISO 639-3
/// language code.
///
/// Input is lowercased before matching, so `"EN"` is as valid as `"en"`.
/// This is a format check only; no lookup against a canonical language
/// list is performed. A regex evaluation failure counts as invalid
/// rather than propagating.
pub fn is_valid_language_code(code: &str) -> bool {
    let code = code.to_lowercase();

    let matches = |pattern: &str| {
        Regex::new(pattern)
            .map(|re| re.is_match(&code))
            .unwrap_or(false)
    };

    matches(ISO_639_1_PATTERN) || matches(ISO_639_3_PATTERN)
}
