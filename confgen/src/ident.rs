//! Identifier derivation for generated type and field names.
//!
//! Document keys arrive in snake_case, kebab-case, dotted, or already-cased
//! forms. This module turns them into the `UpperCamelCase` identifiers used
//! for generated structs and fields, with a deterministic, purely textual
//! algorithm so equal documents always yield equal names.

/// Converts a raw document key into an `UpperCamelCase` identifier.
///
/// The key is split on `_`, `-`, and `.`; each segment whose first
/// character is alphabetic gets that character uppercased, with the rest
/// of the segment kept verbatim. Segments are concatenated in order.
/// Keys that are already upper-case stay upper-case, and segments that
/// start with a digit are left untouched.
///
/// # Examples
///
/// ```
/// use confgen::ident::camel_case;
///
/// assert_eq!(camel_case("test_case"), "TestCase");
/// assert_eq!(camel_case("test-case"), "TestCase");
/// assert_eq!(camel_case("TEST_CASE"), "TESTCASE");
/// assert_eq!(camel_case("123test"), "123test");
/// ```
#[must_use]
pub fn camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for segment in raw.split(['_', '-', '.']) {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            Some(_) => out.push_str(segment),
            None => {}
        }
    }
    out
}

/// Derives the name of the root generated type from the top-level name.
///
/// Applies [`camel_case`] first. When the result ends with the suffix
/// `config` in any letter case and that suffix is not already
/// capitalized, its first letter is uppercased, so `testconfig` becomes
/// `TestConfig` rather than `Testconfig`. This is a special case for the
/// common habit of naming the top level after the word "config" without
/// a separator; it is not a general word-boundary heuristic.
///
/// # Examples
///
/// ```
/// use confgen::ident::root_type_name;
///
/// assert_eq!(root_type_name("config"), "Config");
/// assert_eq!(root_type_name("testconfig"), "TestConfig");
/// assert_eq!(root_type_name("test_config"), "TestConfig");
/// assert_eq!(root_type_name("settings"), "Settings");
/// ```
#[must_use]
pub fn root_type_name(top_level: &str) -> String {
    const SUFFIX: &str = "config";

    let mut name = camel_case(top_level);
    if name.len() >= SUFFIX.len() {
        let idx = name.len() - SUFFIX.len();
        if name.is_char_boundary(idx)
            && name[idx..].eq_ignore_ascii_case(SUFFIX)
            && !name[idx..].starts_with('C')
        {
            name.replace_range(idx..=idx, "C");
        }
    }
    name
}
