//! `var(--name)` references held by colour tokens.

use regex::Regex;
use std::sync::LazyLock;

static VAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*var\(\s*(--[A-Za-z0-9_-]+)\s*(?:,\s*(.*?))?\s*\)\s*$")
        .expect("static regex compiles")
});

/// A parsed `var(--name[, fallback])` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarRef<'a> {
    /// Custom property name including the leading `--`.
    pub property: &'a str,
    pub fallback: Option<&'a str>,
}

/// Parse a token value as a custom property reference.
///
/// Returns `None` for literal colours such as `#fff` or `rgb(0 0 0)`.
pub fn parse_var(value: &str) -> Option<VarRef<'_>> {
    let caps = VAR_REF.captures(value)?;
    let property = caps.get(1)?.as_str();
    let fallback = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty());
    Some(VarRef { property, fallback })
}
