//! Matching candidate files against the descriptor's `content` globs.

use crate::error::{IssueKind, ThemeError, ValidationErrors};
use crate::util::strip_dot_slash;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Split a content entry into its exclusion flag and the bare pattern.
fn split_negation(raw: &str) -> (bool, &str) {
    match raw.strip_prefix('!') {
        Some(rest) => (true, strip_dot_slash(rest)),
        None => (false, strip_dot_slash(raw)),
    }
}

fn compile(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Whether a content entry has no pattern left once `!` and `./` are removed.
/// Such entries match nothing.
pub fn is_blank(raw: &str) -> bool {
    split_negation(raw).1.is_empty()
}

/// Check a single content entry, returning the parser's message on failure.
/// Blank entries are accepted.
pub fn check_pattern(raw: &str) -> Result<(), String> {
    if is_blank(raw) {
        return Ok(());
    }
    let (_, pattern) = split_negation(raw);
    compile(pattern).map(drop).map_err(|e| e.to_string())
}

/// Compiled `content` globs.
///
/// A path matches when at least one include pattern matches it and no
/// `!`-prefixed exclude pattern does. A leading `./` is ignored on both
/// patterns and paths.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    includes: GlobSet,
    excludes: GlobSet,
}

impl ContentMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ThemeError> {
        let mut includes = GlobSetBuilder::new();
        let mut excludes = GlobSetBuilder::new();
        let mut errs = ValidationErrors::new();

        for (idx, raw) in patterns.iter().enumerate() {
            let (negated, pattern) = split_negation(raw.as_ref());
            if pattern.is_empty() {
                continue;
            }
            match compile(pattern) {
                Ok(glob) if negated => {
                    excludes.add(glob);
                }
                Ok(glob) => {
                    includes.add(glob);
                }
                Err(e) => errs.report(format!("content[{idx}]"), IssueKind::Pattern, e.to_string()),
            }
        }
        errs.into_result()?;

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|e| {
                let mut errs = ValidationErrors::new();
                errs.report("content", IssueKind::Pattern, e.to_string());
                ThemeError::MalformedConfig(errs)
            })
        };

        Ok(Self {
            includes: build(includes)?,
            excludes: build(excludes)?,
        })
    }

    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path = path.strip_prefix(".").unwrap_or(path);
        self.includes.is_match(path) && !self.excludes.is_match(path)
    }

    /// Keep only the paths that would be scanned.
    pub fn filter<I, P>(&self, paths: I) -> impl Iterator<Item = P>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().filter(move |p| self.is_match(p))
    }

    /// Whether no include pattern exists, so nothing can match.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }
}
