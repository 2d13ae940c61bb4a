// crates/region_extractor/src/annotation.rs

use hdl_dialect::{Dialect, ALL_PREFIXES};
use llmhws_marker::{MarkerRole, BEGIN_SUFFIX, END_SUFFIX, SENTINEL};
use regex::Regex;

/// Recognises any `_LLMHWS_..._BEGIN_` / `_END_` comment line, whatever the
/// dialect or unit it belongs to.
///
/// Build it once and hand it to every [`crate::RegionExtractor`].
#[derive(Clone, Debug)]
pub struct AnnotationMatcher {
    pattern: Regex,
}

impl AnnotationMatcher {
    pub fn new() -> Self {
        let prefixes = ALL_PREFIXES
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"^\s*(?:{})[ \t]*{}(.+?)_(?:BEGIN|END)_",
            prefixes,
            regex::escape(SENTINEL)
        );
        // The pattern is assembled from fixed literals only.
        let pattern = Regex::new(&pattern).expect("annotation pattern is valid");
        Self { pattern }
    }

    /// `true` if the line looks like an annotation (leading whitespace allowed,
    /// trailing content ignored).
    pub fn is_annotation(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl Default for AnnotationMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// A marker parsed out of a line written in a given dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedMarker<'a> {
    pub base: &'a str,
    pub role: MarkerRole,
}

/// Parses a whole line as `<prefix> <token>`, tolerating any amount of
/// whitespace around and between the two. Returns `None` unless the line is
/// nothing but a well-formed marker in `dialect`.
pub fn parse_marker(dialect: Dialect, line: &str) -> Option<ParsedMarker<'_>> {
    let token = dialect.strip_prefix(line.trim())?.trim_start();
    let rest = token.strip_prefix(SENTINEL)?;
    let (base, role) = if let Some(base) = rest.strip_suffix(BEGIN_SUFFIX) {
        (base, MarkerRole::Begin)
    } else if let Some(base) = rest.strip_suffix(END_SUFFIX) {
        (base, MarkerRole::End)
    } else {
        return None;
    };
    if base.is_empty() {
        return None;
    }
    Some(ParsedMarker { base, role })
}
