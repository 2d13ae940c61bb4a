// crates/region_extractor/src/lib.rs

//! Strips a marker-delimited unit out of an HDL source file and puts an
//! instruction comment in its place.

use anyhow::{Context, Result};
use hdl_dialect::Dialect;
use std::fs;
use std::path::Path;

pub mod annotation;
pub mod marker_names;
pub mod scanner;

pub use annotation::{parse_marker, AnnotationMatcher, ParsedMarker};
pub use marker_names::{generate_name, MarkerNames};
pub use scanner::{ExtractOptions, Extraction, Insertion, RegionExtractor, ScanState};

/// Rewrites `content` for one unit.
pub fn extract_region(
    matcher: &AnnotationMatcher,
    content: &str,
    options: ExtractOptions<'_>,
) -> Extraction {
    RegionExtractor::new(matcher, options).extract(content)
}

/// Resolves the dialect from `path`, then reads the file.
/// An unsupported extension fails before the file is opened.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<(Dialect, String)> {
    let path = path.as_ref();
    let dialect = Dialect::from_path(path)
        .with_context(|| format!("Cannot pick a comment style for {}", path.display()))?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok((dialect, content))
}

/// Reads the file with [`read_source`] and rewrites it for one unit.
pub fn extract_region_from_file<P: AsRef<Path>>(
    matcher: &AnnotationMatcher,
    path: P,
    unit: &str,
    instruction: &str,
    insertion: Insertion,
) -> Result<Extraction> {
    let (dialect, content) = read_source(path)?;
    Ok(extract_region(
        matcher,
        &content,
        ExtractOptions {
            dialect,
            unit,
            instruction,
            insertion,
        },
    ))
}
