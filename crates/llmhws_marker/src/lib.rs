// crates/llmhws_marker/src/lib.rs

//! Sentinel tokens shared by every crate that reads or writes
//! `_LLMHWS_` annotations.

use std::fmt;

/// Literal every annotation token starts with.
pub const SENTINEL: &str = "_LLMHWS_";

/// Suffix closing a begin marker.
pub const BEGIN_SUFFIX: &str = "_BEGIN_";

/// Suffix closing an end marker.
pub const END_SUFFIX: &str = "_END_";

/// Base name of the marker that ends the license/header block.
pub const HEADER_COMMENT: &str = "HEADER_COMMENT";

/// Which side of a region a marker delimits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Begin,
    End,
}

impl MarkerRole {
    pub fn suffix(self) -> &'static str {
        match self {
            MarkerRole::Begin => BEGIN_SUFFIX,
            MarkerRole::End => END_SUFFIX,
        }
    }
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::Begin => write!(f, "BEGIN"),
            MarkerRole::End => write!(f, "END"),
        }
    }
}

/// Builds the bare token (no comment prefix), e.g. `_LLMHWS_fsm_BEGIN_`.
pub fn marker_token(base: &str, role: MarkerRole) -> String {
    format!("{}{}{}", SENTINEL, base, role.suffix())
}
