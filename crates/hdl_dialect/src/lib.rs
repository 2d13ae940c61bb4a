//! `hdl_dialect` — the comment syntax of each supported HDL, picked from
//! the file extension.
//!
//!  * **Two dialects** – VHDL (`--`) and Verilog/SystemVerilog (`//`).
//!  * **Fail fast** – any other extension is rejected with
//!    [`UnsupportedDialectError`] before a single line is scanned.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Every line-comment prefix this crate knows about, in no particular order.
pub const ALL_PREFIXES: &[&str] = &[Dialect::Vhdl.prefix(), Dialect::Verilog.prefix()];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported file extension `{extension}`")]
pub struct UnsupportedDialectError {
    pub extension: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    Vhdl,
    Verilog,
}

impl Dialect {
    /// Resolves the dialect from a bare extension (`"vhd"`, `"sv"`, ...).
    /// Matching is case-insensitive.
    pub fn from_extension(ext: &str) -> Result<Self, UnsupportedDialectError> {
        match ext.to_lowercase().as_str() {
            "vhd" => Ok(Dialect::Vhdl),
            "v" | "sv" => Ok(Dialect::Verilog),
            _ => Err(UnsupportedDialectError {
                extension: ext.to_string(),
            }),
        }
    }

    /// Same as [`Dialect::from_extension`] but takes a whole path.
    /// A path without an extension is reported with an empty extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, UnsupportedDialectError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }

    /// The bare line-comment prefix, without the separating space.
    pub const fn prefix(self) -> &'static str {
        match self {
            Dialect::Vhdl => "--",
            Dialect::Verilog => "//",
        }
    }

    /// Renders `text` as a single line comment: prefix, one space, text.
    pub fn comment(self, text: &str) -> String {
        format!("{} {}", self.prefix(), text)
    }

    /// If `line` (already trimmed) starts with this dialect's prefix, returns the rest.
    pub fn strip_prefix(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.prefix())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Dialect::Vhdl => "vhdl",
                Dialect::Verilog => "verilog",
            }
        )
    }
}
