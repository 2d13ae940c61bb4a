// crates/prompt_metadata/src/lib.rs

//! Typed view of a design folder's `src.yaml`.
//!
//! ```yaml
//! - path: src/top.sv
//!   units:
//!     - [fsm, "Implement the next-state logic."]
//!   prompts:
//!     short: "Complete the module."
//!     long: "You are given a SystemVerilog module ..."
//!   parameters:
//!     comment_once: true
//! ```

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the metadata description inside a design folder.
pub const METADATA_FILE_NAME: &str = "src.yaml";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed metadata in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A named region of a source file and the instruction that replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Unit {
    pub name: String,
    pub instruction: String,
}

impl From<(String, String)> for Unit {
    fn from((name, instruction): (String, String)) -> Self {
        Self { name, instruction }
    }
}

/// One header variant; each yields its own prompt file per unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verbosity {
    pub name: String,
    pub header: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RecordParameters {
    /// Insert the instruction once per unit instead of once per omitted line.
    pub comment_once: bool,
}

/// One annotated source file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DesignRecord {
    /// Relative to the design folder.
    pub path: PathBuf,
    pub units: Vec<Unit>,
    /// Kept in the order they are written.
    #[serde(deserialize_with = "ordered_prompts")]
    pub prompts: Vec<Verbosity>,
    pub parameters: RecordParameters,
}

fn ordered_prompts<'de, D>(deserializer: D) -> Result<Vec<Verbosity>, D::Error>
where
    D: Deserializer<'de>,
{
    // serde_yaml::Mapping keeps insertion order.
    let mapping = serde_yaml::Mapping::deserialize(deserializer)?;
    mapping
        .into_iter()
        .map(|(k, v)| {
            let name = scalar_to_string(k)
                .ok_or_else(|| <D::Error as de::Error>::custom("verbosity names must be scalars"))?;
            let header = scalar_to_string(v).ok_or_else(|| {
                <D::Error as de::Error>::custom(format!("prompt header for `{}` must be a string", name))
            })?;
            Ok(Verbosity { name, header })
        })
        .collect()
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses the metadata from a YAML string. `origin` only labels errors.
pub fn parse_metadata(yaml: &str, origin: &Path) -> Result<Vec<DesignRecord>, MetadataError> {
    serde_yaml::from_str(yaml).map_err(|source| MetadataError::Yaml {
        path: origin.to_path_buf(),
        source,
    })
}

/// Loads and parses the metadata file at `path`.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Vec<DesignRecord>, MetadataError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_metadata(&yaml, path)
}
