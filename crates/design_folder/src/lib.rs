// crates/design_folder/src/lib.rs

use anyhow::{Context, Result};
use prompt_metadata::METADATA_FILE_NAME;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const ORIGIN_FILE: &str = "ORIGIN";
pub const PROVE_SCRIPT: &str = "prove.tcl";
pub const PROPERTIES_DIR: &str = "properties";
pub const SOURCES_DIR: &str = "src";

/// An entry every design folder must contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignAsset {
    pub name: &'static str,
    pub is_dir: bool,
    /// What the entry should hold, shown when it is missing.
    pub purpose: &'static str,
}

impl fmt::Display for DesignAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "`{}` folder", self.name)
        } else {
            write!(f, "`{}`", self.name)
        }
    }
}

pub const REQUIRED_ASSETS: [DesignAsset; 5] = [
    DesignAsset {
        name: METADATA_FILE_NAME,
        is_dir: false,
        purpose: "It must be a YAML file containing information about the code fragments marked for omission.",
    },
    DesignAsset {
        name: ORIGIN_FILE,
        is_dir: false,
        purpose: "It should be a text file containing an absolute URL pointing to the reference.",
    },
    DesignAsset {
        name: PROPERTIES_DIR,
        is_dir: true,
        purpose: "It should contain the SystemVerilog files describing the security assertions.",
    },
    DesignAsset {
        name: SOURCES_DIR,
        is_dir: true,
        purpose: "It should contain the original design source code.",
    },
    DesignAsset {
        name: PROVE_SCRIPT,
        is_dir: false,
        purpose: "It should contain a tcl script verifying the assertions when invoked via proper tools.",
    },
];

#[derive(Debug, Error)]
#[error("{} required {} missing from {}", .missing.len(), entries_noun(.missing.len()), .folder.display())]
pub struct MissingDesignAssetError {
    pub folder: PathBuf,
    pub missing: Vec<DesignAsset>,
}

fn entries_noun(count: usize) -> &'static str {
    if count == 1 {
        "entry"
    } else {
        "entries"
    }
}

impl MissingDesignAssetError {
    /// One line per missing entry, in the order of [`REQUIRED_ASSETS`].
    pub fn report_lines(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|asset| {
                format!(
                    "Error: {} not found in path `{}`. {}",
                    asset,
                    self.folder.display(),
                    asset.purpose
                )
            })
            .collect()
    }
}

/// Checks that every required entry exists in `folder`. Content is not inspected.
pub fn check_design_folder<P: AsRef<Path>>(folder: P) -> Result<(), MissingDesignAssetError> {
    let folder = folder.as_ref();
    let missing: Vec<DesignAsset> = REQUIRED_ASSETS
        .iter()
        .filter(|asset| !folder.join(asset.name).exists())
        .copied()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingDesignAssetError {
            folder: folder.to_path_buf(),
            missing,
        })
    }
}

/// Deletes `dir` if present and creates it empty.
pub fn recreate_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if dir.exists() {
        log::debug!("Removing existing {}", dir.display());
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

/// Recursively copies `src` into `dst`, which must not exist yet.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("{} escaped {}", entry.path().display(), src.display()))?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }
    Ok(())
}

/// Copies `ORIGIN`, `prove.tcl`, `properties/` and `src/` from the design
/// folder into `unit_dir`.
pub fn copy_companions(design_dir: &Path, unit_dir: &Path) -> Result<()> {
    for file in [ORIGIN_FILE, PROVE_SCRIPT] {
        let from = design_dir.join(file);
        let to = unit_dir.join(file);
        fs::copy(&from, &to)
            .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    }
    for dir in [PROPERTIES_DIR, SOURCES_DIR] {
        copy_tree(&design_dir.join(dir), &unit_dir.join(dir))?;
    }
    Ok(())
}
