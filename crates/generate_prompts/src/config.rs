// crates/generate_prompts/src/config.rs

use std::path::{Path, PathBuf};

use crate::params::PromptParameters;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Path to `src.yaml`; its parent is the design folder.
    pub metadata_path: PathBuf,
    pub output_root: PathBuf,
    pub parameters: PromptParameters,
    /// Treat missing markers as errors instead of warnings.
    pub strict: bool,
}

impl GeneratorConfig {
    pub fn design_dir(&self) -> &Path {
        match self.metadata_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}
