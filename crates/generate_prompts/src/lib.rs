// crates/generate_prompts/src/lib.rs

//! Builds benchmark prompts from an annotated HDL design folder: one
//! prompt file and one companion folder per (unit, verbosity) pair.

pub mod config;
pub mod generator;
pub mod naming;
pub mod params;

pub use config::GeneratorConfig;
pub use generator::{generate_prompts, render_summary, GeneratedPrompt, UnitMarkerError};
pub use params::{ParameterError, PromptParameters, UnknownParameterError, PARAMETERS_HELP};
