// crates/generate_prompts/src/generator.rs

use anyhow::{Context, Result};
use prompt_metadata::{load_metadata, DesignRecord};
use region_extractor::{
    extract_region, read_source, AnnotationMatcher, ExtractOptions, Extraction, Insertion,
};
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::naming::{instruction_text, prompt_file_name, unit_dir_name};

/// Separates the instruction header from the rewritten source.
pub const HEADER_SEPARATOR: &str = "\r\n\r\n";

/// A unit whose markers did not line up, reported in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitMarkerError {
    #[error("no `HEADER_COMMENT` end marker in {}", .file.display())]
    MissingHeader { file: PathBuf },
    #[error("unit `{unit}` has no begin marker in {}", .file.display())]
    MissingBegin { unit: String, file: PathBuf },
    #[error("unit `{unit}` has no end marker in {}", .file.display())]
    MissingEnd { unit: String, file: PathBuf },
}

impl UnitMarkerError {
    fn check(extraction: &Extraction, unit: &str, file: &Path) -> Vec<UnitMarkerError> {
        let mut problems = Vec::new();
        if !extraction.header_found {
            problems.push(UnitMarkerError::MissingHeader {
                file: file.to_path_buf(),
            });
        }
        if !extraction.begin_found {
            problems.push(UnitMarkerError::MissingBegin {
                unit: unit.to_string(),
                file: file.to_path_buf(),
            });
        } else if !extraction.end_found {
            problems.push(UnitMarkerError::MissingEnd {
                unit: unit.to_string(),
                file: file.to_path_buf(),
            });
        }
        problems
    }
}

/// One written prompt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    /// Absolute path of the prompt file.
    pub path: PathBuf,
    pub omitted_lines: usize,
}

/// Loads the metadata and writes every (unit, verbosity) output.
/// The design folder is expected to have been validated already.
pub fn generate_prompts(config: &GeneratorConfig) -> Result<Vec<GeneratedPrompt>> {
    let records = load_metadata(&config.metadata_path)?;
    log::debug!(
        "{} record(s) in {}",
        records.len(),
        config.metadata_path.display()
    );

    fs::create_dir_all(&config.output_root)
        .with_context(|| format!("Failed to create {}", config.output_root.display()))?;

    let matcher = AnnotationMatcher::new();
    let mut generated = Vec::new();
    for record in &records {
        generate_record(config, &matcher, record, &mut generated)?;
    }
    Ok(generated)
}

fn generate_record(
    config: &GeneratorConfig,
    matcher: &AnnotationMatcher,
    record: &DesignRecord,
    generated: &mut Vec<GeneratedPrompt>,
) -> Result<()> {
    let design_dir = config.design_dir();
    let source_path = design_dir.join(&record.path);
    let (dialect, content) = read_source(&source_path)?;
    let insertion = Insertion::from_comment_once(record.parameters.comment_once);
    let llm = config.parameters.llm.as_deref();

    for verbosity in &record.prompts {
        for unit in &record.units {
            let unit_dir = config
                .output_root
                .join(unit_dir_name(&unit.name, &verbosity.name));
            design_folder::recreate_dir(&unit_dir)?;
            design_folder::copy_companions(design_dir, &unit_dir)?;

            let instruction = instruction_text(&unit.instruction, llm);
            let extraction = extract_region(
                matcher,
                &content,
                ExtractOptions {
                    dialect,
                    unit: &unit.name,
                    instruction: &instruction,
                    insertion,
                },
            );

            let problems = UnitMarkerError::check(&extraction, &unit.name, &source_path);
            if let Some(first) = problems.first() {
                if config.strict {
                    return Err(first.clone().into());
                }
                for problem in &problems {
                    log::warn!("{}", problem);
                }
            }

            let prompt_path = config
                .output_root
                .join(prompt_file_name(&source_path, &unit.name, &verbosity.name));
            let mut prompt = String::with_capacity(
                verbosity.header.len() + HEADER_SEPARATOR.len() + extraction.body.len(),
            );
            prompt.push_str(&verbosity.header);
            prompt.push_str(HEADER_SEPARATOR);
            prompt.push_str(&extraction.body);
            fs::write(&prompt_path, prompt)
                .with_context(|| format!("Failed to write {}", prompt_path.display()))?;
            log::debug!(
                "Wrote {} ({} line(s) removed)",
                prompt_path.display(),
                extraction.omitted_lines
            );

            generated.push(GeneratedPrompt {
                path: absolute(&prompt_path)?,
                omitted_lines: extraction.omitted_lines,
            });
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(absolute_from(&cwd, path))
}

/// Joins a relative `path` onto `cwd` and resolves `.` and `..` lexically,
/// without touching the filesystem.
fn absolute_from(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// The closing report: a count line, then one line per prompt file.
pub fn render_summary(output_root: &Path, prompts: &[GeneratedPrompt]) -> String {
    let mut out = format!(
        "Generated {} output folders in {}. List: \n",
        prompts.len(),
        output_root.display()
    );
    for prompt in prompts {
        out.push_str(&format!(
            "{}: removed {} lines\n",
            prompt.path.display(),
            prompt.omitted_lines
        ));
    }
    out
}
