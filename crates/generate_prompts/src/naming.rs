// crates/generate_prompts/src/naming.rs

use std::ffi::OsStr;
use std::path::Path;

/// Folder holding the companions of one (unit, verbosity) pair.
pub fn unit_dir_name(unit: &str, verbosity: &str) -> String {
    format!("{}_{}", unit, verbosity)
}

/// `prompt_<verbosity>_<stem>_<unit><.ext>`.
pub fn prompt_file_name(source: &Path, unit: &str, verbosity: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let ext = source
        .extension()
        .and_then(OsStr::to_str)
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    format!("prompt_{}_{}_{}{}", verbosity, stem, unit, ext)
}

/// Text of the instruction comment, before the dialect prefix is added.
pub fn instruction_text(instruction: &str, llm: Option<&str>) -> String {
    match llm {
        Some(name) if !name.is_empty() => format!("Instructions for {}: {}", name, instruction),
        _ => instruction.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_dir_name() {
        assert_eq!(unit_dir_name("fsm", "short"), "fsm_short");
    }

    #[test]
    fn test_prompt_file_name() {
        assert_eq!(
            prompt_file_name(Path::new("src/rtl/aes_core.sv"), "sbox", "detailed"),
            "prompt_detailed_aes_core_sbox.sv"
        );
    }

    #[test]
    fn test_instruction_text() {
        assert_eq!(instruction_text("Do it.", None), "Do it.");
        assert_eq!(
            instruction_text("Do it.", Some("GPT")),
            "Instructions for GPT: Do it."
        );
        assert_eq!(instruction_text("Do it.", Some("")), "Do it.");
    }
}
