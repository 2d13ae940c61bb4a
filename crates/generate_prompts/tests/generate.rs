// crates/generate_prompts/tests/generate.rs

mod common;

use generate_prompts::{generate_prompts, GeneratorConfig, PromptParameters, UnitMarkerError};
use std::fs;
use tempfile::TempDir;

fn config(design: &TempDir, out: &TempDir) -> GeneratorConfig {
    GeneratorConfig {
        metadata_path: common::metadata_path(design),
        output_root: out.path().to_path_buf(),
        parameters: PromptParameters::default(),
        strict: false,
    }
}

#[test]
fn test_every_unit_and_verbosity_is_generated() {
    let design = common::design_folder();
    let out = TempDir::new().unwrap();
    let prompts = generate_prompts(&config(&design, &out)).unwrap();

    let names: Vec<String> = prompts
        .iter()
        .map(|p| p.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "prompt_short_top_fsm.sv",
            "prompt_short_top_busy.sv",
            "prompt_long_top_fsm.sv",
            "prompt_long_top_busy.sv",
        ]
    );
    assert_eq!(
        prompts.iter().map(|p| p.omitted_lines).collect::<Vec<_>>(),
        vec![2, 1, 2, 1]
    );
    assert!(prompts.iter().all(|p| p.path.is_absolute()));

    for dir in ["fsm_short", "busy_short", "fsm_long", "busy_long"] {
        let unit_dir = out.path().join(dir);
        assert!(unit_dir.join("ORIGIN").is_file(), "{dir}");
        assert!(unit_dir.join("prove.tcl").is_file(), "{dir}");
        assert!(unit_dir.join("properties/busy.sv").is_file(), "{dir}");
        assert!(unit_dir.join("src/top.sv").is_file(), "{dir}");
    }
}

#[test]
fn test_prompt_content_per_line_mode() {
    let design = common::design_folder();
    let out = TempDir::new().unwrap();
    generate_prompts(&config(&design, &out)).unwrap();

    let prompt = fs::read_to_string(out.path().join("prompt_short_top_fsm.sv")).unwrap();
    assert_eq!(
        prompt,
        "Complete the module.\r\n\r\n\
         module top (input logic clk, output logic busy);\n\
         // Implement the state register.\r\n\
         // Implement the state register.\r\n\
         \x20 assign busy = state != 0;\n\
         endmodule\n"
    );
}

#[test]
fn test_llm_name_and_comment_once() {
    let design = TempDir::new().unwrap();
    let yaml = common::SRC_YAML.replace("comment_once: false", "comment_once: true");
    common::write_design(design.path(), &yaml, "src/top.sv", common::TOP_SV);
    let out = TempDir::new().unwrap();
    let mut cfg = config(&design, &out);
    cfg.parameters.llm = Some("Claude".into());

    let prompts = generate_prompts(&cfg).unwrap();
    assert_eq!(prompts[1].omitted_lines, 1);

    let prompt = fs::read_to_string(out.path().join("prompt_long_top_busy.sv")).unwrap();
    let instruction = "// Instructions for Claude: Drive the busy flag.\r\n";
    assert_eq!(prompt.matches(instruction).count(), 1);
    assert!(prompt.contains("always_ff @(posedge clk)"));
    assert!(!prompt.contains("_LLMHWS_"));
}

#[test]
fn test_rerun_replaces_unit_folders() {
    let design = common::design_folder();
    let out = TempDir::new().unwrap();
    let stale = out.path().join("fsm_short/stale.txt");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "left over").unwrap();

    let first = generate_prompts(&config(&design, &out)).unwrap();
    assert!(!stale.exists());
    let before = fs::read(out.path().join("prompt_long_top_fsm.sv")).unwrap();
    let second = generate_prompts(&config(&design, &out)).unwrap();
    let after = fs::read(out.path().join("prompt_long_top_fsm.sv")).unwrap();
    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_output_root_is_created() {
    let design = common::design_folder();
    let out = TempDir::new().unwrap();
    let mut cfg = config(&design, &out);
    cfg.output_root = out.path().join("nested/prompts");
    generate_prompts(&cfg).unwrap();
    assert!(cfg.output_root.join("prompt_short_top_busy.sv").is_file());
}

#[test]
fn test_unsupported_extension_fails() {
    let design = TempDir::new().unwrap();
    let yaml = common::SRC_YAML.replace("src/top.sv", "src/top.txt");
    common::write_design(design.path(), &yaml, "src/top.txt", common::TOP_SV);
    let out = TempDir::new().unwrap();

    let err = generate_prompts(&config(&design, &out)).unwrap_err();
    assert!(err
        .downcast_ref::<hdl_dialect::UnsupportedDialectError>()
        .is_some());
    assert!(!out.path().join("fsm_short").exists());
}

#[test]
fn test_missing_begin_marker_is_lenient_by_default() {
    let design = TempDir::new().unwrap();
    let yaml = common::SRC_YAML.replace("[busy,", "[ghost,");
    common::write_design(design.path(), &yaml, "src/top.sv", common::TOP_SV);
    let out = TempDir::new().unwrap();

    let prompts = generate_prompts(&config(&design, &out)).unwrap();
    assert_eq!(prompts.len(), 4);
    let ghost = fs::read_to_string(out.path().join("prompt_short_top_ghost.sv")).unwrap();
    // whole body passes through, minus markers
    assert!(ghost.contains("assign busy = state != 0;"));
    assert!(ghost.contains("assign next = state + 1;"));
    assert_eq!(prompts[1].omitted_lines, 0);
}

#[test]
fn test_missing_begin_marker_fails_in_strict_mode() {
    let design = TempDir::new().unwrap();
    let yaml = common::SRC_YAML.replace("[busy,", "[ghost,");
    common::write_design(design.path(), &yaml, "src/top.sv", common::TOP_SV);
    let out = TempDir::new().unwrap();
    let mut cfg = config(&design, &out);
    cfg.strict = true;

    let err = generate_prompts(&cfg).unwrap_err();
    match err.downcast_ref::<UnitMarkerError>() {
        Some(UnitMarkerError::MissingBegin { unit, .. }) => assert_eq!(unit, "ghost"),
        other => panic!("unexpected error: {:?}", other),
    }
}
