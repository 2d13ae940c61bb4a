// crates/generate_prompts/tests/common/mod.rs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TOP_SV: &str = "\
// Copyright header
// more license text
// _LLMHWS_HEADER_COMMENT_END_
module top (input logic clk, output logic busy);
  // _LLMHWS_fsm_BEGIN_
  always_ff @(posedge clk) state <= next;
  assign next = state + 1;
  // _LLMHWS_fsm_END_
  // _LLMHWS_busy_BEGIN_
  assign busy = state != 0;
  // _LLMHWS_busy_END_
endmodule
";

pub const SRC_YAML: &str = r#"
- path: src/top.sv
  units:
    - [fsm, "Implement the state register."]
    - [busy, "Drive the busy flag."]
  prompts:
    short: "Complete the module."
    long: "Complete the SystemVerilog module below without changing its ports."
  parameters:
    comment_once: false
"#;

/// A complete design folder with one annotated SystemVerilog file.
pub fn design_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_design(dir.path(), SRC_YAML, "src/top.sv", TOP_SV);
    dir
}

pub fn write_design(root: &Path, yaml: &str, rel_source: &str, source: &str) {
    fs::write(root.join("src.yaml"), yaml).unwrap();
    fs::write(root.join("ORIGIN"), "https://example.com/top\n").unwrap();
    fs::write(root.join("prove.tcl"), "prove -all\n").unwrap();
    fs::create_dir_all(root.join("properties")).unwrap();
    fs::write(root.join("properties/busy.sv"), "assert property (busy |-> clk);\n").unwrap();
    let source_path = root.join(rel_source);
    fs::create_dir_all(source_path.parent().unwrap()).unwrap();
    fs::write(source_path, source).unwrap();
}

pub fn metadata_path(dir: &TempDir) -> PathBuf {
    dir.path().join("src.yaml")
}
