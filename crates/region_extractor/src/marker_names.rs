// crates/region_extractor/src/marker_names.rs

use hdl_dialect::Dialect;
use llmhws_marker::{marker_token, MarkerRole, HEADER_COMMENT};

/// Renders a full marker line (comment prefix included) for `base`/`role`,
/// e.g. `// _LLMHWS_fsm_BEGIN_`.
pub fn generate_name(dialect: Dialect, base: &str, role: MarkerRole) -> String {
    dialect.comment(&marker_token(base, role))
}

/// The three marker lines a single extraction waits for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerNames {
    pub header_end: String,
    pub unit_begin: String,
    pub unit_end: String,
}

impl MarkerNames {
    pub fn for_unit(dialect: Dialect, unit: &str) -> Self {
        Self {
            header_end: generate_name(dialect, HEADER_COMMENT, MarkerRole::End),
            unit_begin: generate_name(dialect, unit, MarkerRole::Begin),
            unit_end: generate_name(dialect, unit, MarkerRole::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_name_vhdl() {
        assert_eq!(
            generate_name(Dialect::Vhdl, "alu", MarkerRole::Begin),
            "-- _LLMHWS_alu_BEGIN_"
        );
    }

    #[test]
    fn test_generate_name_verilog() {
        assert_eq!(
            generate_name(Dialect::Verilog, "alu", MarkerRole::End),
            "// _LLMHWS_alu_END_"
        );
    }

    #[test]
    fn test_marker_names_for_unit() {
        let names = MarkerNames::for_unit(Dialect::Verilog, "fsm");
        assert_eq!(names.header_end, "// _LLMHWS_HEADER_COMMENT_END_");
        assert_eq!(names.unit_begin, "// _LLMHWS_fsm_BEGIN_");
        assert_eq!(names.unit_end, "// _LLMHWS_fsm_END_");
    }
}
