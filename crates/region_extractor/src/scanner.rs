// crates/region_extractor/src/scanner.rs

use hdl_dialect::Dialect;
use crate::annotation::{parse_marker, AnnotationMatcher, ParsedMarker};
use crate::marker_names::MarkerNames;

/// Terminator appended to every inserted instruction line.
pub const INSTRUCTION_LINE_BREAK: &str = "\r\n";

/// Where the scan currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Before the header-end marker; everything is dropped.
    Header,
    /// Pass-through; waits for the target unit's begin marker.
    Normal,
    /// Inside the target unit; everything is dropped.
    Unit,
}

/// How the instruction replaces the unit body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// One instruction line when the unit opens.
    Once,
    /// One instruction line per omitted content line.
    PerLine,
}

impl Insertion {
    pub fn from_comment_once(comment_once: bool) -> Self {
        if comment_once {
            Insertion::Once
        } else {
            Insertion::PerLine
        }
    }
}

/// What a single source line is, as far as the scan is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    HeaderEnd,
    UnitBegin,
    UnitEnd,
    /// Marker-like, but not one this scan waits for in its state.
    StrayAnnotation,
    Content,
}

/// What to do with the line that caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Drop,
    Emit,
    Instruct,
    /// Omitted unit line: counted, and instructed in per-line mode.
    Omit,
}

/// Input of a single (source, unit) extraction.
#[derive(Clone, Debug)]
pub struct ExtractOptions<'a> {
    pub dialect: Dialect,
    pub unit: &'a str,
    /// Instruction text, without comment prefix or line break.
    pub instruction: &'a str,
    pub insertion: Insertion,
}

/// Rewritten body plus what the scan observed along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub body: String,
    /// Unit-interior lines that were not themselves marker-like.
    pub omitted_lines: usize,
    /// Instruction comment lines written into `body`.
    pub inserted_lines: usize,
    pub header_found: bool,
    pub begin_found: bool,
    pub end_found: bool,
}

/// The line-state machine. A fresh instance handles exactly one
/// (source, unit) pair.
pub struct RegionExtractor<'a> {
    matcher: &'a AnnotationMatcher,
    options: ExtractOptions<'a>,
    names: MarkerNames,
    instruction_line: String,
    state: ScanState,
}

impl<'a> RegionExtractor<'a> {
    pub fn new(matcher: &'a AnnotationMatcher, options: ExtractOptions<'a>) -> Self {
        let mut instruction_line = options.dialect.comment(options.instruction);
        instruction_line.push_str(INSTRUCTION_LINE_BREAK);
        let names = MarkerNames::for_unit(options.dialect, options.unit);
        Self {
            matcher,
            options,
            names,
            instruction_line,
            state: ScanState::Header,
        }
    }

    /// Consumes the extractor and rewrites `content`. Source lines keep their
    /// original terminators.
    pub fn extract(mut self, content: &str) -> Extraction {
        let mut out = Extraction::default();

        for line in content.split_inclusive('\n') {
            let kind = self.classify(line);
            let (next, action) = self.transition(kind);

            match (self.state, next) {
                (ScanState::Header, ScanState::Normal) => out.header_found = true,
                (ScanState::Normal, ScanState::Unit) => out.begin_found = true,
                (ScanState::Unit, ScanState::Normal) => out.end_found = true,
                _ => {}
            }

            match action {
                Action::Drop => {}
                Action::Emit => out.body.push_str(line),
                Action::Instruct => {
                    out.body.push_str(&self.instruction_line);
                    out.inserted_lines += 1;
                }
                Action::Omit => {
                    out.omitted_lines += 1;
                    if self.options.insertion == Insertion::PerLine {
                        out.body.push_str(&self.instruction_line);
                        out.inserted_lines += 1;
                    }
                }
            }
            self.state = next;
        }

        log::debug!(
            "unit `{}`: state {:?} at EOF, {} line(s) omitted",
            self.options.unit,
            self.state,
            out.omitted_lines
        );
        out
    }

    fn classify(&self, line: &str) -> LineKind {
        if let Some(marker) = parse_marker(self.options.dialect, line) {
            // Only the generated marker awaited in this state counts.
            let expected = match self.state {
                ScanState::Header => &self.names.header_end,
                ScanState::Normal => &self.names.unit_begin,
                ScanState::Unit => &self.names.unit_end,
            };
            if !self.same_marker(marker, expected) {
                return LineKind::StrayAnnotation;
            }
            return match self.state {
                ScanState::Header => LineKind::HeaderEnd,
                ScanState::Normal => LineKind::UnitBegin,
                ScanState::Unit => LineKind::UnitEnd,
            };
        }
        if self.matcher.is_annotation(line) {
            LineKind::StrayAnnotation
        } else {
            LineKind::Content
        }
    }

    /// Compares on parsed tokens so spacing after the comment prefix is irrelevant.
    fn same_marker(&self, marker: ParsedMarker<'_>, expected: &str) -> bool {
        parse_marker(self.options.dialect, expected) == Some(marker)
    }

    fn transition(&self, kind: LineKind) -> (ScanState, Action) {
        match (self.state, kind) {
            (ScanState::Header, LineKind::HeaderEnd) => (ScanState::Normal, Action::Drop),
            (ScanState::Header, _) => (ScanState::Header, Action::Drop),

            (ScanState::Normal, LineKind::UnitBegin) => match self.options.insertion {
                Insertion::Once => (ScanState::Unit, Action::Instruct),
                Insertion::PerLine => (ScanState::Unit, Action::Drop),
            },
            (ScanState::Normal, LineKind::Content) => (ScanState::Normal, Action::Emit),
            (ScanState::Normal, _) => (ScanState::Normal, Action::Drop),

            (ScanState::Unit, LineKind::UnitEnd) => (ScanState::Normal, Action::Drop),
            (ScanState::Unit, LineKind::Content) => (ScanState::Unit, Action::Omit),
            (ScanState::Unit, _) => (ScanState::Unit, Action::Drop),
        }
    }
}
