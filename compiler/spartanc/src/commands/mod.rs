//! Command handlers for the `spartan` CLI.
//!
//! Each command has a pure `*_source` function that works on text and
//! returns per-line results, and a `*_file` wrapper that reads the file and
//! prints. Shared per-line parsing lives here.

mod check;
mod highlight;
mod rewrite;

pub use check::check_file;
pub use highlight::{highlight_file, highlight_source, LineOpportunities};
pub use rewrite::{rewrite_file, rewrite_source, RewrittenLine};

use spartan_ir::StringInterner;
use spartan_parse::{parse, ParseError, ParseOutput};

use crate::input::SourceLine;
use crate::{report, CliError};

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::read(path, err))
}

/// One expression line, parsed.
struct ParsedLine {
    interner: StringInterner,
    output: ParseOutput,
}

impl ParsedLine {
    fn new(line: &SourceLine<'_>) -> Self {
        let mut interner = StringInterner::new();
        let output = parse(line.text, &mut interner);
        if output.has_errors() {
            tracing::debug!(
                line = line.number,
                errors = output.errors.len(),
                "line has syntax errors"
            );
        }
        ParsedLine { interner, output }
    }
}

/// Syntax errors of one line, for reporting after the parallel pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineErrors {
    pub offset: usize,
    pub errors: Vec<ParseError>,
}

fn print_errors(path: &str, source: &str, errors: &[LineErrors]) {
    for line in errors {
        report::print_parse_errors(path, source, line.offset, &line.errors);
    }
}
