//! The `highlight` command: report where a rewrite would apply.

use rayon::prelude::*;
use spartan_ir::Span;
use spartan_parse::ParseError;
use spartan_rules::{ExceptionPolicy, ShortestOperand};

use super::{print_errors, read_file, LineErrors, ParsedLine};
use crate::config::Options;
use crate::input::expression_lines;
use crate::{report, CliError};

/// Opportunity ranges of one expression line, relative to the line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LineOpportunities {
    pub line: usize,
    #[serde(skip)]
    pub offset: usize,
    pub ranges: Vec<Span>,
    /// Lines with syntax errors are still searched; missing operands are
    /// skipped.
    #[serde(skip)]
    pub errors: Vec<ParseError>,
}

/// Find the opportunities on every expression line of `source`.
pub fn highlight_source(source: &str, policy: ExceptionPolicy) -> Vec<LineOpportunities> {
    let rule = ShortestOperand::new(policy);
    expression_lines(source)
        .par_iter()
        .map(|line| {
            let parsed = ParsedLine::new(line);
            LineOpportunities {
                line: line.number,
                offset: line.offset,
                ranges: rule.opportunities(&parsed.output.arena, parsed.output.root),
                errors: parsed.output.errors,
            }
        })
        .collect()
}

pub fn highlight_file(options: &Options) -> Result<(), CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let lines = highlight_source(&source, options.policy);

    let errors: Vec<LineErrors> = lines
        .iter()
        .filter(|line| !line.errors.is_empty())
        .map(|line| LineErrors {
            offset: line.offset,
            errors: line.errors.clone(),
        })
        .collect();
    print_errors(path, &source, &errors);

    let found: Vec<&LineOpportunities> =
        lines.iter().filter(|line| !line.ranges.is_empty()).collect();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }
    for line in found {
        report::print_opportunities(path, &source, line.offset, &line.ranges);
        for range in &line.ranges {
            println!("{path}:{}:{range}", line.line);
        }
    }
    Ok(())
}
