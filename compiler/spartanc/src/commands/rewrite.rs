//! The `rewrite` command: print the file with every expression line in
//! canonical form.

use rayon::prelude::*;
use spartan_fmt::format_expr;
use spartan_ir::Span;
use spartan_parse::ParseError;
use spartan_rules::{ExceptionPolicy, ShortestOperand};

use super::{print_errors, read_file, LineErrors, ParsedLine};
use crate::config::Options;
use crate::input::{expression_lines, replace_lines, SourceLine};
use crate::CliError;

const WHOLE_LINE: Span = Span::new(0, u32::MAX);

/// Outcome for one expression line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewrittenLine {
    pub number: usize,
    pub offset: usize,
    /// The rewritten expression, or the line as written if nothing changed.
    pub text: String,
    pub changed: bool,
    /// A line with syntax errors is never rewritten.
    pub errors: Vec<ParseError>,
}

/// Rewrite every expression line of `source`. `range` is line-relative and
/// defaults to the whole line.
pub fn rewrite_source(
    source: &str,
    policy: ExceptionPolicy,
    range: Option<Span>,
) -> Vec<RewrittenLine> {
    let rule = ShortestOperand::new(policy);
    let range = range.unwrap_or(WHOLE_LINE);
    expression_lines(source)
        .par_iter()
        .map(|line| rewrite_line(rule, line, range))
        .collect()
}

fn rewrite_line(rule: ShortestOperand, line: &SourceLine<'_>, range: Span) -> RewrittenLine {
    let parsed = ParsedLine::new(line);
    let unchanged = |errors| RewrittenLine {
        number: line.number,
        offset: line.offset,
        text: line.text.to_owned(),
        changed: false,
        errors,
    };
    if parsed.output.has_errors() {
        return unchanged(parsed.output.errors);
    }

    let result = rule.rewrite(&parsed.output.arena, parsed.output.root, range);
    if !result.changed {
        return unchanged(Vec::new());
    }
    let indent = &line.text[..line.text.len() - line.text.trim_start().len()];
    RewrittenLine {
        number: line.number,
        offset: line.offset,
        text: format!(
            "{indent}{}",
            format_expr(&result.arena, &parsed.interner, result.root)
        ),
        changed: true,
        errors: Vec::new(),
    }
}

pub fn rewrite_file(options: &Options) -> Result<(), CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let lines = rewrite_source(&source, options.policy, options.range);

    let errors: Vec<LineErrors> = lines
        .iter()
        .filter(|line| !line.errors.is_empty())
        .map(|line| LineErrors {
            offset: line.offset,
            errors: line.errors.clone(),
        })
        .collect();
    print_errors(path, &source, &errors);

    let replacements: Vec<(usize, String)> = lines
        .into_iter()
        .filter(|line| line.changed)
        .map(|line| (line.number, line.text))
        .collect();
    tracing::debug!(path, rewritten = replacements.len(), "rewrite done");
    print!("{}", replace_lines(&source, &replacements));
    Ok(())
}
