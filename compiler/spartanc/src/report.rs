//! Terminal reports rendered with `ariadne`.
//!
//! Spans coming out of the engine are byte offsets relative to one line;
//! reports are built against the whole file, in character offsets.

use ariadne::{Color, Label, Report, ReportKind, Source};
use spartan_ir::Span;
use spartan_parse::ParseError;
use spartan_rules::ShortestOperand;

/// Normalize a span to ensure end > start (required by ariadne).
pub(crate) fn normalize_span(start: usize, end: usize) -> (usize, usize) {
    (start, end.max(start + 1))
}

/// Character offset of byte `offset` in `source`.
pub(crate) fn char_offset(source: &str, offset: usize) -> usize {
    source
        .get(..offset)
        .map_or(offset, |prefix| prefix.chars().count())
}

/// File-level character range of a line-relative span.
fn file_range(source: &str, line_offset: usize, span: Span) -> std::ops::Range<usize> {
    let start = char_offset(source, line_offset + span.start as usize);
    let end = char_offset(source, line_offset + span.end as usize);
    let (start, end) = normalize_span(start, end);
    start..end
}

/// Highlight the opportunities found on one line.
pub(crate) fn print_opportunities(path: &str, source: &str, line_offset: usize, ranges: &[Span]) {
    let Some(&first) = ranges.first() else {
        return;
    };
    let mut report = Report::build(ReportKind::Advice, (path, file_range(source, line_offset, first)))
        .with_message(ShortestOperand::NAME);
    for &span in ranges {
        report = report.with_label(
            Label::new((path, file_range(source, line_offset, span)))
                .with_message(ShortestOperand::DESCRIPTION)
                .with_color(Color::Yellow),
        );
    }
    report
        .finish()
        .eprint((path, Source::from(source)))
        .ok();
}

/// Report the syntax errors of one line.
pub(crate) fn print_parse_errors(
    path: &str,
    source: &str,
    line_offset: usize,
    errors: &[ParseError],
) {
    for err in errors {
        let range = file_range(source, line_offset, err.span());
        Report::build(ReportKind::Error, (path, range.clone()))
            .with_message("syntax error, line left unchanged")
            .with_label(
                Label::new((path, range))
                    .with_message(err.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((path, Source::from(source)))
            .ok();
    }
}
