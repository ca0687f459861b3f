//! The `check` command: fail if any line is not in canonical form.

use super::{highlight_source, print_errors, read_file, LineErrors};
use crate::config::Options;
use crate::{report, CliError};

/// Check a file. Returns `Ok(false)` if any line has an opportunity or a
/// syntax error; everything found is reported on stderr.
pub fn check_file(options: &Options) -> Result<bool, CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let lines = highlight_source(&source, options.policy);

    let mut opportunities = 0;
    let mut errors = Vec::new();
    for line in &lines {
        if !line.ranges.is_empty() {
            report::print_opportunities(path, &source, line.offset, &line.ranges);
            opportunities += line.ranges.len();
        }
        if !line.errors.is_empty() {
            errors.push(LineErrors {
                offset: line.offset,
                errors: line.errors.clone(),
            });
        }
    }
    print_errors(path, &source, &errors);

    if opportunities == 0 && errors.is_empty() {
        println!("OK: {path} ({} expressions)", lines.len());
        return Ok(true);
    }
    eprintln!(
        "{path}: {opportunities} operand reordering(s), {} line(s) with syntax errors",
        errors.len()
    );
    Ok(false)
}
