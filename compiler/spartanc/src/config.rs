//! Command options.
//!
//! The literal policy is layered: a `--right-literal=` / `--both-literals=`
//! flag wins over the matching environment variable, which wins over the
//! default policy.

use spartan_ir::Span;
use spartan_rules::{BothLiteralsRule, ExceptionPolicy, RightLiteralRule};

use crate::CliError;

pub const RIGHT_LITERAL_ENV: &str = "SPARTAN_RIGHT_LITERAL";
pub const BOTH_LITERALS_ENV: &str = "SPARTAN_BOTH_LITERALS";

/// Options shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub path: Option<String>,
    pub policy: ExceptionPolicy,
    /// Line-relative byte range limiting `rewrite`; the whole line if unset.
    pub range: Option<Span>,
    /// `highlight` prints JSON instead of a report.
    pub json: bool,
}

impl Options {
    /// Parse the arguments following the command name, reading policy
    /// fallbacks through `env`.
    pub fn parse<S: AsRef<str>>(
        args: &[S],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Options, CliError> {
        let mut options = Options::default();
        let mut right_literal = env(RIGHT_LITERAL_ENV).map(|v| RightLiteralRule::from_name(&v));
        let mut both_literals = env(BOTH_LITERALS_ENV).map(|v| BothLiteralsRule::from_name(&v));

        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--right-literal=") {
                right_literal = Some(RightLiteralRule::from_name(value));
            } else if let Some(value) = arg.strip_prefix("--both-literals=") {
                both_literals = Some(BothLiteralsRule::from_name(value));
            } else if let Some(value) = arg.strip_prefix("--range=") {
                options.range = Some(parse_range(value)?);
            } else if arg == "--json" {
                options.json = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.to_owned()));
            } else if options.path.is_none() {
                options.path = Some(arg.to_owned());
            } else {
                return Err(CliError::UnexpectedArgument(arg.to_owned()));
            }
        }

        if let Some(rule) = right_literal {
            options.policy.right_literal = rule;
        }
        if let Some(rule) = both_literals {
            options.policy.both_literals = rule;
        }
        tracing::debug!(
            right_literal = %options.policy.right_literal,
            both_literals = %options.policy.both_literals,
            "policy resolved"
        );
        Ok(options)
    }

    /// [`Options::parse`] against the process environment.
    pub fn from_env_args<S: AsRef<str>>(args: &[S]) -> Result<Options, CliError> {
        Self::parse(args, |name| std::env::var(name).ok())
    }

    pub fn path(&self) -> Result<&str, CliError> {
        self.path.as_deref().ok_or(CliError::MissingPath)
    }
}

/// Parse `START..END` (byte offsets, `START <= END`).
pub fn parse_range(text: &str) -> Result<Span, CliError> {
    let bad = || CliError::BadRange(text.to_owned());
    let (start, end) = text.split_once("..").ok_or_else(bad)?;
    let start: u32 = start.trim().parse().map_err(|_| bad())?;
    let end: u32 = end.trim().parse().map_err(|_| bad())?;
    if start > end {
        return Err(bad());
    }
    Ok(Span::new(start, end))
}

#[cfg(test)]
mod tests;
