//! Literal exception policy.
//!
//! Two independent settings decide whether literal operands may be moved:
//! [`RightLiteralRule`] for a literal sitting on the right of a binary
//! operator (`x == null`, `i < 10`) and [`BothLiteralsRule`] for literals in
//! any position. The policy is a plain value handed to every entry point;
//! there is no global configuration.
//!
//! Settings arriving as text go through `from_name`, which maps anything it
//! does not recognise to the member that moves the fewest operands.

use std::fmt;

/// Whether a literal on the right-hand side may be swapped to the left.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum RightLiteralRule {
    /// Any right-hand literal may move.
    All,
    /// Right-hand literals may move unless they are `true`, `false` or `null`.
    #[default]
    AllButBooleanAndNull,
    /// A right-hand literal never moves.
    None,
}

impl RightLiteralRule {
    pub const ALL: [RightLiteralRule; 3] = [Self::All, Self::AllButBooleanAndNull, Self::None];

    /// Parse a setting name, case-insensitively and ignoring `-` / `_`.
    ///
    /// Unrecognised names yield [`RightLiteralRule::None`].
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "all" => Self::All,
            "allbutbooleanandnull" => Self::AllButBooleanAndNull,
            "none" => Self::None,
            _ => {
                tracing::warn!(value = %name, "unknown right-literal rule, using `none`");
                Self::None
            }
        }
    }

    pub const fn as_name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AllButBooleanAndNull => "all-but-boolean-and-null",
            Self::None => "none",
        }
    }
}

/// Whether literals may be reordered at all.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum BothLiteralsRule {
    #[default]
    All,
    /// No literal operand is ever moved.
    None,
}

impl BothLiteralsRule {
    pub const ALL: [BothLiteralsRule; 2] = [Self::All, Self::None];

    /// Parse a setting name, case-insensitively and ignoring `-` / `_`.
    ///
    /// Unrecognised names yield [`BothLiteralsRule::None`].
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "all" => Self::All,
            "none" => Self::None,
            _ => {
                tracing::warn!(value = %name, "unknown both-literals rule, using `none`");
                Self::None
            }
        }
    }

    pub const fn as_name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}

/// The pair of literal rules in effect for one invocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct ExceptionPolicy {
    pub right_literal: RightLiteralRule,
    pub both_literals: BothLiteralsRule,
}

impl ExceptionPolicy {
    pub const fn new(right_literal: RightLiteralRule, both_literals: BothLiteralsRule) -> Self {
        ExceptionPolicy {
            right_literal,
            both_literals,
        }
    }

    /// The policy that moves the fewest operands.
    pub const CONSERVATIVE: ExceptionPolicy =
        ExceptionPolicy::new(RightLiteralRule::None, BothLiteralsRule::None);

    #[must_use]
    pub const fn with_right_literal(mut self, rule: RightLiteralRule) -> Self {
        self.right_literal = rule;
        self
    }

    #[must_use]
    pub const fn with_both_literals(mut self, rule: BothLiteralsRule) -> Self {
        self.both_literals = rule;
        self
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for RightLiteralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

impl fmt::Display for BothLiteralsRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

impl From<String> for RightLiteralRule {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<RightLiteralRule> for String {
    fn from(rule: RightLiteralRule) -> Self {
        rule.as_name().to_owned()
    }
}

impl From<String> for BothLiteralsRule {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<BothLiteralsRule> for String {
    fn from(rule: BothLiteralsRule) -> Self {
        rule.as_name().to_owned()
    }
}
