#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use spartan_ir::Span;
use spartan_rules::{BothLiteralsRule, ExceptionPolicy, RightLiteralRule};

use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults() {
    let options = Options::parse(&["input.txt"], no_env).unwrap();
    assert_eq!(
        options,
        Options {
            path: Some("input.txt".to_owned()),
            policy: ExceptionPolicy::default(),
            range: None,
            json: false,
        }
    );
}

#[test]
fn flags() {
    let options = Options::parse(
        &[
            "--json",
            "input.txt",
            "--range=3..9",
            "--right-literal=all",
            "--both-literals=none",
        ],
        no_env,
    )
    .unwrap();
    assert_eq!(options.path().unwrap(), "input.txt");
    assert!(options.json);
    assert_eq!(options.range, Some(Span::new(3, 9)));
    assert_eq!(
        options.policy,
        ExceptionPolicy::new(RightLiteralRule::All, BothLiteralsRule::None)
    );
}

#[test]
fn environment_is_a_fallback() {
    let env = |name: &str| match name {
        RIGHT_LITERAL_ENV => Some("all".to_owned()),
        BOTH_LITERALS_ENV => Some("none".to_owned()),
        _ => None,
    };
    let options = Options::parse(&["f"], env).unwrap();
    assert_eq!(options.policy.right_literal, RightLiteralRule::All);
    assert_eq!(options.policy.both_literals, BothLiteralsRule::None);

    let options = Options::parse(&["f", "--right-literal=all-but-boolean-and-null"], env).unwrap();
    assert_eq!(
        options.policy.right_literal,
        RightLiteralRule::AllButBooleanAndNull
    );
    assert_eq!(options.policy.both_literals, BothLiteralsRule::None);
}

#[test]
fn unknown_policy_name_is_conservative() {
    let options = Options::parse(&["f", "--right-literal=sometimes"], no_env).unwrap();
    assert_eq!(options.policy.right_literal, RightLiteralRule::None);
}

#[test]
fn bad_arguments() {
    assert!(matches!(
        Options::parse(&["--verbose"], no_env),
        Err(CliError::UnknownOption(opt)) if opt == "--verbose"
    ));
    assert!(matches!(
        Options::parse(&["a", "b"], no_env),
        Err(CliError::UnexpectedArgument(arg)) if arg == "b"
    ));
    assert!(matches!(
        Options::parse(&["a", "--range=9..3"], no_env),
        Err(CliError::BadRange(_))
    ));
    let options = Options::parse::<&str>(&[], no_env).unwrap();
    assert!(matches!(options.path(), Err(CliError::MissingPath)));
}

#[test]
fn ranges() {
    assert_eq!(parse_range("0..0").unwrap(), Span::new(0, 0));
    assert_eq!(parse_range(" 2 .. 14 ").unwrap(), Span::new(2, 14));
    for bad in ["", "5", "a..b", "1..", "..4", "-1..3", "7..2"] {
        assert!(parse_range(bad).is_err(), "{bad}");
    }
}
