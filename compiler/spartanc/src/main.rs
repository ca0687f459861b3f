//! Spartan CLI
//!
//! Puts the shortest operand first in commutative expression chains.

use spartanc::commands::{check_file, highlight_file, rewrite_file};
use spartanc::config::{Options, BOTH_LITERALS_ENV, RIGHT_LITERAL_ENV};
use spartanc::{init_tracing, CliError};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let options = || Options::from_env_args(&args[2..]);

    let result = match command.as_str() {
        "rewrite" => options().and_then(|options| rewrite_file(&options)),
        "highlight" => options().and_then(|options| highlight_file(&options)),
        "check" => match options().and_then(|options| check_file(&options)) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(err) => Err(err),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("spartan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Spartan (shortest operand first)");
    println!();
    println!("Usage: spartan <command> <file> [options]");
    println!();
    println!("Input files hold one expression per line; blank lines and `//` lines are skipped.");
    println!();
    println!("Commands:");
    println!("  rewrite <file>       Print the file with every expression canonicalized");
    println!("  highlight <file>     Report where operands can be reordered");
    println!("  check <file>         Exit with status 1 if anything can be reordered");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Rewrite options:");
    println!("  --range=START..END   Only rewrite operators overlapping these line offsets");
    println!();
    println!("Highlight options:");
    println!("  --json               Print ranges as JSON");
    println!();
    println!("Literal policy (flag, then environment, then default):");
    println!("  --right-literal=<rule>   all | all-but-boolean-and-null (default) | none");
    println!("                           env: {RIGHT_LITERAL_ENV}");
    println!("  --both-literals=<rule>   all (default) | none");
    println!("                           env: {BOTH_LITERALS_ENV}");
    println!();
    println!("Examples:");
    println!("  spartan rewrite exprs.txt");
    println!("  spartan rewrite exprs.txt --range=0..12");
    println!("  spartan highlight exprs.txt --json");
    println!("  spartan check exprs.txt --both-literals=none");
    println!("  RUST_LOG=spartan_rules=debug spartan rewrite exprs.txt");
}
