//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Serialized AST (positional).
pub fn ast_path_arg() -> Arg {
    Arg::new("ast_path")
        .value_name("AST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON-serialized program, or `-` for stdin")
}

/// Normalize recoverable violations (--fix).
pub fn fix_arg() -> Arg {
    Arg::new("fix")
        .long("fix")
        .action(ArgAction::SetTrue)
        .help("Rewrite ignored requiredness qualifiers instead of only warning")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Where to write the checked AST (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Write the checked (and fixed) AST as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
