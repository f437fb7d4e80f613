//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("idlsema")
        .about("Semantic checks for parsed IDL documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
}

/// Check a program and report warnings and the first fatal error.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check a parsed IDL program")
        .override_usage(
            "\
  idlsema check <AST>
  idlsema check <AST> --fix -o <PATH>
  idlsema check - < ast.json",
        )
        .after_help(
            r#"EXAMPLES:
  idlsema check service.json                  # report warnings and errors
  idlsema check service.json --strict         # fail on warnings too
  idlsema check service.json --fix -o out.json  # write normalized AST"#,
        )
        .arg(ast_path_arg())
        .arg(fix_arg())
        .arg(strict_arg())
        .arg(output_arg())
        .arg(color_arg())
}
