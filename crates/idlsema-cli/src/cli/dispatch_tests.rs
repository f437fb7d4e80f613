//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::check_command;
use crate::commands::check::CheckArgs;

#[test]
fn check_extracts_all_params() {
    let m = check_command()
        .try_get_matches_from([
            "check", "ast.json", "--fix", "--strict", "-o", "out.json", "--color", "never",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.ast_path, PathBuf::from("ast.json"));
    assert!(params.fix);
    assert!(params.strict);
    assert_eq!(params.output, Some(PathBuf::from("out.json")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "ast.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(!params.fix);
    assert!(!params.strict);
    assert_eq!(params.output, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_requires_ast() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "ast.json", "--color", "rainbow"]);
    assert!(result.is_err());
}

#[test]
fn stdin_path_is_kept_verbatim() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.ast_path, PathBuf::from("-"));
}

#[test]
fn params_convert_to_args() {
    let m = check_command()
        .try_get_matches_from(["check", "ast.json", "--fix", "--color", "always"])
        .unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert!(args.fix);
    assert!(args.color);
}

#[test]
fn help_lists_check_flags() {
    let help = check_command().render_help().to_string();
    for flag in ["--fix", "--strict", "--output", "--color"] {
        assert!(help.contains(flag), "help should mention {flag}");
    }
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["idlsema"]);
    assert!(result.is_err());
}
