//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;

pub struct CheckParams {
    pub ast_path: PathBuf,
    pub fix: bool,
    pub strict: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ast_path: m
                .get_one::<PathBuf>("ast_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            fix: m.get_flag("fix"),
            strict: m.get_flag("strict"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            ast_path: p.ast_path,
            fix: p.fix,
            strict: p.strict,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
