use std::path::PathBuf;

use tracing::debug;

use idlsema_checker::{Options, Report, check_all};

use super::program_loader::{load_program, write_program};

pub struct CheckArgs {
    pub ast_path: PathBuf,
    pub fix: bool,
    pub strict: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let report = match execute(&args) {
        Ok(report) => report,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if !report.warnings.is_empty() || !report.is_ok() {
        eprintln!("{}", report.printer().colored(args.color).render());
    }

    if let Some(hint) = fix_hint(&report, args.fix) {
        eprintln!("{hint}");
    }

    if !passes(&report, args.strict) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Load, check, and write back the AST if asked to.
///
/// The output file is only written when the check found no fatal error.
pub fn execute(args: &CheckArgs) -> Result<Report, String> {
    let mut program = load_program(&args.ast_path)?;
    debug!(documents = program.len(), fix = args.fix, "loaded program");

    let options = Options::default().with_fix_warnings(args.fix);
    let report = check_all(&mut program, options);

    if let Some(path) = &args.output
        && report.is_ok()
    {
        write_program(path, &program)?;
    }

    Ok(report)
}

/// Whether the run should exit successfully.
pub fn passes(report: &Report, strict: bool) -> bool {
    report.is_ok() && !(strict && !report.warnings.is_empty())
}

/// Suggest `--fix` when some warnings would be normalized by it.
pub fn fix_hint(report: &Report, fix: bool) -> Option<String> {
    if fix {
        return None;
    }
    let fixable = report
        .warnings
        .iter()
        .filter(|w| w.kind.is_fixable())
        .count();
    match fixable {
        0 => None,
        1 => Some("note: 1 warning can be fixed with --fix".to_owned()),
        n => Some(format!("note: {n} warnings can be fixed with --fix")),
    }
}
