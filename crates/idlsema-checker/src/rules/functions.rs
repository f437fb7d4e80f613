//! Service functions: unique names, oneway shape, and the qualifiers that
//! arguments and throws clauses ignore.

use indexmap::IndexSet;

use idlsema_core::{Document, Function, Requiredness};

use crate::checker::Options;
use crate::diagnostics::{Diagnostics, WarningKind};
use crate::{Error, OnewayViolation, Result};

pub fn check_functions(
    doc: &mut Document,
    options: &Options,
    diag: &mut Diagnostics,
) -> Result<()> {
    let Document { filename, services, .. } = doc;
    let file = filename.as_str();
    // Reported once per document, however many arguments trigger it.
    let mut optional_argument = false;

    for service in services.iter_mut() {
        let mut defined = IndexSet::new();

        for function in service.functions.iter_mut() {
            if !defined.insert(function.name.clone()) {
                return Err(Error::DuplicateFunctionName {
                    service: service.name.clone(),
                    function: function.name.clone(),
                    file: file.to_owned(),
                });
            }

            if let Some(reason) = oneway_violation(function) {
                return Err(Error::InvalidOnewayFunction {
                    service: service.name.clone(),
                    function: function.name.clone(),
                    reason,
                    file: file.to_owned(),
                });
            }

            for arg in function.arguments.iter_mut() {
                if arg.requiredness == Requiredness::Optional {
                    optional_argument = true;
                    if options.fix_warnings {
                        arg.requiredness = Requiredness::Default;
                    }
                }
                if arg.id <= 0 {
                    diag.report(WarningKind::NonPositiveArgumentId, file)
                        .message(format!(
                            "non-positive ID {} of argument \"{}\" in \"{}\".\"{}\" from file {}",
                            arg.id, arg.name, service.name, function.name, file
                        ))
                        .emit();
                }
            }

            for exception in function.throws.iter_mut() {
                match exception.requiredness {
                    Requiredness::Required => {
                        diag.report(WarningKind::RequiredThrowsField, file)
                            .message(format!(
                                "exception \"{}\" in \"{}\".\"{}\": throw field must be optional, ignoring specified requiredness.",
                                exception.name, service.name, function.name
                            ))
                            .emit();
                        if options.fix_warnings {
                            exception.requiredness = Requiredness::Optional;
                        }
                    }
                    Requiredness::Default => exception.requiredness = Requiredness::Optional,
                    Requiredness::Optional => {}
                }
            }
        }
    }

    if optional_argument {
        diag.report(WarningKind::OptionalArgument, file)
            .message(format!("{file}: optional keyword is ignored in argument lists."))
            .emit();
    }

    Ok(())
}

fn oneway_violation(function: &Function) -> Option<OnewayViolation> {
    if !function.oneway {
        return None;
    }
    if !function.void {
        return Some(OnewayViolation::NotVoid);
    }
    if !function.throws.is_empty() {
        return Some(OnewayViolation::Throws);
    }
    None
}
