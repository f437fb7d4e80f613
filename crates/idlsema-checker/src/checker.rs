//! Drives the rule set over every document of a program.
//!
//! Documents are visited in include-aware depth-first order, each exactly
//! once. Rules run in a fixed order per document. The first fatal error ends
//! the pass; warnings gathered up to that point are returned with it.
//!
//! The pass holds `&mut Program` for its whole duration: in fix mode rules
//! rewrite field requiredness in place, and those edits are not rolled back
//! when a later rule fails.

use tracing::debug;

use idlsema_core::{DocumentId, Program};

use crate::Error;
use crate::diagnostics::{Diagnostics, DiagnosticsPrinter};
use crate::rules::RULES;

/// Checker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Normalize recoverable violations in place instead of only warning.
    pub fix_warnings: bool,
}

impl Options {
    pub fn with_fix_warnings(mut self, fix: bool) -> Self {
        self.fix_warnings = fix;
        self
    }
}

/// Outcome of a checking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Every warning produced before the pass ended, in production order.
    pub warnings: Diagnostics,
    /// The fatal error that ended the pass early, if any.
    pub error: Option<Error>,
}

impl Report {
    /// No fatal error. Warnings may still be present.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> std::result::Result<Diagnostics, Failure> {
        match self.error {
            None => Ok(self.warnings),
            Some(error) => Err(Failure {
                warnings: self.warnings,
                error,
            }),
        }
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(&self.warnings).error(self.error.as_ref())
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }
}

/// A failed pass: the fatal error plus the warnings produced before it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct Failure {
    pub warnings: Diagnostics,
    pub error: Error,
}

#[derive(Debug, Clone, Default)]
pub struct Checker {
    options: Options,
}

impl Checker {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Check every document reachable from the program root.
    pub fn check_all(&self, program: &mut Program) -> Report {
        let mut warnings = Diagnostics::new();
        // Rules never touch includes, so the order can be fixed up front.
        let order: Vec<DocumentId> = program.depth_first().collect();

        for &id in &order {
            let doc = program.document_mut(id);
            debug!(file = %doc.filename, "checking document");

            for (name, rule) in RULES {
                debug!(file = %doc.filename, rule = name, "running rule");
                if let Err(error) = rule(doc, &self.options, &mut warnings) {
                    debug!(file = %doc.filename, rule = name, %error, "check aborted");
                    return Report {
                        warnings,
                        error: Some(error),
                    };
                }
            }
        }

        debug!(
            documents = order.len(),
            warnings = warnings.len(),
            "check finished"
        );
        Report {
            warnings,
            error: None,
        }
    }
}

/// Check `program` with the given options.
pub fn check_all(program: &mut Program, options: Options) -> Report {
    Checker::new(options).check_all(program)
}
