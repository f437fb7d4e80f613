//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use super::Diagnostics;
use super::message::Severity;
use crate::Error;

/// ANSI codes for the severity labels. Empty strings when color is off.
#[derive(Clone, Copy, Debug)]
struct Colors {
    warning: &'static str,
    error: &'static str,
    reset: &'static str,
}

impl Colors {
    const ON: Self = Self {
        warning: "\x1b[1;33m",
        error: "\x1b[1;31m",
        reset: "\x1b[0m",
    };

    const OFF: Self = Self {
        warning: "",
        error: "",
        reset: "",
    };

    fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    fn for_severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

/// Renders warnings, then the fatal error if there is one, one per line.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    error: Option<&'d Error>,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            error: None,
            colored: false,
        }
    }

    pub fn error(mut self, error: Option<&'d Error>) -> Self {
        self.error = error;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let colors = Colors::new(self.colored);
        let warnings = self.diagnostics.messages().map(|m| (Severity::Warning, m.to_owned()));
        let error = self.error.map(|e| (Severity::Error, e.to_string()));

        for (i, (severity, message)) in warnings.chain(error).enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let color = colors.for_severity(severity);
            write!(w, "{color}{severity}{}: {message}", colors.reset)?;
        }
        Ok(())
    }
}
