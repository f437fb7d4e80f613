mod message;
mod printer;


pub use message::{Severity, Warning, WarningKind};
pub use printer::DiagnosticsPrinter;

/// Warnings collected by a checking pass, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

#[must_use = "warning not emitted, call .emit()"]
pub struct WarningBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    warning: Warning,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Start a warning of the given kind raised in `file`.
    ///
    /// Uses the kind's fallback message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: WarningKind, file: &str) -> WarningBuilder<'_> {
        WarningBuilder {
            diagnostics: self,
            warning: Warning::new(kind, file, kind.fallback_message()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Warning texts in production order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|w| w.message.as_str())
    }

    pub fn count_of(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }
}

impl<'a> WarningBuilder<'a> {
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.warning.message = msg.into();
        self
    }

    pub fn emit(self) {
        self.diagnostics.warnings.push(self.warning);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}
