use std::fmt;

/// Non-fatal conditions. None of them stops a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarningKind {
    // Discouraged identifiers
    NonPositiveFieldId,
    NonPositiveArgumentId,

    // Requiredness that the language ignores
    RequiredUnionMember,
    RequiredThrowsField,
    OptionalArgument,
}

impl WarningKind {
    /// Whether fix mode rewrites the offending qualifier.
    pub fn is_fixable(&self) -> bool {
        matches!(
            self,
            Self::RequiredUnionMember | Self::RequiredThrowsField | Self::OptionalArgument
        )
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::NonPositiveFieldId => "non-positive field ID",
            Self::NonPositiveArgumentId => "non-positive argument ID",
            Self::RequiredUnionMember => "union members must be optional",
            Self::RequiredThrowsField => "throw field must be optional",
            Self::OptionalArgument => "optional keyword is ignored in argument lists",
        }
    }
}

/// Label used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    /// Document the warning was raised in.
    pub file: String,
    pub message: String,
}

impl Warning {
    pub(crate) fn new(kind: WarningKind, file: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
