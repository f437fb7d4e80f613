use std::fmt;

use idlsema_core::Category;

/// Why a oneway function was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnewayViolation {
    NotVoid,
    Throws,
}

impl fmt::Display for OnewayViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotVoid => f.write_str("oneway function must be void type"),
            Self::Throws => f.write_str("oneway methods can't throw exceptions"),
        }
    }
}

/// Fatal semantic errors. The first one found aborts the whole check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two top-level declarations in one document share a name.
    #[error("[IDL grammar error] duplicated names in global scope: {name} from file {file}")]
    DuplicateGlobalName { name: String, file: String },

    /// An enum value name is reused for a different value.
    #[error("[IDL grammar error] enum {enum_name} has duplicated value: {value_name} from file {file}")]
    DuplicateEnumValueName {
        enum_name: String,
        value_name: String,
        file: String,
    },

    /// Two different names map to the same enum value.
    #[error(
        "[IDL grammar error] enum {enum_name}: duplicate value {value} between '{first}' and '{second}' from file {file}"
    )]
    ConflictingEnumValue {
        enum_name: String,
        value: i64,
        first: String,
        second: String,
        file: String,
    },

    #[error("[IDL grammar error] duplicated field ID {id} in {category} \"{name}\" from file {file}")]
    DuplicateFieldId {
        id: i32,
        category: Category,
        name: String,
        file: String,
    },

    #[error(
        "[IDL grammar error] duplicated field name \"{field}\" in {category} \"{name}\" from file {file}"
    )]
    DuplicateFieldName {
        field: String,
        category: Category,
        name: String,
        file: String,
    },

    #[error(
        "[IDL grammar error] field {field} provides another default value for union {union} from file {file}"
    )]
    MultipleUnionDefaults {
        field: String,
        union: String,
        file: String,
    },

    #[error("[IDL grammar error] duplicated function name in \"{service}\": \"{function}\" from file {file}")]
    DuplicateFunctionName {
        service: String,
        function: String,
        file: String,
    },

    #[error("[IDL grammar error] {service}.{function}: {reason} from file {file}")]
    InvalidOnewayFunction {
        service: String,
        function: String,
        reason: OnewayViolation,
        file: String,
    },
}

/// Fieldless tag for matching on the error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateGlobalName,
    DuplicateEnumValueName,
    ConflictingEnumValue,
    DuplicateFieldId,
    DuplicateFieldName,
    MultipleUnionDefaults,
    DuplicateFunctionName,
    InvalidOnewayFunction,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateGlobalName { .. } => ErrorKind::DuplicateGlobalName,
            Self::DuplicateEnumValueName { .. } => ErrorKind::DuplicateEnumValueName,
            Self::ConflictingEnumValue { .. } => ErrorKind::ConflictingEnumValue,
            Self::DuplicateFieldId { .. } => ErrorKind::DuplicateFieldId,
            Self::DuplicateFieldName { .. } => ErrorKind::DuplicateFieldName,
            Self::MultipleUnionDefaults { .. } => ErrorKind::MultipleUnionDefaults,
            Self::DuplicateFunctionName { .. } => ErrorKind::DuplicateFunctionName,
            Self::InvalidOnewayFunction { .. } => ErrorKind::InvalidOnewayFunction,
        }
    }

    /// File the offending declaration lives in.
    pub fn file(&self) -> &str {
        match self {
            Self::DuplicateGlobalName { file, .. }
            | Self::DuplicateEnumValueName { file, .. }
            | Self::ConflictingEnumValue { file, .. }
            | Self::DuplicateFieldId { file, .. }
            | Self::DuplicateFieldName { file, .. }
            | Self::MultipleUnionDefaults { file, .. }
            | Self::DuplicateFunctionName { file, .. }
            | Self::InvalidOnewayFunction { file, .. } => file,
        }
    }
}
