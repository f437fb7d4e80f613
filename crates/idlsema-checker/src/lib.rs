//! idlsema checker: semantic validation of parsed IDL documents.
//!
//! This crate provides the checking stage that runs between parsing and code
//! generation:
//! - `rules` - the per-document checks (global scope, enums, struct-likes,
//!   unions, service functions)
//! - `checker` - traversal of the include graph and rule orchestration
//! - `diagnostics` - warnings and their rendering
//!
//! A check either completes with zero or more warnings, or stops at the first
//! fatal [`Error`]. In fix mode the union and function rules rewrite field
//! requiredness in place.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod checker;
pub mod diagnostics;
mod error;
pub mod rules;

#[cfg(test)]
mod checker_tests;
#[cfg(test)]
pub mod test_utils;

pub use checker::{Checker, Failure, Options, Report, check_all};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity, Warning, WarningKind};
pub use error::{Error, ErrorKind, OnewayViolation};

/// Result type for a single rule.
pub type Result<T> = std::result::Result<T, Error>;
