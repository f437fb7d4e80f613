//! Per-document semantic rules.
//!
//! Each rule inspects one facet of a single document:
//! - Global scope uniqueness (globals)
//! - Enum value names and numbers (enums)
//! - Field IDs and names of structs, unions and exceptions (struct_likes)
//! - Union member requiredness and defaults (unions)
//! - Service function shape and argument/throws qualifiers (functions)
//!
//! Rules are fail-fast: the first fatal violation is returned as `Err` and
//! anything pushed to the diagnostics before it is kept.

pub mod enums;
pub mod functions;
pub mod globals;
pub mod struct_likes;
pub mod unions;

#[cfg(test)]
mod globals_tests;

use idlsema_core::Document;

use crate::Diagnostics;
use crate::checker::Options;

pub use enums::check_enums;
pub use functions::check_functions;
pub use globals::check_globals;
pub use struct_likes::check_struct_likes;
pub use unions::check_unions;

/// Uniform signature the checker drives every rule through.
pub type Rule = fn(&mut Document, &Options, &mut Diagnostics) -> crate::Result<()>;

/// All rules, in the order they run on each document.
pub const RULES: [(&str, Rule); 5] = [
    ("globals", |doc, _, _| check_globals(doc)),
    ("enums", |doc, _, _| check_enums(doc)),
    ("struct_likes", |doc, _, diag| check_struct_likes(doc, diag)),
    ("unions", check_unions),
    ("functions", check_functions),
];
