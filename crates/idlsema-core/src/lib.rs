#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for idlsema.
//!
//! Two layers:
//! - **AST layer** (`ast`): one parsed IDL document and its declarations
//! - **Program layer** (`program`): an arena of documents linked by includes,
//!   with the depth-first traversal every checking pass is driven by
//!
//! The tree is produced by an external parser. This crate only models it and
//! (de)serializes it as JSON so pre-parsed ASTs can be handed between tools.

pub mod ast;
mod invariants;
pub mod program;
pub mod traversal;


pub use ast::{
    Category, ConstValue, Constant, Document, Enum, EnumValue, Field, Function, Include,
    Requiredness, Service, StructLike, Type, Typedef,
};
pub use program::{DocumentId, LoadError, Program};
pub use traversal::DepthFirst;
