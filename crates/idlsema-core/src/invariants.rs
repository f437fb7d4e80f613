//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ast::Document;
use crate::program::{DocumentId, Program};

impl Program {
    pub(crate) fn ensure_document(&self, id: DocumentId) -> &Document {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "Program: document {} not found \
                 (ids must come from this program's add_document or a validated load)",
                id.index()
            )
        })
    }

    pub(crate) fn ensure_document_mut(&mut self, id: DocumentId) -> &mut Document {
        let len = self.len();
        self.get_mut(id).unwrap_or_else(|| {
            panic!(
                "Program: document {} not found (program has {len} documents)",
                id.index()
            )
        })
    }
}
