//! Include-aware document traversal.

use std::collections::HashSet;

use crate::program::{DocumentId, Program};

/// Pre-order depth-first walk over the include graph.
///
/// Yields the root first, then each include's subtree in declaration order.
/// A document reached a second time (diamond or cycle) is skipped, so every
/// reachable document is yielded exactly once. Unresolved includes are not
/// followed.
pub struct DepthFirst<'p> {
    program: &'p Program,
    stack: Vec<DocumentId>,
    visited: HashSet<DocumentId>,
}

impl<'p> DepthFirst<'p> {
    pub(crate) fn new(program: &'p Program) -> Self {
        Self {
            program,
            stack: vec![program.root()],
            visited: HashSet::new(),
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = DocumentId;

    fn next(&mut self) -> Option<DocumentId> {
        while let Some(id) = self.stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            let Some(doc) = self.program.get(id) else {
                continue;
            };

            // Reverse so the first include is popped first.
            let children = doc.includes.iter().rev().filter_map(|inc| inc.reference);
            self.stack.extend(children);
            return Some(id);
        }
        None
    }
}
