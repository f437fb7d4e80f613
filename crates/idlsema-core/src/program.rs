//! Document arena for one compilation: the root file plus everything it
//! includes, transitively.
//!
//! Documents refer to each other by `DocumentId` rather than by pointer, so
//! include cycles are representable and a checking pass can borrow one
//! document mutably at a time.

use serde::{Deserialize, Serialize};

use crate::ast::Document;
use crate::traversal::DepthFirst;

/// Lightweight handle to a document in a `Program`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub(crate) u32);

impl DocumentId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors raised while loading a serialized program.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed AST: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root document {root} does not exist (program has {len} documents)")]
    DanglingRoot { root: u32, len: usize },

    #[error("include \"{path}\" in {file} refers to missing document {reference}")]
    DanglingInclude {
        file: String,
        path: String,
        reference: u32,
    },
}

/// All documents reachable from one root file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    documents: Vec<Document>,
    root: DocumentId,
}

impl Program {
    /// Create a program whose root is `root`.
    pub fn new(root: Document) -> Self {
        Self {
            documents: vec![root],
            root: DocumentId(0),
        }
    }

    /// Add a document to the arena. It is unreachable until something includes it.
    pub fn add_document(&mut self, document: Document) -> DocumentId {
        let id = DocumentId(self.documents.len() as u32);
        self.documents.push(document);
        id
    }

    /// Record that `from` includes `to`, using `to`'s filename as the include path.
    pub fn add_include(&mut self, from: DocumentId, to: DocumentId) {
        let path = self.document(to).filename.clone();
        self.document_mut(from).includes.push(crate::ast::Include {
            path,
            reference: Some(to),
        });
    }

    pub fn root(&self) -> DocumentId {
        self.root
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.index())
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(id.index())
    }

    /// Get a document by ID.
    pub fn document(&self, id: DocumentId) -> &Document {
        self.ensure_document(id)
    }

    /// Get a document by ID for in-place edits.
    pub fn document_mut(&mut self, id: DocumentId) -> &mut Document {
        self.ensure_document_mut(id)
    }

    /// Number of documents in the arena, reachable or not.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over all documents in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| (DocumentId(idx as u32), doc))
    }

    /// Depth-first walk from the root. See [`DepthFirst`].
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self)
    }

    /// Parse a program from JSON and check that every document reference resolves.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let program: Program = serde_json::from_str(json)?;
        program.validate_references()?;
        Ok(program)
    }

    /// Serialize the program as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate_references(&self) -> Result<(), LoadError> {
        if self.get(self.root).is_none() {
            return Err(LoadError::DanglingRoot {
                root: self.root.0,
                len: self.documents.len(),
            });
        }

        for doc in &self.documents {
            for include in &doc.includes {
                let Some(reference) = include.reference else {
                    continue;
                };
                if self.get(reference).is_none() {
                    return Err(LoadError::DanglingInclude {
                        file: doc.filename.clone(),
                        path: include.path.clone(),
                        reference: reference.0,
                    });
                }
            }
        }

        Ok(())
    }
}
