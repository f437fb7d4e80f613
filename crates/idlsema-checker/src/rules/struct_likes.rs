//! Field IDs and names of structs, unions and exceptions.

use std::collections::HashSet;

use idlsema_core::{Document, StructLike};

use crate::diagnostics::{Diagnostics, WarningKind};
use crate::{Error, Result};

pub fn check_struct_likes(doc: &Document, diag: &mut Diagnostics) -> Result<()> {
    for s in &doc.struct_likes {
        check_fields(s, &doc.filename, diag)?;
    }
    Ok(())
}

fn check_fields(s: &StructLike, file: &str, diag: &mut Diagnostics) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for f in &s.fields {
        if !ids.insert(f.id) {
            return Err(Error::DuplicateFieldId {
                id: f.id,
                category: s.category,
                name: s.name.clone(),
                file: file.to_owned(),
            });
        }
        if !names.insert(f.name.as_str()) {
            return Err(Error::DuplicateFieldName {
                field: f.name.clone(),
                category: s.category,
                name: s.name.clone(),
                file: file.to_owned(),
            });
        }

        if f.id <= 0 {
            diag.report(WarningKind::NonPositiveFieldId, file)
                .message(format!(
                    "non-positive ID {} of field \"{}\" in {} \"{}\" from file {}",
                    f.id, f.name, s.category, s.name, file
                ))
                .emit();
        }
    }

    Ok(())
}
