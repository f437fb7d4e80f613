//! Union members are always optional, and at most one may carry a default.

use idlsema_core::{Document, Requiredness};

use crate::checker::Options;
use crate::diagnostics::{Diagnostics, WarningKind};
use crate::{Error, Result};

/// In fix mode every union member ends up `Optional`, including members that
/// were only implicitly qualified. The warning is still reported for members
/// that were declared `required`.
pub fn check_unions(doc: &mut Document, options: &Options, diag: &mut Diagnostics) -> Result<()> {
    let Document { filename, struct_likes, .. } = doc;
    let file = filename.as_str();

    for union in struct_likes.iter_mut().filter(|s| s.is_union()) {
        let mut has_default = false;

        for field in union.fields.iter_mut() {
            if field.requiredness == Requiredness::Required {
                diag.report(WarningKind::RequiredUnionMember, file)
                    .message(format!(
                        "union {} field {}: union members must be optional, ignoring specified requiredness.",
                        union.name, field.name
                    ))
                    .emit();
            }

            if field.default.is_some() {
                if has_default {
                    return Err(Error::MultipleUnionDefaults {
                        field: field.name.clone(),
                        union: union.name.clone(),
                        file: file.to_owned(),
                    });
                }
                has_default = true;
            }

            if options.fix_warnings {
                field.requiredness = Requiredness::Optional;
            }
        }
    }

    Ok(())
}
