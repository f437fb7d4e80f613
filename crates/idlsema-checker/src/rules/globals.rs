//! Global scope: typedef aliases, constants, struct-likes and services of one
//! document share a single namespace.

use std::collections::HashSet;

use idlsema_core::Document;

use crate::{Error, Result};

pub fn check_globals(doc: &Document) -> Result<()> {
    match first_duplicate(doc.global_names()) {
        Some(name) => Err(Error::DuplicateGlobalName {
            name: name.to_owned(),
            file: doc.filename.clone(),
        }),
        None => Ok(()),
    }
}

/// First name that was already seen earlier in `names`.
fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}
