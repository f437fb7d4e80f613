//! Enum value names and numbers.
//!
//! A number may be bound to only one name, and a name to only one number.
//! Restating the exact same `NAME = value` pair is tolerated.

use indexmap::IndexMap;
use tracing::warn;

use idlsema_core::{Document, Enum};

use crate::{Error, Result};

pub fn check_enums(doc: &Document) -> Result<()> {
    for e in &doc.enums {
        check_enum(e, &doc.filename)?;
    }
    Ok(())
}

fn check_enum(e: &Enum, file: &str) -> Result<()> {
    let mut name_to_value: IndexMap<&str, i64> = IndexMap::new();
    let mut value_to_name: IndexMap<i64, &str> = IndexMap::new();

    for v in &e.values {
        if let Some(&prev) = name_to_value.get(v.name.as_str())
            && prev != v.value
        {
            return Err(Error::DuplicateEnumValueName {
                enum_name: e.name.clone(),
                value_name: v.name.clone(),
                file: file.to_owned(),
            });
        }

        if let Some(&first) = value_to_name.get(&v.value)
            && first != v.name
        {
            return Err(Error::ConflictingEnumValue {
                enum_name: e.name.clone(),
                value: v.value,
                first: first.to_owned(),
                second: v.name.clone(),
                file: file.to_owned(),
            });
        }

        name_to_value.insert(&v.name, v.value);
        value_to_name.insert(v.value, &v.name);

        // Advisory only: wire formats encode enums as i32.
        if i32::try_from(v.value).is_err() {
            warn!(
                file,
                enum_name = %e.name,
                "the value of enum {} is {}, which exceeds the range of int32; \
                 adjust it to fit within int32 to avoid data errors during serialization",
                v.name,
                v.value
            );
        }
    }

    Ok(())
}
