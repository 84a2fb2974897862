//! Key-to-field resolution.
//!
//! Maps a textual key from the document onto one of the record's declared
//! field names, honoring the configured case mode. The field list is the
//! declaration-ordered table serde derive hands to `deserialize_struct`, so
//! only the record's serde-visible fields participate.

use crate::error::{Error, Result};

/// Whether a key names the given field under the active case mode.
pub(crate) fn matches(key: &str, field: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        field.eq_ignore_ascii_case(key)
    } else {
        field == key
    }
}

/// Resolves `name` against the record's field list.
///
/// Keys are compared verbatim — no trimming — so a key carrying incidental
/// whitespace does not resolve. The first matching field wins.
pub(crate) fn resolve<'f>(
    name: &str,
    fields: &[&'f str],
    case_insensitive: bool,
) -> Result<&'f str> {
    fields
        .iter()
        .copied()
        .find(|field| matches(name, field, case_insensitive))
        .ok_or_else(|| Error::MissingField {
            name: name.to_string(),
        })
}
