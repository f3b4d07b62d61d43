//! # allOf Merge
//!
//! Flattens an `allOf` composition into one fragment before typing.
//!
//! Members are resolved recursively and folded left to right with a deep
//! merge: mappings merge key by key at every level, anything else (scalars and
//! lists alike) is replaced by the later value. Keys written next to `allOf`
//! are applied last, so they win over every member.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Fragment};
use serde_json::Value;
use std::borrow::Cow;

/// Key holding the composition list.
pub const ALL_OF: &str = "allOf";

/// Returns `data` with its `allOf` composition merged in.
///
/// A fragment without `allOf` is returned as-is. The input is never mutated.
pub fn merge_all_of(data: &Fragment) -> AppResult<Cow<'_, Fragment>> {
    let Some(members) = data.get(ALL_OF) else {
        return Ok(Cow::Borrowed(data));
    };
    let members = members
        .as_array()
        .ok_or_else(|| AppError::invalid(ALL_OF, members, "list"))?;

    let mut merged = Fragment::new();
    for member in members {
        let member = merge_all_of(as_fragment(member, ALL_OF)?)?;
        deep_merge(&mut merged, &member);
    }

    let siblings: Fragment = data
        .iter()
        .filter(|(key, _)| key.as_str() != ALL_OF)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    deep_merge(&mut merged, &siblings);

    Ok(Cow::Owned(merged))
}

/// Merges `incoming` into `target`, later values winning.
pub fn deep_merge(target: &mut Fragment, incoming: &Fragment) {
    for (key, value) in incoming {
        if let Value::Object(nested) = value {
            if let Some(Value::Object(existing)) = target.get_mut(key) {
                deep_merge(existing, nested);
                continue;
            }
        }
        target.insert(key.clone(), value.clone());
    }
}
