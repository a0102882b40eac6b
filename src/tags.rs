//! Local editing of a contact's tag map.

use crate::error::{CrelateError, Result};
use crate::protocol::TagMap;
use serde_json::Value;

/// Remove every tag titled `title` from the `category` bucket.
///
/// Returns `Ok(None)` when the category is missing or `null`. A bucket left
/// empty is dropped from the map entirely. Other buckets are not inspected.
pub fn remove_tag(tags: &mut TagMap, category: &str, title: &str) -> Result<Option<usize>> {
    let bucket = match tags.get_mut(category) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(bucket)) => bucket,
        Some(_) => {
            return Err(CrelateError::MalformedTags {
                category: category.to_string(),
            });
        }
    };

    let before = bucket.len();
    bucket.retain(|tag| tag.get("Title").and_then(Value::as_str) != Some(title));
    let removed = before - bucket.len();

    if bucket.is_empty() {
        tags.shift_remove(category);
    }

    Ok(Some(removed))
}
