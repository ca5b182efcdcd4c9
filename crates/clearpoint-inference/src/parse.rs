//! Parsing of completion payloads into fragments.
//!
//! The model is instructed to answer with a JSON object, but the container
//! key it picks varies; `items`, `cards`, and `results` are all tolerated,
//! checked in that order. Item labels go through the category normalizer,
//! so an unrecognized or missing `type` never drops a fragment. There is no
//! item-by-item recovery: either the whole payload is usable or parsing
//! fails and the caller falls back.

use serde_json::Value as JsonValue;

use clearpoint_core::defaults::FALLBACK_ITEM_LABEL;
use clearpoint_core::{normalize, Error, Fragment, Result};

/// Container keys the model is known to answer with, in precedence order.
const CONTAINER_KEYS: [&str; 3] = ["items", "cards", "results"];

/// Parse the completion message content into fragments.
///
/// The content must be a JSON object; the first container key present
/// wins, and an object with none of them yields an empty list.
pub fn parse_extraction_content(content: &str) -> Result<Vec<Fragment>> {
    let parsed: JsonValue = serde_json::from_str(content)
        .map_err(|e| Error::Parse(format!("completion content is not valid JSON: {}", e)))?;

    let items = match CONTAINER_KEYS.iter().find_map(|key| parsed.get(*key)) {
        Some(value) => value.as_array().ok_or_else(|| {
            Error::Parse("extraction container is not an array".to_string())
        })?,
        None => return Ok(Vec::new()),
    };

    let fragments = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let content = item
                .get("content")
                .and_then(JsonValue::as_str)
                .or_else(|| item.get("text").and_then(JsonValue::as_str))
                .unwrap_or_default();
            let label = item
                .get("type")
                .and_then(JsonValue::as_str)
                .unwrap_or(FALLBACK_ITEM_LABEL);
            Fragment::new(index, content, normalize(label))
        })
        .collect();

    Ok(fragments)
}
