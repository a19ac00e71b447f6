//! Derives `city` / `state` on each feature from its context list.

use serde_json::{Map, Value};

use super::types::{Category, GeocodeError};

/// Annotate every feature of a provider document in place.
///
/// Context entries are walked in array order and every match overwrites the
/// previous one, whatever its `text` holds. When the last match carries no
/// `text` the field is left out. Existing keys keep their position; a category
/// with no match leaves its field absent. Returns the number of features seen.
pub fn enrich_features(doc: &mut Value) -> Result<usize, GeocodeError> {
    let features = doc
        .get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| GeocodeError::Malformed("missing 'features' array".into()))?;

    for (i, feature) in features.iter_mut().enumerate() {
        let feature = feature
            .as_object_mut()
            .ok_or_else(|| GeocodeError::Malformed(format!("feature {} is not an object", i)))?;

        for (category, text) in derive_fields(feature, i)? {
            match text {
                Some(text) => {
                    feature.insert(category.field().to_string(), text);
                }
                None => {
                    feature.shift_remove(category.field());
                }
            }
        }
    }

    Ok(features.len())
}

/// Last matching `text` per category; the inner `None` is a match without one.
fn derive_fields(
    feature: &Map<String, Value>,
    index: usize,
) -> Result<Vec<(Category, Option<Value>)>, GeocodeError> {
    let entries = feature
        .get("context")
        .ok_or_else(|| GeocodeError::Malformed(format!("feature {} has no context", index)))?
        .as_array()
        .ok_or_else(|| GeocodeError::Malformed(format!("feature {} has a non-array context", index)))?;

    let mut found: [Option<Option<Value>>; 2] = [None, None];
    for entry in entries {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| GeocodeError::Malformed(format!("feature {} has a context entry without an id", index)))?;
        for (slot, category) in found.iter_mut().zip(Category::ALL) {
            if category.matches(id) {
                *slot = Some(entry.get("text").cloned());
            }
        }
    }

    Ok(Category::ALL
        .into_iter()
        .zip(found)
        .filter_map(|(category, text)| text.map(|t| (category, t)))
        .collect())
}
