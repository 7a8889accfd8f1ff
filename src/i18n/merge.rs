//! Deep merge of an overlay dictionary onto a base dictionary.

use crate::i18n::dictionary::json_kind;
use crate::i18n::{Dictionary, Entry};
use serde_json::Value;
use tracing::warn;

/// Merge `overlay` onto `base`, returning a new dictionary.
///
/// Where both sides hold a branch the merge recurses. Any other overlay value
/// (text, translator, list, or a branch over a leaf) replaces the base value
/// wholesale. Keys only in `base` are kept; keys only in `overlay` are added.
/// `base` is never modified.
pub fn deep_merge(base: &Dictionary, overlay: &Dictionary) -> Dictionary {
    let mut out = base.clone();
    for (key, over) in overlay.iter() {
        let merged = match (base.get(key), over) {
            (Some(Entry::Branch(b)), Entry::Branch(o)) => Entry::Branch(deep_merge(b, o)),
            _ => over.clone(),
        };
        out.insert(key, merged);
    }
    out
}

/// [`deep_merge`] with an optional overlay. `None` yields a copy of `base`.
pub fn merge_overlay(base: &Dictionary, overlay: Option<&Dictionary>) -> Dictionary {
    match overlay {
        Some(overlay) => deep_merge(base, overlay),
        None => base.clone(),
    }
}

/// The same merge over raw JSON trees.
///
/// A non-object overlay is treated as an empty overlay and logged.
pub fn deep_merge_json(base: &Value, overlay: &Value) -> Value {
    let Value::Object(over) = overlay else {
        if !overlay.is_null() {
            warn!("Ignoring {} overlay, expected an object", json_kind(overlay));
        }
        return base.clone();
    };
    let Value::Object(base_map) = base else {
        return overlay.clone();
    };

    let mut out = base_map.clone();
    for (key, over_value) in over {
        let merged = match (base_map.get(key), over_value) {
            (Some(b @ Value::Object(_)), Value::Object(_)) => deep_merge_json(b, over_value),
            _ => over_value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    Value::Object(out)
}
