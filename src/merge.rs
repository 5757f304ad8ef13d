//! Layered configuration merge.
//!
//! A local override file is merged onto the base configuration with
//! recursive-replace semantics: tables merge key by key, but a host list
//! for a code is replaced wholesale, never unioned. Downstream behavior
//! depends on replacement, so an override can *shrink* a code's host set.

use serde_json::Value;

/// Deep-merge `overlay` onto `base`.
///
/// - Objects: merged key by key, recursively
/// - Arrays: overlay replaces base entirely
/// - Everything else: overlay wins
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}
