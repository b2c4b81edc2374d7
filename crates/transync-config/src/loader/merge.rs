//! Deep merge of `transync.json5` layers.

use serde_json::Value;

/// Apply a higher-precedence layer on top of `base`.
///
/// Objects (`policy`, `paths`, `languages`) merge key by key, so a layer can
/// add one language or flip one policy flag; anything else replaces the
/// lower layer's value outright.
pub(super) fn merge_json_values(base: &mut Value, overlay: &Value) {
    let (Value::Object(base_map), Value::Object(overlay_map)) = (&mut *base, overlay) else {
        *base = overlay.clone();
        return;
    };
    for (key, overlay_value) in overlay_map {
        if let Some(slot) = base_map.get_mut(key) {
            merge_json_values(slot, overlay_value);
        } else {
            base_map.insert(key.clone(), overlay_value.clone());
        }
    }
}
