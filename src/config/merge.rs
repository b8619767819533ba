//! Recursive deep-merge of configuration values.
//!
//! User overrides are layered onto the built-in defaults: nested
//! tables merge key-by-key, scalars (and arrays) in the override
//! replace the base value outright, and a type mismatch between the
//! two sides is resolved wholesale in favor of the override.

use toml::Value;

use crate::constants::MAX_MERGE_DEPTH;

/// Merge `overlay` onto `base`, returning the merged value.
///
/// Recursion is capped at [`MAX_MERGE_DEPTH`]; tables nested beyond
/// the cap keep the base content untouched. TOML values are acyclic,
/// so the cap never triggers on sane input.
pub fn deep_merge(base: Value, overlay: &Value) -> Value {
    merge_at(base, overlay, 0)
}

fn merge_at(base: Value, overlay: &Value, depth: usize) -> Value {
    if depth >= MAX_MERGE_DEPTH {
        return base;
    }
    match (base, overlay) {
        (Value::Table(mut base_table), Value::Table(overlay_table)) => {
            for (key, overlay_value) in overlay_table {
                let merged = match base_table.remove(key) {
                    Some(base_value) => merge_at(base_value, overlay_value, depth + 1),
                    None => overlay_value.clone(),
                };
                base_table.insert(key.clone(), merged);
            }
            Value::Table(base_table)
        }
        // Scalar, array, or mismatched types: the override wins.
        (_, overlay_value) => overlay_value.clone(),
    }
}
