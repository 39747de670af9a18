use super::item::dedupe_items;
use std::borrow::Cow;
use std::collections::HashMap;

/// Deduplicates `key=v1,v2` groups at two levels.
///
/// Each value set is collapsed with [`dedupe_items`] (empties dropped, first
/// occurrence kept, never sorted) and rejoined into a canonical value. A
/// group is dropped only when its key was already emitted with the same
/// canonical value; a changed value is emitted again at its own position and
/// becomes the value later groups are compared against.
///
/// Kept groups are re-serialized as `key + key_separator + canonical`.
/// Items without a key separator are returned verbatim.
pub fn dedupe_by_key_value<'a>(
    items: &[&'a str],
    key_separator: &str,
    value_separator: &str,
    trim: bool,
) -> Vec<Cow<'a, str>> {
    let mut registry: HashMap<&'a str, String> = HashMap::new();
    let mut kept = Vec::with_capacity(items.len());

    for &item in items {
        let Some((key, value_part)) = item.split_once(key_separator) else {
            kept.push(Cow::Borrowed(item));
            continue;
        };

        let key = if trim { key.trim() } else { key };
        let values: Vec<&str> = value_part
            .split(value_separator)
            .map(|v| if trim { v.trim() } else { v })
            .collect();
        let canonical = dedupe_items(&values).join(value_separator);

        if registry.get(key) == Some(&canonical) {
            continue;
        }

        kept.push(Cow::Owned(format!("{key}{key_separator}{canonical}")));
        registry.insert(key, canonical);
    }

    kept
}
