use std::collections::HashSet;

/// Keeps the first item for each key; items without a key are always kept.
///
/// The key is the text before the first `key_separator`. With `trim`, only
/// the key is trimmed for comparison; kept items are returned unchanged.
pub fn dedupe_by_key<'a>(items: &[&'a str], key_separator: &str, trim: bool) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());

    for &item in items {
        match item.split_once(key_separator) {
            None => kept.push(item),
            Some((key, _)) => {
                let key = if trim { key.trim() } else { key };
                if seen.insert(key) {
                    kept.push(item);
                }
            }
        }
    }

    kept
}
