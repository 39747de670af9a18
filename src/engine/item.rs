use std::collections::HashSet;

/// Keeps the first occurrence of every distinct non-empty item, in order.
///
/// Empty items are dropped even on first occurrence. Also used to collapse
/// value sets in key-value mode.
pub fn dedupe_items<'a>(items: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .copied()
        .filter(|item| !item.is_empty() && seen.insert(*item))
        .collect()
}
