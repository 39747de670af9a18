//! Tokenize, deduplicate and serialize delimiter-separated text.

mod item;
mod key;
mod key_value;
mod serializer;
mod tokenizer;

pub use item::dedupe_items;
pub use key::dedupe_by_key;
pub use key_value::dedupe_by_key_value;
pub use serializer::serialize;
pub use tokenizer::tokenize;

use crate::core::mode::Mode;
use crate::core::options::DedupeOptions;
use crate::errors::DedupeError;
use std::borrow::Cow;

/// Runs the deduplication rule for `options.mode` over already tokenized items.
pub fn dedupe<'a>(items: &[&'a str], options: &DedupeOptions) -> Vec<Cow<'a, str>> {
    let trim = options.trim_whitespace;
    match options.mode {
        Mode::Item => dedupe_items(items).into_iter().map(Cow::Borrowed).collect(),
        Mode::Key => dedupe_by_key(items, &options.key_separator, trim)
            .into_iter()
            .map(Cow::Borrowed)
            .collect(),
        Mode::KeyValue => {
            dedupe_by_key_value(items, &options.key_separator, &options.value_separator, trim)
        }
    }
}

/// Full pipeline: tokenize `input`, deduplicate per mode, and serialize.
///
/// The result always ends with exactly one newline.
pub fn process(input: &str, options: &DedupeOptions) -> Result<String, DedupeError> {
    options.validate()?;

    let items = tokenize(input, &options.item_separator, options.trim_whitespace);
    let kept = dedupe(&items, options);
    tracing::debug!(
        mode = %options.mode,
        items_in = items.len(),
        items_out = kept.len(),
        "deduplicated input"
    );

    Ok(serialize(&kept, &options.item_separator))
}
