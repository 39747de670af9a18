/// Joins `items` with `item_separator` and ends the text with exactly one newline.
///
/// A trailing run of newlines collapses to one; text without a trailing
/// newline gets one appended. This is independent of the item separator.
pub fn serialize<S: AsRef<str>>(items: &[S], item_separator: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(item_separator);
        }
        out.push_str(item.as_ref());
    }
    normalize_trailing_newline(out)
}

fn normalize_trailing_newline(mut text: String) -> String {
    let content_len = text.trim_end_matches('\n').len();
    text.truncate(content_len);
    text.push('\n');
    text
}
