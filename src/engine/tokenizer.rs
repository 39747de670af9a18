/// Splits `input` on every literal occurrence of `item_separator`.
///
/// Empty tokens are kept; whether they survive is up to the mode.
/// `item_separator` must be non-empty.
pub fn tokenize<'a>(input: &'a str, item_separator: &str, trim: bool) -> Vec<&'a str> {
    input
        .split(item_separator)
        .map(|token| if trim { token.trim() } else { token })
        .collect()
}
