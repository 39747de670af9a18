use super::mode::Mode;
use crate::errors::DedupeError;

/// Fully resolved settings for one deduplication pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeOptions {
    /// Splits the input into items and joins the result
    pub item_separator: String,
    /// Splits an item once into key and value part
    pub key_separator: String,
    /// Splits a value part into its value set
    pub value_separator: String,
    pub mode: Mode,
    /// Trim leading/trailing whitespace after splitting, before comparing
    pub trim_whitespace: bool,
}

impl Default for DedupeOptions {
    fn default() -> Self {
        Self {
            item_separator: "\n".to_string(),
            key_separator: "=".to_string(),
            value_separator: ",".to_string(),
            mode: Mode::default(),
            trim_whitespace: true,
        }
    }
}

impl DedupeOptions {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Rejects an empty item separator, which has no meaningful split.
    ///
    /// Empty key and value separators are allowed: an empty key separator
    /// yields an empty key, and an empty value separator splits per character.
    pub fn validate(&self) -> Result<(), DedupeError> {
        if self.item_separator.is_empty() {
            return Err(DedupeError::EmptySeparator {
                name: "item separator",
            });
        }
        Ok(())
    }
}
