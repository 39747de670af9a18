use crate::errors::DedupeError;
use std::fmt;
use std::str::FromStr;

/// How each item is interpreted when deciding what counts as a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Whole items are compared; empty items are dropped.
    Item,
    /// Items are compared by the text before the key separator.
    /// Items without a key are always kept.
    Key,
    /// Items are `key=v1,v2,...` groups. Value sets are deduplicated in place
    /// and repeated groups with an identical canonical value are dropped.
    #[default]
    KeyValue,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Item => "item",
            Mode::Key => "key",
            Mode::KeyValue => "key-value",
        }
    }
}

impl FromStr for Mode {
    type Err = DedupeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" | "i" => Ok(Mode::Item),
            "key" | "k" => Ok(Mode::Key),
            "key-value" | "kv" => Ok(Mode::KeyValue),
            _ => Err(DedupeError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
