use dedupe::DedupeError;
use std::io::Read;

/// Returns the positional text, or reads `reader` to the end when the
/// argument is absent, empty, or `-`.
pub fn read_input<R: Read>(arg: Option<&str>, mut reader: R) -> Result<String, DedupeError> {
    match arg {
        Some(text) if !text.is_empty() && text != "-" => Ok(text.to_string()),
        _ => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
