use super::args::Cli;
use dedupe::{DedupeConfig, DedupeError, DedupeOptions, Mode};
use std::path::PathBuf;

/// Loads the user and local config layers, then an explicitly requested file.
///
/// The explicit path is tilde-expanded and must load; the standard layers
/// are best effort.
pub fn load_config(explicit: Option<&str>) -> Result<DedupeConfig, DedupeError> {
    let mut config = DedupeConfig::load_with_overrides();

    if let Some(path) = explicit {
        let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
        let layer = DedupeConfig::load_from_file(&expanded)?;
        tracing::debug!(path = %expanded.display(), "loaded explicit config");
        config.merge(layer);
    }

    Ok(config)
}

/// Resolves final options: command line, then config file, then built-in default.
///
/// Returns `UnknownMode` when the chosen type is not recognized so the caller
/// can report it without running the engine.
pub fn resolve_options(cli: &Cli, config: &DedupeConfig) -> Result<DedupeOptions, DedupeError> {
    let defaults = &config.defaults;
    let builtin = DedupeOptions::default();

    let pick = |flag: &Option<String>, file: &Option<String>, fallback: String| {
        flag.clone().or_else(|| file.clone()).unwrap_or(fallback)
    };

    let mode = match cli.mode.as_deref().or(defaults.mode.as_deref()) {
        Some(name) => name.parse::<Mode>()?,
        None => builtin.mode,
    };

    Ok(DedupeOptions {
        item_separator: pick(
            &cli.item_separator,
            &defaults.item_separator,
            builtin.item_separator,
        ),
        key_separator: pick(
            &cli.key_value_separator,
            &defaults.key_value_separator,
            builtin.key_separator,
        ),
        value_separator: pick(
            &cli.value_separator,
            &defaults.value_separator,
            builtin.value_separator,
        ),
        mode,
        trim_whitespace: cli
            .trim_whitespace
            .or(defaults.trim_whitespace)
            .unwrap_or(builtin.trim_whitespace),
    })
}
