use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use tonekit::{
    Mode,
    apply::theme_properties,
    export::{TokenMap, to_json, to_legacy_tokens, to_stylesheet},
};

use super::LoadedTheme;
use crate::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Style sheet with light, dark and palette blocks
    Css,
    /// JSON document with source, light, dark and palettes
    Json,
    /// Every property a live target needs for one mode
    Properties,
    /// Legacy `--color-*` tokens for one mode
    Legacy,
}

pub fn render(loaded: &LoadedTheme, format: Format, mode: Mode) -> String {
    let LoadedTheme { theme, prefixes } = loaded;
    match format {
        Format::Css => to_stylesheet(theme, &prefixes.scheme),
        Format::Json => to_json(theme, &prefixes.scheme) + "\n",
        Format::Properties => declarations(&theme_properties(theme, mode, prefixes)),
        Format::Legacy => declarations(&to_legacy_tokens(theme.scheme(mode))),
    }
}

fn declarations(tokens: &TokenMap) -> String {
    tokens
        .iter()
        .map(|(name, value)| format!("{name}: {value};\n"))
        .collect()
}

pub fn execute(loaded: &LoadedTheme, format: Format, mode: Mode, output: Option<&Path>) -> Result<()> {
    let text = render(loaded, format, mode);
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
            output::status(
                "Generated",
                format!("{format:?} tokens for {} -> {}", loaded.theme.source, path.display()),
            );
        }
        None => print!("{text}"),
    }
    Ok(())
}
