//! Writing token maps onto a style target.
//!
//! The pipeline never touches a live surface itself. Anything that can set
//! and remove named style properties implements [`TokenSink`].

use tracing::debug;

use crate::{
    export::{
        TokenMap, TokenPrefixes, to_custom_color_properties, to_palette_properties,
        to_property_map,
    },
    scheme::Mode,
    theme::Theme,
};

/// A target that accepts named style properties.
pub trait TokenSink {
    /// Sets property `name` to `value`.
    fn set(&mut self, name: &str, value: &str);
    /// Removes property `name`.
    fn remove(&mut self, name: &str);
}

impl<T: TokenSink + ?Sized> TokenSink for &mut T {
    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value);
    }

    fn remove(&mut self, name: &str) {
        (**self).remove(name);
    }
}

/// Writes every entry of `tokens` to `sink`.
pub fn apply_tokens(tokens: &TokenMap, sink: &mut impl TokenSink) {
    for (name, value) in tokens.iter() {
        sink.set(name, value);
    }
    debug!(count = tokens.len(), "applied tokens");
}

/// Removes every name of `tokens` from `sink`.
pub fn remove_tokens(tokens: &TokenMap, sink: &mut impl TokenSink) {
    for (name, _) in tokens.iter() {
        sink.remove(name);
    }
    debug!(count = tokens.len(), "removed tokens");
}

/// Everything a live target needs for `mode`: scheme roles, palette tones
/// and custom colors.
pub fn theme_properties(theme: &Theme, mode: Mode, prefixes: &TokenPrefixes) -> TokenMap {
    let mut tokens = to_property_map(theme.scheme(mode), &prefixes.scheme);
    tokens.extend(to_palette_properties(&theme.palettes));
    tokens.extend(to_custom_color_properties(
        &theme.custom_colors,
        mode,
        &prefixes.custom,
    ));
    tokens
}

/// Applies [`theme_properties`] to `sink`.
#[tracing::instrument(level = "debug", skip(theme, sink))]
pub fn apply_theme(theme: &Theme, mode: Mode, prefixes: &TokenPrefixes, sink: &mut impl TokenSink) {
    apply_tokens(&theme_properties(theme, mode, prefixes), sink);
}

/// Removes what [`apply_theme`] set.
pub fn remove_theme(theme: &Theme, mode: Mode, prefixes: &TokenPrefixes, sink: &mut impl TokenSink) {
    remove_tokens(&theme_properties(theme, mode, prefixes), sink);
}

/// In-memory [`TokenSink`] keeping properties in the order they were first
/// set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTarget {
    properties: TokenMap,
}

impl StyleTarget {
    /// An empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The properties currently set.
    pub fn properties(&self) -> &TokenMap {
        &self.properties
    }
}

impl TokenSink for StyleTarget {
    fn set(&mut self, name: &str, value: &str) {
        self.properties.insert(name, value);
    }

    fn remove(&mut self, name: &str) {
        self.properties.remove(name);
    }
}
