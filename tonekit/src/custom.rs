//! Extra brand colors that get their own role groups next to the scheme.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result, color::Argb, export::kebab_case, scheme::Mode, science::ColorScience,
};

/// A named brand color supplied beyond the six core roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    /// Name used to build property names, e.g. `brand-green`.
    pub name: String,
    /// The color as supplied.
    pub value: Argb,
    /// Harmonize the color toward the theme source before building its
    /// palette.
    #[serde(default)]
    pub blend: bool,
}

impl CustomColor {
    /// Creates a custom color.
    pub fn new(name: impl Into<String>, value: Argb, blend: bool) -> Self {
        Self {
            name: name.into(),
            value,
            blend,
        }
    }
}

/// The four roles derived for a custom color in one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGroup {
    /// Accent color.
    pub color: Argb,
    /// Content on `color`.
    pub on_color: Argb,
    /// Container color.
    pub color_container: Argb,
    /// Content on `color_container`.
    pub on_color_container: Argb,
}

/// Role assignments derived for a [`CustomColor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomColorGroup {
    /// The color as configured.
    pub color: CustomColor,
    /// The color the palette was built from (harmonized when `blend` is set).
    pub value: Argb,
    /// Light mode roles.
    pub light: ColorGroup,
    /// Dark mode roles.
    pub dark: ColorGroup,
}

impl CustomColorGroup {
    /// Derives the role groups for `color` in a theme with `source`.
    pub fn derive(science: &impl ColorScience, source: Argb, color: &CustomColor) -> Self {
        let value = if color.blend {
            science.harmonize(color.value, source)
        } else {
            color.value
        };
        debug!(name = %color.name, %value, "deriving custom color group");
        let palette = science.palette_from_color(value);
        let group = |[base, on, container, on_container]: [u8; 4]| ColorGroup {
            color: palette.tone(base),
            on_color: palette.tone(on),
            color_container: palette.tone(container),
            on_color_container: palette.tone(on_container),
        };
        Self {
            color: color.clone(),
            value,
            light: group([40, 100, 90, 10]),
            dark: group([80, 20, 30, 90]),
        }
    }

    /// Returns the group for `mode`.
    pub fn get(&self, mode: Mode) -> &ColorGroup {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Checks that every custom color gets its own non-empty property name.
pub fn validate_names(colors: &[CustomColor]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(colors.len());
    for color in colors {
        let key = kebab_case(&color.name);
        if key.is_empty() {
            return Err(Error::EmptyCustomColorName(color.name.clone()));
        }
        if let Some(first) = seen.insert(key, &color.name) {
            return Err(Error::DuplicateCustomColor(color.name.clone(), first.to_string()));
        }
    }
    Ok(())
}
