//! Serializable theme configuration.
//!
//! ```toml
//! source = "#6750A4"
//! harmonize = true
//! prefix = "--app-color"
//! custom_prefix = "--app-brand"
//!
//! [overrides]
//! primary = "#FF0000"
//! neutral-variant = "#7A757F"
//!
//! [[custom_colors]]
//! name = "success"
//! value = "#2E7D32"
//! blend = true
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    color::Argb,
    custom::{CustomColor, validate_names},
    export::{DEFAULT_CUSTOM_PREFIX, DEFAULT_SCHEME_PREFIX, TokenPrefixes},
    palette::PaletteRole,
    theme::{DEFAULT_SOURCE, ThemeOptions},
};

/// Theme settings as read from a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Source color; the Material baseline when absent.
    pub source: Option<Argb>,
    /// Harmonize overrides toward the source.
    pub harmonize: bool,
    /// Prefix for scheme role properties.
    pub prefix: Option<String>,
    /// Prefix for custom color properties.
    pub custom_prefix: Option<String>,
    /// Override colors keyed by palette role name.
    pub overrides: BTreeMap<String, Argb>,
    /// Additional brand colors.
    pub custom_colors: Vec<CustomColor>,
}

impl ThemeConfig {
    /// The configured source color, or [`DEFAULT_SOURCE`].
    pub fn source(&self) -> Argb {
        self.source.unwrap_or(DEFAULT_SOURCE)
    }

    /// The configured prefix, or [`DEFAULT_SCHEME_PREFIX`].
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_SCHEME_PREFIX)
    }

    /// The configured custom color prefix, or [`DEFAULT_CUSTOM_PREFIX`].
    pub fn custom_prefix(&self) -> &str {
        self.custom_prefix.as_deref().unwrap_or(DEFAULT_CUSTOM_PREFIX)
    }

    /// Both prefixes, defaults filled in.
    pub fn prefixes(&self) -> TokenPrefixes {
        TokenPrefixes {
            scheme: self.prefix().to_string(),
            custom: self.custom_prefix().to_string(),
        }
    }

    /// Converts to [`ThemeOptions`], rejecting unknown override roles and
    /// custom colors whose property names would be empty or collide.
    pub fn options(&self) -> Result<ThemeOptions> {
        validate_names(&self.custom_colors)?;
        let mut options = ThemeOptions {
            harmonize: self.harmonize,
            custom_colors: self.custom_colors.clone(),
            ..ThemeOptions::default()
        };
        for (role, &color) in &self.overrides {
            options.overrides.set(role.parse::<PaletteRole>()?, color);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parses_full_config() {
        let config: ThemeConfig = toml::from_str(
            r##"
            source = "#6750A4"
            harmonize = true
            prefix = "--app-color"
            custom_prefix = "--app-brand"

            [overrides]
            primary = "#FF0000"
            neutral-variant = "#7A757F"

            [[custom_colors]]
            name = "success"
            value = "#2E7D32"
            blend = true
            "##,
        )
        .unwrap();

        assert_eq!(config.source(), DEFAULT_SOURCE);
        assert_eq!(config.prefix(), "--app-color");
        assert_eq!(
            config.prefixes(),
            TokenPrefixes {
                scheme: "--app-color".into(),
                custom: "--app-brand".into(),
            }
        );
        let options = config.options().unwrap();
        assert!(options.harmonize);
        assert_eq!(options.overrides.get(PaletteRole::Primary), Some(Argb::from_rgb(0xFF, 0, 0)));
        assert_eq!(
            options.overrides.get(PaletteRole::NeutralVariant),
            Some(Argb::from_rgb(0x7A, 0x75, 0x7F))
        );
        assert_eq!(options.overrides.get(PaletteRole::Secondary), None);
        assert_eq!(
            options.custom_colors,
            [CustomColor::new("success", Argb::from_rgb(0x2E, 0x7D, 0x32), true)]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ThemeConfig = toml::from_str("").unwrap();
        assert_eq!(config.source(), DEFAULT_SOURCE);
        assert_eq!(config.prefix(), DEFAULT_SCHEME_PREFIX);
        assert_eq!(config.prefixes(), TokenPrefixes::default());
        assert_eq!(config.options().unwrap(), ThemeOptions::default());
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!(toml::from_str::<ThemeConfig>(r##"source = "#12345""##).is_err());
    }

    #[test]
    fn test_rejects_unknown_override_role() {
        let config: ThemeConfig = toml::from_str(
            r##"
            [overrides]
            accent = "#FF0000"
            "##,
        )
        .unwrap();
        assert!(matches!(config.options(), Err(Error::UnknownRole(role)) if role == "accent"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(toml::from_str::<ThemeConfig>("colour = 1").is_err());
    }

    #[test]
    fn test_rejects_colliding_custom_color_names() {
        let config: ThemeConfig = toml::from_str(
            r##"
            [[custom_colors]]
            name = "brandGreen"
            value = "#00FF00"

            [[custom_colors]]
            name = "brand_green"
            value = "#008000"
            "##,
        )
        .unwrap();
        assert!(matches!(config.options(), Err(Error::DuplicateCustomColor(..))));
    }

    #[test]
    fn test_rejects_empty_custom_color_name() {
        let config: ThemeConfig = toml::from_str(
            r##"
            [[custom_colors]]
            name = ""
            value = "#00FF00"
            "##,
        )
        .unwrap();
        assert!(matches!(config.options(), Err(Error::EmptyCustomColorName(_))));
    }
}
