//! The theme aggregate: source color, palettes, schemes and custom colors.
//!
//! ## Usage
//!
//! ```
//! use tonekit::{
//!     color::Argb,
//!     palette::PaletteRole,
//!     scheme::ColorRole,
//!     theme::{Theme, ThemeOptions},
//! };
//!
//! let options = ThemeOptions::default()
//!     .with_override(PaletteRole::Tertiary, Argb::from_rgb(0x00, 0x96, 0x88))
//!     .harmonize(true);
//! let theme = Theme::from_source_with("#6750A4", &options).unwrap();
//! assert_eq!(
//!     theme.schemes.light.get(ColorRole::Primary),
//!     theme.palettes.primary.tone(40)
//! );
//! ```

use tracing::info;

use crate::{
    Result,
    color::Argb,
    custom::{CustomColor, CustomColorGroup},
    palette::{PaletteDeriver, PaletteOverrides, PaletteRole, PaletteSet},
    scheme::{Mode, Scheme, Schemes, synthesize},
    science::{ColorScience, MaterialColorScience},
};

/// Material baseline purple, `#6750A4`.
pub const DEFAULT_SOURCE: Argb = Argb::from_rgb(0x67, 0x50, 0xA4);

/// Inputs beyond the source color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Colors replacing library-generated palettes.
    pub overrides: PaletteOverrides,
    /// Harmonize override colors toward the source before building palettes.
    pub harmonize: bool,
    /// Additional brand colors.
    pub custom_colors: Vec<CustomColor>,
}

impl ThemeOptions {
    /// Overrides the palette of `role` with one built from `color`.
    pub fn with_override(mut self, role: PaletteRole, color: Argb) -> Self {
        self.overrides.set(role, color);
        self
    }

    /// Sets whether overrides are harmonized toward the source.
    pub fn harmonize(mut self, harmonize: bool) -> Self {
        self.harmonize = harmonize;
        self
    }

    /// Adds a custom color.
    pub fn with_custom_color(mut self, color: CustomColor) -> Self {
        self.custom_colors.push(color);
        self
    }
}

/// A generated theme. Owned by the caller; nothing in this crate keeps a
/// reference to it.
#[derive(Clone, Debug)]
pub struct Theme {
    /// The source color the theme was generated from.
    pub source: Argb,
    /// The six tonal palettes.
    pub palettes: PaletteSet,
    /// Light and dark schemes synthesized from `palettes`.
    pub schemes: Schemes,
    /// Groups for any custom colors, in the order they were supplied.
    pub custom_colors: Vec<CustomColorGroup>,
}

impl Theme {
    /// Generates a theme from a hex source color with no overrides.
    pub fn from_source(source_hex: &str) -> Result<Self> {
        Self::from_source_with(source_hex, &ThemeOptions::default())
    }

    /// Generates a theme from a hex source color and options.
    pub fn from_source_with(source_hex: &str, options: &ThemeOptions) -> Result<Self> {
        ThemeGenerator::new(MaterialColorScience).generate_hex(source_hex, options)
    }

    /// Returns the scheme for `mode`.
    pub fn scheme(&self, mode: Mode) -> &Scheme {
        self.schemes.get(mode)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeGenerator::new(MaterialColorScience).generate(DEFAULT_SOURCE, &ThemeOptions::default())
    }
}

/// Runs the full pipeline: palettes, schemes and custom color groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeGenerator<S = MaterialColorScience> {
    deriver: PaletteDeriver<S>,
}

impl<S: ColorScience> ThemeGenerator<S> {
    /// Creates a generator backed by `science`.
    pub fn new(science: S) -> Self {
        Self {
            deriver: PaletteDeriver::new(science),
        }
    }

    /// Generates a theme for `source`.
    pub fn generate(&self, source: Argb, options: &ThemeOptions) -> Theme {
        let palettes = self
            .deriver
            .derive(source, &options.overrides, options.harmonize);
        let schemes = synthesize(&palettes);
        let custom_colors = options
            .custom_colors
            .iter()
            .map(|color| CustomColorGroup::derive(self.deriver.science(), source, color))
            .collect();
        info!(%source, custom_colors = options.custom_colors.len(), "generated theme");
        Theme {
            source,
            palettes,
            schemes,
            custom_colors,
        }
    }

    /// Parses `source_hex` and generates a theme for it.
    pub fn generate_hex(&self, source_hex: &str, options: &ThemeOptions) -> Result<Theme> {
        let source = Argb::from_hex(source_hex)?;
        Ok(self.generate(source, options))
    }
}
