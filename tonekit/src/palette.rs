//! Tonal palettes and the palette deriver.
//!
//! ## Usage
//!
//! Derive the six palettes that anchor a theme, optionally replacing some of
//! them with palettes built from explicit brand colors.
//!
//! ```
//! use tonekit::{
//!     color::Argb,
//!     palette::{PaletteOverrides, PaletteRole, derive_palettes},
//! };
//!
//! let overrides = PaletteOverrides::new().with(PaletteRole::Primary, Argb::from_rgb(0xFF, 0, 0));
//! let palettes = derive_palettes("#6750A4", &overrides, false).unwrap();
//! let _primary_40 = palettes.primary.tone(40);
//! ```

use std::{fmt, str::FromStr, sync::Arc};

use tracing::debug;

use crate::{
    Error, Result,
    color::Argb,
    science::{ColorScience, MaterialColorScience},
};

/// Tones sampled by every export, in ascending order.
pub const STANDARD_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// The six palette slots of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteRole {
    /// Primary accent palette.
    Primary,
    /// Secondary accent palette.
    Secondary,
    /// Tertiary accent palette.
    Tertiary,
    /// Neutral palette for backgrounds and surfaces.
    Neutral,
    /// Neutral variant palette for outlines and muted surfaces.
    NeutralVariant,
    /// Error palette.
    Error,
}

impl PaletteRole {
    /// All roles in export order.
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Tertiary,
        PaletteRole::Neutral,
        PaletteRole::NeutralVariant,
        PaletteRole::Error,
    ];

    /// camelCase name, e.g. `neutralVariant`.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Tertiary => "tertiary",
            PaletteRole::Neutral => "neutral",
            PaletteRole::NeutralVariant => "neutralVariant",
            PaletteRole::Error => "error",
        }
    }

    /// kebab-case name, e.g. `neutral-variant`.
    pub const fn kebab_name(self) -> &'static str {
        match self {
            PaletteRole::NeutralVariant => "neutral-variant",
            other => other.name(),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteRole {
    type Err = Error;

    /// Accepts the camelCase, kebab-case and snake_case spellings.
    fn from_str(s: &str) -> Result<Self> {
        PaletteRole::ALL
            .into_iter()
            .find(|role| {
                s == role.name() || s == role.kebab_name() || s.replace('_', "-") == role.kebab_name()
            })
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// Something that can be sampled at a tone.
pub trait ToneSource: Send + Sync {
    /// Returns the color at `tone` (0 is black, 100 is white).
    fn tone(&self, tone: u8) -> Argb;
}

impl<F> ToneSource for F
where
    F: Fn(u8) -> Argb + Send + Sync,
{
    fn tone(&self, tone: u8) -> Argb {
        self(tone)
    }
}

/// An immutable function from tone to color with fixed hue and chroma.
///
/// Cloning is cheap; clones share the same underlying palette.
#[derive(Clone)]
pub struct TonalPalette {
    source: Arc<dyn ToneSource>,
}

impl TonalPalette {
    /// Wraps a tone source.
    pub fn new(source: impl ToneSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Samples the palette. Tones above 100 are clamped.
    pub fn tone(&self, tone: u8) -> Argb {
        self.source.tone(tone.min(100))
    }

    /// The palette sampled at [`STANDARD_TONES`].
    pub fn tones(&self) -> [(u8, Argb); 13] {
        STANDARD_TONES.map(|tone| (tone, self.tone(tone)))
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("key", &self.tone(40))
            .finish_non_exhaustive()
    }
}

/// The six palettes of a theme.
#[derive(Clone, Debug)]
pub struct PaletteSet {
    /// Primary palette.
    pub primary: TonalPalette,
    /// Secondary palette.
    pub secondary: TonalPalette,
    /// Tertiary palette.
    pub tertiary: TonalPalette,
    /// Neutral palette.
    pub neutral: TonalPalette,
    /// Neutral variant palette.
    pub neutral_variant: TonalPalette,
    /// Error palette.
    pub error: TonalPalette,
}

impl PaletteSet {
    /// Returns the palette for `role`.
    pub fn get(&self, role: PaletteRole) -> &TonalPalette {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Tertiary => &self.tertiary,
            PaletteRole::Neutral => &self.neutral,
            PaletteRole::NeutralVariant => &self.neutral_variant,
            PaletteRole::Error => &self.error,
        }
    }

    /// Returns a copy with the palette for `role` replaced.
    pub fn with(&self, role: PaletteRole, palette: TonalPalette) -> Self {
        let mut next = self.clone();
        let slot = match role {
            PaletteRole::Primary => &mut next.primary,
            PaletteRole::Secondary => &mut next.secondary,
            PaletteRole::Tertiary => &mut next.tertiary,
            PaletteRole::Neutral => &mut next.neutral,
            PaletteRole::NeutralVariant => &mut next.neutral_variant,
            PaletteRole::Error => &mut next.error,
        };
        *slot = palette;
        next
    }

    /// Iterates palettes in [`PaletteRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, &TonalPalette)> + '_ {
        PaletteRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Explicit colors that replace library-generated palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteOverrides {
    colors: [Option<Argb>; 6],
}

impl PaletteOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override color for `role`.
    pub fn with(mut self, role: PaletteRole, color: Argb) -> Self {
        self.set(role, color);
        self
    }

    /// Sets the override color for `role` in place.
    pub fn set(&mut self, role: PaletteRole, color: Argb) {
        self.colors[role.index()] = Some(color);
    }

    /// Returns the override for `role`, if any.
    pub fn get(&self, role: PaletteRole) -> Option<Argb> {
        self.colors[role.index()]
    }

    /// Returns `true` when no role is overridden.
    pub fn is_empty(&self) -> bool {
        self.colors.iter().all(Option::is_none)
    }

    /// Iterates the overridden roles in [`PaletteRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Argb)> + '_ {
        PaletteRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|color| (role, color)))
    }
}

/// Derives palette sets using a [`ColorScience`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaletteDeriver<S = MaterialColorScience> {
    science: S,
}

impl<S: ColorScience> PaletteDeriver<S> {
    /// Creates a deriver backed by `science`.
    pub fn new(science: S) -> Self {
        Self { science }
    }

    /// The backing color science.
    pub fn science(&self) -> &S {
        &self.science
    }

    /// Derives the palette set for `source`.
    ///
    /// Each overridden role gets a palette built from its override color,
    /// harmonized toward `source` first when `harmonize` is set.
    #[tracing::instrument(level = "debug", skip(self, overrides))]
    pub fn derive(&self, source: Argb, overrides: &PaletteOverrides, harmonize: bool) -> PaletteSet {
        let base = self.science.base_palettes(source);
        overrides.iter().fold(base, |palettes, (role, color)| {
            let color = if harmonize {
                self.science.harmonize(color, source)
            } else {
                color
            };
            debug!(%role, %color, "overriding palette");
            palettes.with(role, self.science.palette_from_color(color))
        })
    }

    /// Parses `source_hex` and derives the palette set for it.
    pub fn derive_hex(
        &self,
        source_hex: &str,
        overrides: &PaletteOverrides,
        harmonize: bool,
    ) -> Result<PaletteSet> {
        let source = Argb::from_hex(source_hex)?;
        Ok(self.derive(source, overrides, harmonize))
    }
}

/// Derives palettes with [`MaterialColorScience`].
pub fn derive_palettes(
    source_hex: &str,
    overrides: &PaletteOverrides,
    harmonize: bool,
) -> Result<PaletteSet> {
    PaletteDeriver::new(MaterialColorScience).derive_hex(source_hex, overrides, harmonize)
}
