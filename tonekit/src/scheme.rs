//! Light and dark color schemes synthesized from a [`PaletteSet`].
//!
//! Every role is a fixed `(palette, tone)` lookup; nothing here depends on the
//! color library.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    color::Argb,
    palette::{PaletteRole, PaletteSet},
};

/// Appearance mode of a scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// `light` or `dark`.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Returns `true` for [`Mode::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

macro_rules! color_roles {
    ($($variant:ident => $name:literal, $kebab:literal;)+) => {
        /// The 29 named color roles of a scheme, in export order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl ColorRole {
            /// All roles in declaration order.
            pub const ALL: [ColorRole; ROLE_COUNT] = [$(ColorRole::$variant),+];

            /// camelCase name, e.g. `onPrimaryContainer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $name,)+
                }
            }

            /// kebab-case name, e.g. `on-primary-container`.
            pub const fn kebab_name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $kebab,)+
                }
            }
        }
    };
}

/// Number of roles in a [`Scheme`].
pub const ROLE_COUNT: usize = 29;

color_roles! {
    Primary => "primary", "primary";
    OnPrimary => "onPrimary", "on-primary";
    PrimaryContainer => "primaryContainer", "primary-container";
    OnPrimaryContainer => "onPrimaryContainer", "on-primary-container";
    Secondary => "secondary", "secondary";
    OnSecondary => "onSecondary", "on-secondary";
    SecondaryContainer => "secondaryContainer", "secondary-container";
    OnSecondaryContainer => "onSecondaryContainer", "on-secondary-container";
    Tertiary => "tertiary", "tertiary";
    OnTertiary => "onTertiary", "on-tertiary";
    TertiaryContainer => "tertiaryContainer", "tertiary-container";
    OnTertiaryContainer => "onTertiaryContainer", "on-tertiary-container";
    Error => "error", "error";
    OnError => "onError", "on-error";
    ErrorContainer => "errorContainer", "error-container";
    OnErrorContainer => "onErrorContainer", "on-error-container";
    Background => "background", "background";
    OnBackground => "onBackground", "on-background";
    Surface => "surface", "surface";
    OnSurface => "onSurface", "on-surface";
    SurfaceVariant => "surfaceVariant", "surface-variant";
    OnSurfaceVariant => "onSurfaceVariant", "on-surface-variant";
    Outline => "outline", "outline";
    OutlineVariant => "outlineVariant", "outline-variant";
    Shadow => "shadow", "shadow";
    Scrim => "scrim", "scrim";
    InverseSurface => "inverseSurface", "inverse-surface";
    InverseOnSurface => "inverseOnSurface", "inverse-on-surface";
    InversePrimary => "inversePrimary", "inverse-primary";
}

impl ColorRole {
    /// The palette and tone this role samples in `mode`.
    pub const fn source(self, mode: Mode) -> (PaletteRole, u8) {
        use ColorRole as R;
        use PaletteRole as P;

        let (palette, light, dark) = match self {
            R::Primary => (P::Primary, 40, 80),
            R::OnPrimary => (P::Primary, 100, 20),
            R::PrimaryContainer => (P::Primary, 90, 30),
            R::OnPrimaryContainer => (P::Primary, 10, 90),
            R::Secondary => (P::Secondary, 40, 80),
            R::OnSecondary => (P::Secondary, 100, 20),
            R::SecondaryContainer => (P::Secondary, 90, 30),
            R::OnSecondaryContainer => (P::Secondary, 10, 90),
            R::Tertiary => (P::Tertiary, 40, 80),
            R::OnTertiary => (P::Tertiary, 100, 20),
            R::TertiaryContainer => (P::Tertiary, 90, 30),
            R::OnTertiaryContainer => (P::Tertiary, 10, 90),
            R::Error => (P::Error, 40, 80),
            R::OnError => (P::Error, 100, 20),
            R::ErrorContainer => (P::Error, 90, 30),
            R::OnErrorContainer => (P::Error, 10, 90),
            R::Background => (P::Neutral, 99, 10),
            R::OnBackground => (P::Neutral, 10, 90),
            R::Surface => (P::Neutral, 99, 10),
            R::OnSurface => (P::Neutral, 10, 90),
            R::SurfaceVariant => (P::NeutralVariant, 90, 30),
            R::OnSurfaceVariant => (P::NeutralVariant, 30, 80),
            R::Outline => (P::NeutralVariant, 50, 60),
            R::OutlineVariant => (P::NeutralVariant, 80, 30),
            R::Shadow => (P::Neutral, 0, 0),
            R::Scrim => (P::Neutral, 0, 0),
            R::InverseSurface => (P::Neutral, 20, 90),
            R::InverseOnSurface => (P::Neutral, 95, 20),
            R::InversePrimary => (P::Primary, 80, 40),
        };
        match mode {
            Mode::Light => (palette, light),
            Mode::Dark => (palette, dark),
        }
    }

    /// The role meant for content drawn on top of this one, if any.
    pub const fn content_role(self) -> Option<ColorRole> {
        use ColorRole as R;

        match self {
            R::Primary => Some(R::OnPrimary),
            R::PrimaryContainer => Some(R::OnPrimaryContainer),
            R::Secondary => Some(R::OnSecondary),
            R::SecondaryContainer => Some(R::OnSecondaryContainer),
            R::Tertiary => Some(R::OnTertiary),
            R::TertiaryContainer => Some(R::OnTertiaryContainer),
            R::Error => Some(R::OnError),
            R::ErrorContainer => Some(R::OnErrorContainer),
            R::Background => Some(R::OnBackground),
            R::Surface => Some(R::OnSurface),
            R::SurfaceVariant => Some(R::OnSurfaceVariant),
            R::InverseSurface => Some(R::InverseOnSurface),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = Error;

    /// Accepts the camelCase, kebab-case and snake_case spellings.
    fn from_str(s: &str) -> Result<Self> {
        let kebab = s.replace('_', "-");
        ColorRole::ALL
            .into_iter()
            .find(|role| s == role.name() || kebab == role.kebab_name())
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// A complete set of role colors for one [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheme {
    mode: Mode,
    colors: [Argb; ROLE_COUNT],
}

impl Scheme {
    /// Samples every role from `palettes` using the tone table for `mode`.
    pub fn from_palettes(palettes: &PaletteSet, mode: Mode) -> Self {
        let colors = ColorRole::ALL.map(|role| {
            let (palette, tone) = role.source(mode);
            palettes.get(palette).tone(tone)
        });
        Self { mode, colors }
    }

    /// The mode this scheme was synthesized for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the color of `role`.
    pub fn get(&self, role: ColorRole) -> Argb {
        self.colors[role.index()]
    }

    /// Iterates `(role, color)` in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Argb)> + '_ {
        ColorRole::ALL.into_iter().zip(self.colors)
    }

    /// Returns the content color for a background color of this scheme.
    ///
    /// When the background does not match a role that has a content pairing,
    /// this returns `None`.
    pub fn content_color_for(&self, background: Argb) -> Option<Argb> {
        self.iter()
            .filter(|&(_, color)| color == background)
            .find_map(|(role, _)| role.content_role())
            .map(|role| self.get(role))
    }
}

/// The light and dark schemes of a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schemes {
    /// Light scheme.
    pub light: Scheme,
    /// Dark scheme.
    pub dark: Scheme,
}

impl Schemes {
    /// Returns the scheme for `mode`.
    pub fn get(&self, mode: Mode) -> &Scheme {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Synthesizes both schemes from `palettes`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn synthesize(palettes: &PaletteSet) -> Schemes {
    Schemes {
        light: Scheme::from_palettes(palettes, Mode::Light),
        dark: Scheme::from_palettes(palettes, Mode::Dark),
    }
}
