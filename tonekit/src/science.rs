//! The color-science capability the pipeline delegates to.
//!
//! Everything perceptual (HCT, tonal palette generation, hue harmonization)
//! lives behind [`ColorScience`]. [`MaterialColorScience`] is the only
//! implementation and is backed by `material-color-utilities`.

use material_color_utilities::{
    blend,
    dynamiccolor::{DynamicSchemeBuilder, SpecVersion, Variant},
    hct::Hct,
    palettes::TonalPalette as MaterialPalette,
};
use parking_lot::Mutex;

use crate::{
    color::Argb,
    palette::{PaletteSet, ToneSource, TonalPalette},
};

/// Narrow interface over an external color-math library.
pub trait ColorScience {
    /// Generates the six base palettes for a source color.
    fn base_palettes(&self, source: Argb) -> PaletteSet;

    /// Builds a palette that keeps the hue and chroma of `color`.
    fn palette_from_color(&self, color: Argb) -> TonalPalette;

    /// Rotates the hue of `design` toward the hue of `source`.
    ///
    /// Must return `design` unchanged when both hues are equal.
    fn harmonize(&self, design: Argb, source: Argb) -> Argb;
}

impl<S: ColorScience + ?Sized> ColorScience for &S {
    fn base_palettes(&self, source: Argb) -> PaletteSet {
        (**self).base_palettes(source)
    }

    fn palette_from_color(&self, color: Argb) -> TonalPalette {
        (**self).palette_from_color(color)
    }

    fn harmonize(&self, design: Argb, source: Argb) -> Argb {
        (**self).harmonize(design, source)
    }
}

/// [`ColorScience`] backed by `material-color-utilities` using the tonal-spot
/// variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialColorScience;

struct MaterialTones(Mutex<MaterialPalette>);

impl ToneSource for MaterialTones {
    fn tone(&self, tone: u8) -> Argb {
        Argb::from_int(self.0.lock().tone(tone.into()))
    }
}

fn wrap(palette: MaterialPalette) -> TonalPalette {
    TonalPalette::new(MaterialTones(Mutex::new(palette)))
}

impl ColorScience for MaterialColorScience {
    fn base_palettes(&self, source: Argb) -> PaletteSet {
        // Palettes of the tonal-spot variant do not depend on brightness.
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(source.to_int()))
            .variant(Variant::TonalSpot)
            .spec_version(SpecVersion::Spec2021)
            .is_dark(false)
            .build();

        PaletteSet {
            primary: wrap(scheme.primary_palette().clone()),
            secondary: wrap(scheme.secondary_palette().clone()),
            tertiary: wrap(scheme.tertiary_palette().clone()),
            neutral: wrap(scheme.neutral_palette().clone()),
            neutral_variant: wrap(scheme.neutral_variant_palette().clone()),
            error: wrap(scheme.error_palette().clone()),
        }
    }

    fn palette_from_color(&self, color: Argb) -> TonalPalette {
        // `from_int` does not carry the color's chroma over.
        let hct = Hct::from_int(color.to_int());
        wrap(MaterialPalette::from_hue_and_chroma(hct.hue(), hct.chroma()))
    }

    fn harmonize(&self, design: Argb, source: Argb) -> Argb {
        if design == source {
            return design;
        }
        Argb::from_int(blend::harmonize(design.to_int(), source.to_int()))
    }
}
