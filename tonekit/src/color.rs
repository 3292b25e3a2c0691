//! Opaque 24-bit colors in packed ARGB form.
//!
//! ## Usage
//!
//! Parse user supplied hex strings at the edge and keep [`Argb`] everywhere
//! else.
//!
//! ```
//! use tonekit::color::Argb;
//!
//! let purple: Argb = "#6750A4".parse().unwrap();
//! assert_eq!(purple.to_int(), 0xFF6750A4);
//! assert_eq!(purple.to_hex(), "#6750a4");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

const OPAQUE: u32 = 0xFF00_0000;

/// A fully opaque color packed as `0xAARRGGBB`.
///
/// The alpha channel is always `0xFF`; it is forced on construction and never
/// exposed through the hex representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(OPAQUE);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Creates a color from a packed integer, forcing the alpha channel to
    /// fully opaque.
    pub const fn from_int(argb: u32) -> Self {
        Argb(argb | OPAQUE)
    }

    /// Creates a color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Argb(OPAQUE | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Argb::from_int)
            .map_err(|_| Error::InvalidColorFormat(hex.to_string()))
    }

    /// The packed `0xFFRRGGBB` value.
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00FF_FFFF)
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
    }
}

impl FromStr for Argb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Argb::from_hex(s)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Argb::from_hex(&hex).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_normalizes() {
        for hex in ["#6750A4", "6750a4", "#000000", "FFFFFF", "#0a0B0c"] {
            let color = Argb::from_hex(hex).unwrap();
            let normalized = format!("#{}", hex.trim_start_matches('#').to_lowercase());
            assert_eq!(color.to_hex(), normalized);
            assert_eq!(Argb::from_hex(&color.to_hex()).unwrap(), color);
        }
    }

    #[test]
    fn test_int_round_trip_over_channel_grid() {
        for r in (0..=255u32).step_by(51) {
            for g in (0..=255u32).step_by(17) {
                for b in [0u32, 1, 128, 254, 255] {
                    let color = Argb::from_int((r << 16) | (g << 8) | b);
                    assert_eq!(Argb::from_hex(&color.to_hex()).unwrap(), color);
                }
            }
        }
    }

    #[test]
    fn test_alpha_is_forced_opaque() {
        let color = Argb::from_int(0x0012_3456);
        assert_eq!(color.to_int(), 0xFF12_3456);
        assert_eq!(color, Argb::from_rgb(0x12, 0x34, 0x56));
        assert_eq!((color.red(), color.green(), color.blue()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "12345g", "#ff00ff00", "# 12345", "rgb(1,2,3)"] {
            assert!(
                matches!(Argb::from_hex(bad), Err(Error::InvalidColorFormat(ref s)) if s == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let color = Argb::from_rgb(0xFF, 0, 0);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#ff0000\"");
        let parsed: Argb = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(parsed, Argb::from_rgb(0, 0xFF, 0));
        assert!(serde_json::from_str::<Argb>("\"green\"").is_err());
    }
}
