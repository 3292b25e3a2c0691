//! Source color extraction from images.
//!
//! Opaque pixels are bucketed on a coarse RGB grid and the bucket averages
//! are ranked by Material's source color scoring, which prefers chromatic
//! hues that cover a meaningful share of the image.

use std::{collections::HashMap, fs, path::Path};

use image::{DynamicImage, GenericImageView};
use material_color_utilities::score::score_with;
use tracing::{debug, warn};

use crate::{Result, color::Argb};

/// Returned when an image has no usable color.
pub const FALLBACK_SOURCE: Argb = Argb::from_rgb(0x42, 0x85, 0xF4);

const MAX_SIDE: u32 = 128;

#[derive(Clone, Copy, Default)]
struct Bucket {
    count: u32,
    r: u64,
    g: u64,
    b: u64,
}

impl Bucket {
    fn average(&self) -> Argb {
        let n = u64::from(self.count.max(1));
        Argb::from_rgb((self.r / n) as u8, (self.g / n) as u8, (self.b / n) as u8)
    }
}

/// Picks a source color from encoded image bytes (png or jpeg).
pub fn source_color_from_image(bytes: &[u8]) -> Result<Argb> {
    let image = image::load_from_memory(bytes)?;
    Ok(dominant_color(&image))
}

/// Reads and decodes the image at `path`, then picks a source color.
pub fn source_color_from_image_path(path: impl AsRef<Path>) -> Result<Argb> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), size = bytes.len(), "loaded image");
    source_color_from_image(&bytes)
}

/// Picks a source color from a decoded image.
pub fn dominant_color(image: &DynamicImage) -> Argb {
    let (width, height) = image.dimensions();
    let sampled = if width > MAX_SIDE || height > MAX_SIDE {
        image.thumbnail(MAX_SIDE, MAX_SIDE)
    } else {
        image.clone()
    };

    let mut buckets = vec![Bucket::default(); 16 * 16 * 16];
    for pixel in sampled.to_rgba8().pixels() {
        let [r, g, b, a] = pixel.0;
        if a < 255 {
            continue;
        }
        let index = (usize::from(r >> 4) << 8) | (usize::from(g >> 4) << 4) | usize::from(b >> 4);
        let bucket = &mut buckets[index];
        bucket.count += 1;
        bucket.r += u64::from(r);
        bucket.g += u64::from(g);
        bucket.b += u64::from(b);
    }

    let population: HashMap<u32, u16> = buckets
        .iter()
        .filter(|bucket| bucket.count > 0)
        .map(|bucket| {
            let count = u16::try_from(bucket.count).unwrap_or(u16::MAX);
            (bucket.average().to_int(), count)
        })
        .collect();
    if population.is_empty() {
        warn!("image has no opaque pixels, using fallback source color");
        return FALLBACK_SOURCE;
    }

    let colors = population.len();
    let ranked = score_with(population, Some(1), Some(FALLBACK_SOURCE.to_int()), None);
    match ranked.first() {
        Some(&best) => {
            debug!(colors, source = %Argb::from_int(best), "scored image colors");
            Argb::from_int(best)
        }
        None => FALLBACK_SOURCE,
    }
}
