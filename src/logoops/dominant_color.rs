use std::collections::HashMap;

use crate::utils::rgb_of;
use crate::Image;
use image::{Rgb, Rgba};

/// Pixels with lower alpha are treated as transparent
const MIN_ALPHA: u8 = 200;
/// Near-black when every channel is below this value
const BLACK_CEILING: u8 = 50;
/// Near-white when every channel is above this value
const WHITE_FLOOR: u8 = 200;
/// Red within this distance of both green and blue is a neutral gray
const GRAY_SPREAD: u8 = 20;

/// Returns true when a pixel can represent the warm accent of a logo.
///
/// A candidate is opaque enough, neither near-black nor near-white, not a
/// low-saturation gray, and red-dominant (red strictly above green and blue).
pub fn is_accent_candidate(pixel: Rgba<u8>) -> bool {
    let Rgba([r, g, b, a]) = pixel;

    if a < MIN_ALPHA {
        return false;
    }
    if r < BLACK_CEILING && g < BLACK_CEILING && b < BLACK_CEILING {
        return false;
    }
    if r > WHITE_FLOOR && g > WHITE_FLOOR && b > WHITE_FLOOR {
        return false;
    }
    if r.abs_diff(g) < GRAY_SPREAD && r.abs_diff(b) < GRAY_SPREAD {
        return false;
    }

    r > g && r > b
}

/// Estimates the dominant accent color of an image
///
/// # Examples
///
/// ```
/// use image::{Rgb, Rgba};
/// use logoops::{DominantColor, Image};
///
/// let logo: Image<Rgba<u8>> = Image::from_pixel(4, 4, Rgba([240, 120, 30, 255]));
/// assert_eq!(logo.dominant_color(), Some(Rgb([240, 120, 30])));
///
/// let blank: Image<Rgba<u8>> = Image::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
/// assert_eq!(blank.dominant_color(), None);
/// ```
pub trait DominantColor {
    /// Returns the most frequent exact RGB triple among the accent candidates.
    ///
    /// Ties go to the triple that appears first in raster order. `None`
    /// means no pixel passed the filters.
    fn dominant_color(&self) -> Option<Rgb<u8>>;
}

/// Occurrence count plus the raster index of the first occurrence
#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first: usize,
}

impl Tally {
    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            first: self.first.min(other.first),
        }
    }
}

impl DominantColor for Image<Rgba<u8>> {
    fn dominant_color(&self) -> Option<Rgb<u8>> {
        let tallies = tally_candidates(self);

        tallies
            .into_iter()
            .max_by(|(_, a), (_, b)| a.count.cmp(&b.count).then(b.first.cmp(&a.first)))
            .map(|(color, _)| Rgb(color))
    }
}

#[cfg(not(feature = "rayon"))]
fn tally_candidates(image: &Image<Rgba<u8>>) -> HashMap<[u8; 3], Tally> {
    let mut tallies: HashMap<[u8; 3], Tally> = HashMap::new();
    for (index, &pixel) in image.pixels().enumerate() {
        if !is_accent_candidate(pixel) {
            continue;
        }
        let tally = Tally {
            count: 1,
            first: index,
        };
        tallies
            .entry(rgb_of(pixel).0)
            .and_modify(|existing| *existing = existing.merge(tally))
            .or_insert(tally);
    }
    tallies
}

#[cfg(feature = "rayon")]
fn tally_candidates(image: &Image<Rgba<u8>>) -> HashMap<[u8; 3], Tally> {
    use rayon::prelude::*;

    image
        .as_raw()
        .par_chunks_exact(4)
        .enumerate()
        .filter_map(|(index, channels)| {
            let pixel = Rgba([channels[0], channels[1], channels[2], channels[3]]);
            is_accent_candidate(pixel).then_some((index, rgb_of(pixel).0))
        })
        .fold(HashMap::new, |mut tallies, (index, color)| {
            let tally = Tally {
                count: 1,
                first: index,
            };
            tallies
                .entry(color)
                .and_modify(|existing: &mut Tally| *existing = existing.merge(tally))
                .or_insert(tally);
            tallies
        })
        .reduce(HashMap::new, |mut left, right| {
            for (color, tally) in right {
                left.entry(color)
                    .and_modify(|existing| *existing = existing.merge(tally))
                    .or_insert(tally);
            }
            left
        })
}
