use std::ops::Range;

use crate::logoops::foreground_mask::{ForegroundMask, MaskSource, BACKGROUND};
use crate::Image;
use image::{Luma, Rgba};
use imageproc::region_labelling::{connected_components, Connectivity};

/// Diagonal neighbours join components
pub const CONNECTIVITY: Connectivity = Connectivity::Eight;

/// A labelled foreground mask
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Label grid: 0 for background, `1..=count` for components
    pub labels: Image<Luma<u32>>,
    /// Number of components
    pub count: u32,
    /// How the foreground mask was derived
    pub source: MaskSource,
}

/// A connected foreground region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Label id, `>= 1`
    pub label: u32,
    /// Number of pixels
    pub area: u64,
    /// Half-open row range of the bounding box
    pub rows: Range<u32>,
    /// Half-open column range of the bounding box
    pub cols: Range<u32>,
}

impl Component {
    pub fn height(&self) -> u32 {
        self.rows.end - self.rows.start
    }

    pub fn width(&self) -> u32 {
        self.cols.end - self.cols.start
    }

    /// Midpoint of the row range.
    pub fn y_center(&self) -> f64 {
        f64::from(self.rows.start + self.rows.end) / 2.0
    }
}

/// Builds the foreground mask of `image` and labels its connected components.
///
/// Labels are contiguous and assigned in raster order of the first pixel of
/// each component.
pub fn segment(image: &Image<Rgba<u8>>) -> Segmentation {
    let (mask, source) = image.foreground_mask();
    let labels = connected_components(&mask, CONNECTIVITY, BACKGROUND);
    let count = labels.pixels().map(|label| label[0]).max().unwrap_or(0);

    Segmentation {
        labels,
        count,
        source,
    }
}

impl Segmentation {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Collects per-component statistics, ordered by label.
    ///
    /// The result is indexed by `label - 1`.
    pub fn components(&self) -> Vec<Component> {
        #[derive(Clone, Copy)]
        struct Stats {
            area: u64,
            min_x: u32,
            min_y: u32,
            max_x: u32,
            max_y: u32,
        }

        let mut stats = vec![
            Stats {
                area: 0,
                min_x: u32::MAX,
                min_y: u32::MAX,
                max_x: 0,
                max_y: 0,
            };
            self.count as usize
        ];

        for (x, y, label) in self.labels.enumerate_pixels() {
            let Luma([label]) = *label;
            if label == 0 {
                continue;
            }
            let entry = &mut stats[(label - 1) as usize];
            entry.area += 1;
            entry.min_x = entry.min_x.min(x);
            entry.min_y = entry.min_y.min(y);
            entry.max_x = entry.max_x.max(x);
            entry.max_y = entry.max_y.max(y);
        }

        stats
            .iter()
            .zip(1u32..)
            .filter(|(entry, _)| entry.area > 0)
            .map(|(entry, label)| Component {
                label,
                area: entry.area,
                rows: entry.min_y..entry.max_y + 1,
                cols: entry.min_x..entry.max_x + 1,
            })
            .collect()
    }
}
