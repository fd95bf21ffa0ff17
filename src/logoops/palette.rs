use crate::error::Error;
use crate::logoops::css_colors::CSS3_COLORS;
use crate::utils::squared_distance;
use image::Rgb;

/// A named reference color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Human-readable color name
    pub name: &'static str,
    /// Reference RGB triple
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    pub const fn new(name: &'static str, rgb: [u8; 3]) -> Self {
        Self { name, rgb }
    }
}

/// Result of a nearest-color lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The closest palette entry
    pub entry: &'a PaletteEntry,
    /// Squared Euclidean RGB distance to `entry`
    pub distance: u32,
}

/// A non-empty, read-only table of named colors
///
/// Lookups are linear scans over the table, keeping the running minimum
/// distance. Among entries at the same distance the last one in table
/// order wins.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    entries: &'a [PaletteEntry],
}

impl<'a> Palette<'a> {
    /// Wraps a table of entries.
    ///
    /// # Errors
    ///
    /// * `Error::EmptyPalette` - `entries` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgb;
    /// use logoops::{Palette, PaletteEntry};
    ///
    /// # fn example() -> Result<(), logoops::Error> {
    /// let entries = [
    ///     PaletteEntry::new("ink", [20, 20, 20]),
    ///     PaletteEntry::new("paper", [250, 250, 240]),
    /// ];
    /// let palette = Palette::new(&entries)?;
    /// assert_eq!(palette.closest_name(Rgb([230, 230, 230])), "paper");
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn new(entries: &'a [PaletteEntry]) -> Result<Self, Error> {
        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &'a [PaletteEntry] {
        self.entries
    }

    /// Returns the entry closest to `color` together with its distance.
    pub fn closest(&self, color: Rgb<u8>) -> Match<'a> {
        let entries: &'a [PaletteEntry] = self.entries;
        let first = &entries[0];
        let mut best = Match {
            entry: first,
            distance: squared_distance(first.rgb, color.0),
        };
        for entry in &entries[1..] {
            let distance = squared_distance(entry.rgb, color.0);
            if distance <= best.distance {
                best = Match { entry, distance };
            }
        }
        best
    }

    /// Returns the name of the entry closest to `color`.
    pub fn closest_name(&self, color: Rgb<u8>) -> &'a str {
        self.closest(color).entry.name
    }

    /// Finds an entry by name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Option<&'a PaletteEntry> {
        let entries: &'a [PaletteEntry] = self.entries;
        entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl Palette<'static> {
    /// The CSS3 named colors.
    pub fn css3() -> Self {
        Self {
            entries: CSS3_COLORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_with_empty_table_returns_error() {
        assert_eq!(Palette::new(&[]).unwrap_err(), Error::EmptyPalette);
    }

    #[test]
    fn closest_with_exact_reference_returns_zero_distance() {
        let palette = Palette::css3();
        for entry in palette.entries() {
            let found = palette.closest(Rgb(entry.rgb));
            assert_eq!(found.distance, 0, "{}", entry.name);
            assert_eq!(found.entry.name, entry.name);
        }
    }

    #[test]
    fn closest_name_with_near_orange_returns_darkorange() {
        let palette = Palette::css3();
        assert_eq!(palette.closest_name(Rgb([250, 138, 5])), "darkorange");
        assert_eq!(palette.closest_name(Rgb([254, 0, 1])), "red");
    }

    #[test]
    fn closest_with_equidistant_entries_keeps_last() {
        let entries = [
            PaletteEntry::new("low", [0, 0, 0]),
            PaletteEntry::new("high", [2, 0, 0]),
        ];
        let palette = Palette::new(&entries).unwrap();
        let found = palette.closest(Rgb([1, 0, 0]));
        assert_eq!(found.entry.name, "high");
        assert_eq!(found.distance, 1);
    }

    #[test]
    fn closest_between_darkcyan_and_teal_returns_teal() {
        // equidistant from darkcyan (0, 139, 139) and teal (0, 128, 128)
        let found = Palette::css3().closest(Rgb([0, 78, 189]));
        assert_eq!(found.entry.name, "teal");
        assert_eq!(found.distance, 6221);
    }

    #[test]
    fn closest_with_single_entry_always_returns_it() {
        let entries = [PaletteEntry::new("only", [100, 100, 100])];
        let palette = Palette::new(&entries).unwrap();
        assert_eq!(palette.closest_name(Rgb([0, 0, 0])), "only");
        assert_eq!(palette.closest(Rgb([255, 255, 255])).distance, 3 * 155 * 155);
    }

    #[test]
    fn lookup_ignores_case() {
        let palette = Palette::css3();
        assert_eq!(palette.lookup("DarkOrange").map(|e| e.rgb), Some([0xff, 0x8c, 0x00]));
        assert!(palette.lookup("notacolor").is_none());
    }

    #[test]
    fn css3_has_one_name_per_value() {
        let entries = Palette::css3().entries();
        assert_eq!(entries.len(), 138);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.rgb, b.rgb, "{} and {}", a.name, b.name);
            }
        }
    }
}
