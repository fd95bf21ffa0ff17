//! Separation of the main subject from stray caption text.
//!
//! The largest component is the main subject. Any other component is kept
//! when it is large relative to the main subject, or when its bounding box
//! starts above the bottom edge of the main subject minus a small tolerance.
//! What remains is small and sits below the subject, which is where captions
//! usually live.

use crate::logoops::components::Component;
use tracing::debug;

/// Components larger than this fraction of the main area are always kept
const LARGE_AREA_RATIO: f64 = 0.10;
/// Tolerance above the main bottom edge, as a fraction of the main height
const BOTTOM_BUFFER_RATIO: f64 = 0.05;

/// Set of kept label ids, indexed by label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepSet {
    kept: Vec<bool>,
}

impl KeepSet {
    /// Builds a set over labels `0..=max_label`.
    ///
    /// Label 0 and labels above `max_label` are ignored.
    pub fn from_labels(max_label: u32, labels: impl IntoIterator<Item = u32>) -> Self {
        let mut set = Self::with_capacity(max_label);
        for label in labels {
            set.insert(label);
        }
        set
    }

    fn with_capacity(max_label: u32) -> Self {
        Self {
            kept: vec![false; max_label as usize + 1],
        }
    }

    fn insert(&mut self, label: u32) {
        if let Some(slot) = self.kept.get_mut(label as usize) {
            *slot = label != 0;
        }
    }

    pub fn contains(&self, label: u32) -> bool {
        self.kept.get(label as usize).copied().unwrap_or(false)
    }

    /// Kept labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.kept
            .iter()
            .zip(0u32..)
            .filter_map(|(&kept, label)| kept.then_some(label))
    }

    pub fn len(&self) -> usize {
        self.kept.iter().filter(|&&kept| kept).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of [`classify_components`]
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The largest component
    pub main: Component,
    /// Labels to keep; always contains `main.label`
    pub kept: KeepSet,
    /// Components classified as stray text, in decreasing area order
    pub dropped: Vec<Component>,
}

/// Decides which components belong to the main subject.
///
/// Returns `None` when there are no components.
///
/// # Examples
///
/// ```
/// use logoops::{classify_components, Component};
///
/// let icon = Component { label: 1, area: 1000, rows: 0..100, cols: 0..10 };
/// let caption = Component { label: 2, area: 50, rows: 110..120, cols: 0..5 };
///
/// let classification = classify_components(&[icon, caption]).unwrap();
/// assert!(classification.kept.contains(1));
/// assert!(!classification.kept.contains(2));
/// ```
pub fn classify_components(components: &[Component]) -> Option<Classification> {
    let mut by_area: Vec<&Component> = components.iter().collect();
    // stable, so equal areas keep label order
    by_area.sort_by(|a, b| b.area.cmp(&a.area));

    let (&main, rest) = by_area.split_first()?;
    let max_label = components.iter().map(|c| c.label).max().unwrap_or(0);

    let main_area = main.area as f64;
    let main_bottom = f64::from(main.rows.end);
    let buffer = BOTTOM_BUFFER_RATIO * f64::from(main.height());
    let cutoff = main_bottom - buffer;

    let mut kept = KeepSet::with_capacity(max_label);
    kept.insert(main.label);
    let mut dropped = Vec::new();

    for &component in rest {
        if component.area as f64 > LARGE_AREA_RATIO * main_area {
            kept.insert(component.label);
            continue;
        }

        if f64::from(component.rows.start) < cutoff {
            debug!(
                label = component.label,
                y = component.rows.start,
                area = component.area,
                "keeping small component above the main bottom edge"
            );
            kept.insert(component.label);
        } else {
            dropped.push(component.clone());
        }
    }

    Some(Classification {
        main: main.clone(),
        kept,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(label: u32, area: u64, rows: std::ops::Range<u32>) -> Component {
        Component {
            label,
            area,
            rows,
            cols: 0..10,
        }
    }

    #[test]
    fn classify_with_no_components_returns_none() {
        assert!(classify_components(&[]).is_none());
    }

    #[test]
    fn classify_with_single_component_keeps_it() {
        let only = component(1, 42, 3..9);
        let classification = classify_components(&[only.clone()]).unwrap();
        assert_eq!(classification.main, only);
        assert_eq!(classification.kept.labels().collect::<Vec<_>>(), vec![1]);
        assert!(classification.dropped.is_empty());
    }

    #[test]
    fn classify_drops_small_component_below_main() {
        let components = [component(1, 1000, 0..101), component(2, 50, 110..121)];
        let classification = classify_components(&components).unwrap();
        assert!(classification.kept.contains(1));
        assert!(!classification.kept.contains(2));
        assert_eq!(classification.dropped, vec![components[1].clone()]);
    }

    #[test]
    fn classify_keeps_small_component_overlapping_main() {
        let components = [component(1, 1000, 0..101), component(2, 50, 50..61)];
        let classification = classify_components(&components).unwrap();
        assert!(classification.kept.contains(2));
        assert!(classification.dropped.is_empty());
    }

    #[test]
    fn classify_keeps_large_component_below_main() {
        // 101 > 10% of 1000
        let components = [component(1, 1000, 0..100), component(2, 101, 200..220)];
        let classification = classify_components(&components).unwrap();
        assert!(classification.kept.contains(2));
    }

    #[test]
    fn classify_drops_component_at_exactly_ten_percent() {
        let components = [component(1, 1000, 0..100), component(2, 100, 200..220)];
        let classification = classify_components(&components).unwrap();
        assert!(!classification.kept.contains(2));
    }

    #[test]
    fn classify_uses_buffer_above_main_bottom() {
        // main rows 0..100: bottom 100, buffer 5, cutoff 95
        let inside = component(2, 5, 94..99);
        let at_cutoff = component(3, 5, 95..99);
        let components = [component(1, 1000, 0..100), inside, at_cutoff];
        let classification = classify_components(&components).unwrap();
        assert!(classification.kept.contains(2));
        assert!(!classification.kept.contains(3));
    }

    #[test]
    fn classify_with_equal_areas_picks_lowest_label_as_main() {
        let components = [
            component(1, 300, 200..210),
            component(2, 500, 0..10),
            component(3, 500, 50..60),
        ];
        let classification = classify_components(&components).unwrap();
        assert_eq!(classification.main.label, 2);
        // 300 > 10% of 500
        assert_eq!(classification.kept.len(), 3);
    }

    #[test]
    fn keep_set_never_contains_background() {
        let kept = KeepSet::from_labels(3, [0, 2, 9]);
        assert!(!kept.contains(0));
        assert!(kept.contains(2));
        assert!(!kept.contains(7));
        assert_eq!(kept.labels().collect::<Vec<_>>(), vec![2]);
    }
}
