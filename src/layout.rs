//! Spacing math for the rendered grids: unit-width spacers between fast
//! buckets, and a logarithmic scale for efficiency-ratio gutters.

use crate::classify::{ChargedTree, FastTree, Leaf};
use crate::metric::{Energy, Power, RateKey, COMMON_MULTIPLE};
use crate::titles::format_fixed;
use std::collections::BTreeMap;
use tracing::warn;

/// Largest key gap that still reads as adjacent: one third of a rate
/// point, the grid's grouping granularity.
pub const UNIT_STEP: i64 = COMMON_MULTIPLE / 3;

/// One piece of a rendered row: a proportional width plus an optional
/// label for the ratio at its left boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSegment {
    pub width: f64,
    pub label: Option<String>,
}

/// Spacer width in grid units between two consecutive populated keys,
/// or `None` when they are close enough to touch. The -2 correction
/// keeps adjacent real buckets visually distinct from pure spacing.
pub fn spacer_units(prev: RateKey, next: RateKey) -> Option<f64> {
    let gap = next.0 - prev.0;
    if gap > UNIT_STEP {
        Some(gap as f64 * 6.0 / COMMON_MULTIPLE as f64 - 2.0)
    } else {
        None
    }
}

/// Trailing spacer out to the dataset-wide maximum key, with no overlap
/// correction since there is no bucket on the far side.
pub fn trailing_spacer_units(prev: RateKey, max: RateKey) -> Option<f64> {
    if max.0 > prev.0 {
        Some((max.0 - prev.0) as f64 * 6.0 / COMMON_MULTIPLE as f64)
    } else {
        None
    }
}

/// Virtual predecessor for the first bucket of a row, placed one unit
/// step before the dataset minimum so a bucket at the minimum gets no
/// leading spacer.
pub fn row_origin(min: RateKey) -> RateKey {
    RateKey(min.0 - UNIT_STEP)
}

/// Min and max combined rate key across every row of a fast tree.
pub fn rate_extent(tree: &FastTree) -> Option<(RateKey, RateKey)> {
    let mut extent: Option<(RateKey, RateKey)> = None;
    for row in tree.groups.values() {
        let (Some(&first), Some(&last)) = (row.keys().next(), row.keys().next_back()) else {
            continue;
        };
        extent = Some(match extent {
            None => (first, last),
            Some((lo, hi)) => (lo.min(first), hi.max(last)),
        });
    }
    extent
}

/// Min and max efficiency ratio (power / energy) across the populated
/// children of one charged row. Placeholder slots do not count.
pub fn ratio_range(energy: Energy, bucket: &BTreeMap<Power, Leaf>) -> Option<(f64, f64)> {
    let mut populated = bucket
        .iter()
        .filter(|(_, leaf)| !leaf.is_empty())
        .map(|(&p, _)| f64::from(p.0) / f64::from(energy.0));
    let first = populated.next()?;
    let last = populated.last().unwrap_or(first);
    Some((first, last))
}

/// Max efficiency ratio across an entire charged tree, used as the top
/// of the shared log scale.
pub fn max_ratio(tree: &ChargedTree) -> Option<f64> {
    tree.rows()
        .filter_map(|(e, bucket)| ratio_range(e, bucket).map(|(_, hi)| hi))
        .fold(None, |acc, hi| Some(acc.map_or(hi, |acc| f64::max(acc, hi))))
}

/// Log-scale mapping of efficiency ratios onto [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct LogScale {
    floor: f64,
    denom: f64,
}

impl LogScale {
    /// `None` when the range is degenerate (no headroom above the
    /// floor); callers fall back to a single full-width segment.
    pub fn new(floor: f64, max: f64) -> Option<Self> {
        if floor <= 0.0 || max <= floor {
            return None;
        }
        Some(Self {
            floor,
            denom: (max / floor).ln(),
        })
    }

    /// Monotonic in `ratio`: exactly 0 at the floor, exactly 1 at the
    /// maximum the scale was built with.
    pub fn position(&self, ratio: f64) -> f64 {
        (ratio / self.floor).ln() / self.denom
    }
}

/// Splits one row into ordered segments along the log scale. Each
/// populated ratio opens a segment labeled with its value; the region
/// before the first ratio is an unlabeled lead-in. Widths sum to 1.
///
/// A row with no ratios above the floor degenerates to a single
/// full-width unlabeled segment, with a diagnostic. Never panics.
pub fn scale_row(floor: f64, max: f64, ratios: &[f64]) -> Vec<LayoutSegment> {
    let full_row = || {
        vec![LayoutSegment {
            width: 1.0,
            label: None,
        }]
    };

    let Some(scale) = LogScale::new(floor, max) else {
        warn!(floor, max, "degenerate ratio range; rendering a full-width row");
        return full_row();
    };

    let mut above: Vec<f64> = ratios.iter().copied().filter(|&r| r >= floor).collect();
    above.sort_by(f64::total_cmp);
    above.dedup();
    if above.is_empty() {
        warn!(floor, "no ratios above the scale floor; rendering a full-width row");
        return full_row();
    }

    let positions: Vec<f64> = above.iter().map(|&r| scale.position(r)).collect();

    let mut segments = Vec::with_capacity(above.len() + 1);
    if positions[0] > 0.0 {
        // unlabeled lead-in from the floor to the first populated ratio
        segments.push(LayoutSegment {
            width: positions[0],
            label: None,
        });
    }
    for i in 0..above.len() {
        let right = positions.get(i + 1).copied().unwrap_or(1.0);
        segments.push(LayoutSegment {
            width: right - positions[i],
            label: Some(format_fixed(above[i], 2)),
        });
    }
    segments
}
