//! Bucketing of move records into ordered nested trees.
//!
//! Charged moves nest energy -> power -> records; fast moves nest
//! energy-per-turn -> combined rate -> turn count -> records. Trees are
//! rebuilt from scratch on every run; nothing is mutated across runs.

use crate::config::GroupingConfig;
use crate::metric::{per_turn, Energy, Power, RateKey, Turns};
use crate::record::MoveRecord;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Moves present in the dataset but not usable in game.
pub const EXCLUDED_CHARGED: [&str; 10] = [
    "HYDRO_PUMP_BLASTOISE",
    "SCALD_BLASTOISE",
    "WRAP_GREEN",
    "WRAP_PINK",
    "MEGA_DRAIN",
    "GIGA_DRAIN",
    "HEART_STAMP",
    "REST",
    "ORIGIN_PULSE",
    "PRECIPICE_BLADES",
];

pub const EXCLUDED_FAST: [&str; 1] = ["WATER_GUN_FAST_BLASTOISE"];

/// Innermost bucket: records sharing identical keys. An explicitly
/// empty leaf is a placeholder slot kept for uniform grid spacing.
pub type Leaf = Vec<MoveRecord>;

/// Charged tree: energy magnitude -> power -> records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargedTree {
    pub groups: BTreeMap<Energy, BTreeMap<Power, Leaf>>,
}

/// Fast tree: energy-per-turn -> (energy + power)-per-turn -> turns -> records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastTree {
    pub groups: BTreeMap<RateKey, BTreeMap<RateKey, BTreeMap<Turns, Leaf>>>,
}

impl ChargedTree {
    /// Rows in display order: ascending by energy.
    pub fn rows(&self) -> impl Iterator<Item = (Energy, &BTreeMap<Power, Leaf>)> + '_ {
        self.groups.iter().map(|(&e, bucket)| (e, bucket))
    }

    /// Sorts every leaf by id with strict ordinal comparison. Ids are
    /// unique within a snapshot, so ties cannot occur. Idempotent.
    pub fn sort_leaves(&mut self) {
        for bucket in self.groups.values_mut() {
            for leaf in bucket.values_mut() {
                leaf.sort_by(|a, b| a.id.cmp(&b.id));
            }
        }
    }

    pub fn record_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|b| b.values())
            .map(Vec::len)
            .sum()
    }
}

impl FastTree {
    /// Rows in display order: descending by energy-per-turn, so the
    /// highest rate sorts first.
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (RateKey, &BTreeMap<RateKey, BTreeMap<Turns, Leaf>>)> + '_ {
        self.groups.iter().rev().map(|(&k, bucket)| (k, bucket))
    }

    pub fn sort_leaves(&mut self) {
        for row in self.groups.values_mut() {
            for bucket in row.values_mut() {
                for leaf in bucket.values_mut() {
                    leaf.sort_by(|a, b| a.id.cmp(&b.id));
                }
            }
        }
    }

    pub fn record_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|r| r.values())
            .flat_map(|b| b.values())
            .map(Vec::len)
            .sum()
    }
}

/// Denylist check with the teachable-set override: a denylisted move
/// that is still teachable stays in (the denylist entry is stale) with
/// a diagnostic; otherwise denylisted moves are dropped.
fn skip_denylisted(id: &str, denylist: &[&str], teachable: &HashSet<String>) -> bool {
    if !denylist.contains(&id) {
        return false;
    }
    if teachable.contains(id) {
        warn!(move_id = id, "found excluded move in use; keeping it");
        return false;
    }
    true
}

/// Groups charged moves (negative energy delta) by energy magnitude and
/// power, then fills in empty placeholder slots for every power value
/// in the [1x, 2x] efficiency band so the rendered grid keeps a uniform
/// cadence regardless of sparse data.
pub fn group_charged(
    records: &[MoveRecord],
    teachable: &HashSet<String>,
    cfg: &GroupingConfig,
) -> ChargedTree {
    let mut tree = ChargedTree::default();
    for record in records {
        if skip_denylisted(&record.id, &EXCLUDED_CHARGED, teachable) {
            continue;
        }
        // charged moves consume energy; anything else is out of scope
        if record.energy_delta >= 0 {
            continue;
        }
        tree.groups
            .entry(Energy(-record.energy_delta))
            .or_default()
            .entry(Power(record.power))
            .or_default()
            .push(record.clone());
    }

    let step = cfg.power_step.max(1);
    for (&energy, bucket) in &mut tree.groups {
        let mut power = energy.0;
        while power <= energy.0 * 2 {
            bucket.entry(Power(power)).or_default();
            power += step;
        }
    }
    tree
}

/// Groups fast moves (positive energy delta) by energy-per-turn, then
/// the combined (energy + power)-per-turn rate, then turn count. The
/// combined key is the canonical metric; records with equal true rates
/// land in the same bucket regardless of duration.
pub fn group_fast(records: &[MoveRecord], teachable: &HashSet<String>) -> FastTree {
    let mut tree = FastTree::default();
    for record in records {
        if skip_denylisted(&record.id, &EXCLUDED_FAST, teachable) {
            continue;
        }
        if record.energy_delta <= 0 {
            continue;
        }
        let turns = Turns(record.duration_turns);
        let ept = per_turn(i64::from(record.energy_delta), turns);
        let sumpt = per_turn(i64::from(record.energy_delta + record.power), turns);

        tree.groups
            .entry(ept)
            .or_default()
            .entry(sumpt)
            .or_default()
            .entry(turns)
            .or_default()
            .push(record.clone());
    }
    tree
}
