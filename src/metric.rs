//! Normalization of rational per-turn quantities to exact integer keys.
//!
//! Rate keys (energy-per-turn, power-per-turn) are rationals with small
//! denominators. Scaling by the least common multiple of all supported
//! turn counts keeps them exact integers, so they are safe as ordered
//! map keys with no float-equality hazards.

use std::fmt;

/// LCM of supported move durations (1..=5 turns).
/// If a 6+ turn move is ever released this constant must be recomputed.
pub const COMMON_MULTIPLE: i64 = 60;

/// Energy magnitude of a charged move (positive, from a negative delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Energy(pub i32);

/// Base power of a charged move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Power(pub i32);

/// A per-turn rate scaled by [`COMMON_MULTIPLE`]. Used for both the
/// energy-per-turn axis and the combined (energy + power)-per-turn axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateKey(pub i64);

/// Move duration in whole turns (>= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Turns(pub u32);

impl RateKey {
    /// The true rational rate this key represents.
    pub fn to_rate(self) -> f64 {
        self.0 as f64 / COMMON_MULTIPLE as f64
    }

    /// Per-event quantity for a move of the given duration. Exact for
    /// all supported durations since `turns` divides [`COMMON_MULTIPLE`].
    pub fn per_event(self, turns: Turns) -> i64 {
        self.0 * i64::from(turns.0) / COMMON_MULTIPLE
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes a raw per-event quantity to an integer rate key.
///
/// Equal true rates always map to the same key: `per_turn(10, 2)` and
/// `per_turn(20, 4)` are identical. Pure and total for `turns >= 1`.
pub fn per_turn(raw: i64, turns: Turns) -> RateKey {
    debug_assert!(turns.0 >= 1, "duration must be at least one turn");
    let scaled = raw * COMMON_MULTIPLE;
    debug_assert_eq!(
        scaled % i64::from(turns.0),
        0,
        "COMMON_MULTIPLE does not cover a {}-turn duration",
        turns.0
    );
    RateKey(scaled / i64::from(turns.0))
}
