use crate::metric::{RateKey, COMMON_MULTIPLE};
use clap::Args;
use serde::{Deserialize, Serialize};

/// Grouping and layout knobs. Defaults match the live dataset's grid
/// cadence; override from the CLI for experiments.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Grid step between charged power slots.
    #[arg(long, default_value_t = 5)]
    pub power_step: i32,

    /// Lower edge of the "efficient" charged band, as damage-per-energy.
    #[arg(long, default_value_t = 1.0)]
    pub dpe_floor: f64,

    /// Upper edge of the "efficient" charged band, as damage-per-energy.
    #[arg(long, default_value_t = 2.0)]
    pub dpe_ceiling: f64,

    /// Combined (energy + power) per-turn rate that splits the fast-move
    /// table into its three bands.
    #[arg(long, default_value_t = 6.0)]
    pub mid_band_rate: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            power_step: 5,
            dpe_floor: 1.0,
            dpe_ceiling: 2.0,
            mid_band_rate: 6.0,
        }
    }
}

impl GroupingConfig {
    /// The mid-band rate as a normalized key, for exact comparisons
    /// against composite rate keys.
    pub fn mid_band_key(&self) -> RateKey {
        RateKey((self.mid_band_rate * COMMON_MULTIPLE as f64).round() as i64)
    }
}
