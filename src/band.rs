use crate::config::GroupingConfig;
use crate::metric::{Energy, Power, RateKey};
use strum_macros::{Display, EnumIter};

/// The three efficiency columns of each rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Band {
    #[strum(serialize = "low")]
    Low,
    #[strum(serialize = "mid")]
    Mid,
    #[strum(serialize = "high")]
    High,
}

impl Band {
    /// Band of a charged bucket: damage-per-energy below the floor,
    /// inside [floor, ceiling], or above the ceiling.
    pub fn of_dpe(energy: Energy, power: Power, cfg: &GroupingConfig) -> Band {
        let energy = f64::from(energy.0);
        let power = f64::from(power.0);
        if power < energy * cfg.dpe_floor {
            Band::Low
        } else if power > energy * cfg.dpe_ceiling {
            Band::High
        } else {
            Band::Mid
        }
    }

    /// Band of a fast bucket by its combined rate key relative to the
    /// configured mid-band rate.
    pub fn of_rate(sumpt: RateKey, cfg: &GroupingConfig) -> Band {
        let mid = cfg.mid_band_key();
        if sumpt < mid {
            Band::Low
        } else if sumpt > mid {
            Band::High
        } else {
            Band::Mid
        }
    }
}
