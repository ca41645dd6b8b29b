use serde::{Deserialize, Serialize};

/// Stat-stage deltas attached to a move, with an activation chance.
/// Absent stages deserialize as 0 and are treated as "no change".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuffSpec {
    pub buff_activation_chance: f32,
    pub attacker_attack_stat_stage_change: i8,
    pub attacker_defense_stat_stage_change: i8,
    pub target_attack_stat_stage_change: i8,
    pub target_defense_stat_stage_change: i8,
}

/// A combat move exactly as it appears in the raw snapshot. The stored
/// duration is one less than the true turn count, and power is a float
/// with integral values; [`MoveRecord`] carries the corrected forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCombatMove {
    pub unique_id: String,
    #[serde(rename = "type", default)]
    pub move_type: String,
    #[serde(default)]
    pub power: f64,
    #[serde(default)]
    pub energy_delta: i32,
    #[serde(default)]
    pub duration_turns: u32,
    #[serde(default)]
    pub buffs: Option<BuffSpec>,
}

/// A single move definition from one dataset snapshot.
///
/// `energy_delta` is negative for charged moves (energy consumed) and
/// positive for fast moves (energy generated). `duration_turns` is the
/// true turn count, always >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub id: String,
    pub move_type: String,
    pub power: i32,
    pub energy_delta: i32,
    pub duration_turns: u32,
    pub buffs: Option<BuffSpec>,
}

impl From<RawCombatMove> for MoveRecord {
    fn from(raw: RawCombatMove) -> Self {
        Self {
            id: raw.unique_id,
            move_type: raw.move_type,
            power: raw.power as i32,
            energy_delta: raw.energy_delta,
            // raw values are stored one turn short
            duration_turns: raw.duration_turns + 1,
            buffs: raw.buffs,
        }
    }
}

impl MoveRecord {
    /// Lowercased type name with the shared "POKEMON_TYPE_" prefix removed,
    /// suitable for icon lookups.
    pub fn type_slug(&self) -> String {
        self.move_type
            .strip_prefix("POKEMON_TYPE_")
            .unwrap_or(&self.move_type)
            .to_lowercase()
    }
}
