#![allow(dead_code)]

use movegrid::record::MoveRecord;

pub fn charged(id: &str, energy: i32, power: i32) -> MoveRecord {
    MoveRecord {
        id: id.to_string(),
        move_type: "POKEMON_TYPE_NORMAL".to_string(),
        power,
        energy_delta: -energy,
        duration_turns: 1,
        buffs: None,
    }
}

pub fn fast(id: &str, energy_delta: i32, power: i32, turns: u32) -> MoveRecord {
    MoveRecord {
        id: id.to_string(),
        move_type: "POKEMON_TYPE_NORMAL".to_string(),
        power,
        energy_delta,
        duration_turns: turns,
        buffs: None,
    }
}
