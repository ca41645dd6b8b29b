use movegrid::gamemaster::{load_snapshot, season_label, GameMaster};
use tempfile::tempdir;

fn sample_gm_json() -> String {
    r#"[
      {
        "templateId": "COMBAT_V0013_MOVE_WRAP",
        "data": {
          "templateId": "COMBAT_V0013_MOVE_WRAP",
          "combatMove": {
            "uniqueId": "WRAP",
            "type": "POKEMON_TYPE_NORMAL",
            "power": 60.0,
            "energyDelta": -45
          }
        }
      },
      {
        "templateId": "COMBAT_V0200_MOVE_FURY_CUTTER_FAST",
        "data": {
          "templateId": "COMBAT_V0200_MOVE_FURY_CUTTER_FAST",
          "combatMove": {
            "uniqueId": "FURY_CUTTER_FAST",
            "type": "POKEMON_TYPE_BUG",
            "power": 2.0,
            "energyDelta": 4,
            "durationTurns": 1
          }
        }
      },
      {
        "templateId": "COMBAT_V0090_MOVE_POWER_UP_PUNCH",
        "data": {
          "templateId": "COMBAT_V0090_MOVE_POWER_UP_PUNCH",
          "combatMove": {
            "uniqueId": "POWER_UP_PUNCH",
            "type": "POKEMON_TYPE_FIGHTING",
            "power": 20.0,
            "energyDelta": -35,
            "buffs": {
              "buffActivationChance": 1.0,
              "attackerAttackStatStageChange": 1
            }
          }
        }
      },
      {
        "templateId": "V0001_POKEMON_BULBASAUR",
        "data": {
          "templateId": "V0001_POKEMON_BULBASAUR",
          "pokemonSettings": {
            "quickMoves": ["VINE_WHIP_FAST"],
            "cinematicMoves": ["SLUDGE_BOMB", "POWER_WHIP"],
            "eliteCinematicMove": ["FRENZY_PLANT"]
          }
        }
      },
      {
        "templateId": "COMBAT_COMPETITIVE_SEASON_SETTINGS",
        "data": {
          "templateId": "COMBAT_COMPETITIVE_SEASON_SETTINGS",
          "combatCompetitiveSeasonSettings": {
            "seasonEndTimeTimestamp": ["1000", "2000", "3000", "4000"]
          }
        }
      }
    ]"#
    .to_string()
}

#[test]
fn loads_and_strips_the_wrapper() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    std::fs::write(&path, sample_gm_json()).unwrap();

    let gm = GameMaster::load_file(&path).unwrap();
    assert_eq!(gm.len(), 5);
}

#[test]
fn extracts_typed_combat_moves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    std::fs::write(&path, sample_gm_json()).unwrap();
    let gm = GameMaster::load_file(&path).unwrap();

    let records = gm.combat_moves();
    assert_eq!(records.len(), 3);

    let fury = records.iter().find(|r| r.id == "FURY_CUTTER_FAST").unwrap();
    assert_eq!(fury.duration_turns, 2, "raw turn counts are one short");
    assert_eq!(fury.power, 2);
    assert_eq!(fury.type_slug(), "bug");

    let wrap = records.iter().find(|r| r.id == "WRAP").unwrap();
    assert_eq!(wrap.duration_turns, 1, "absent duration means one turn");
    assert_eq!(wrap.energy_delta, -45);

    let pup = records.iter().find(|r| r.id == "POWER_UP_PUNCH").unwrap();
    let buffs = pup.buffs.unwrap();
    assert_eq!(buffs.attacker_attack_stat_stage_change, 1);
    assert_eq!(buffs.target_defense_stat_stage_change, 0);
}

#[test]
fn scans_all_four_move_list_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    std::fs::write(&path, sample_gm_json()).unwrap();
    let gm = GameMaster::load_file(&path).unwrap();

    let teachable = gm.teachable_moves();
    assert!(teachable.contains("VINE_WHIP_FAST"));
    assert!(teachable.contains("SLUDGE_BOMB"));
    assert!(teachable.contains("FRENZY_PLANT"));
    assert!(!teachable.contains("WRAP"));
}

#[test]
fn reads_the_season_schedule() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    std::fs::write(&path, sample_gm_json()).unwrap();
    let gm = GameMaster::load_file(&path).unwrap();

    let stamps = gm.season_end_timestamps().unwrap();
    assert_eq!(stamps, vec![1000, 2000, 3000, 4000]);

    assert_eq!(season_label(&stamps, 2500), Some("0".to_string()));
    assert_eq!(season_label(&stamps, 9999), None);
}

#[test]
fn interlude_slot_gets_its_own_label() {
    let stamps: Vec<i64> = (1..=14).map(|i| i * 1000).collect();
    assert_eq!(season_label(&stamps, 12_500), Some("Interlude".to_string()));
    assert_eq!(season_label(&stamps, 13_500), Some("11".to_string()));
}

#[test]
fn snapshot_picks_up_the_timestamp_sidecar() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("latest.json"), sample_gm_json()).unwrap();
    std::fs::write(dir.path().join("timestamp.txt"), "1700000000000\n").unwrap();

    let snapshot = load_snapshot(dir.path()).unwrap();
    assert_eq!(snapshot.fetched_ms, Some(1_700_000_000_000));
    assert_eq!(snapshot.gm.len(), 5);
}

#[test]
fn snapshot_without_a_sidecar_still_loads() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("latest.json"), sample_gm_json()).unwrap();

    let snapshot = load_snapshot(dir.path()).unwrap();
    assert_eq!(snapshot.fetched_ms, None);
}

#[test]
fn missing_snapshot_is_a_real_error() {
    let dir = tempdir().unwrap();
    assert!(load_snapshot(dir.path()).is_err());
}

#[test]
fn malformed_entries_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    std::fs::write(
        &path,
        r#"[
          {"templateId": "BROKEN"},
          17,
          {
            "templateId": "OK",
            "data": {
              "templateId": "OK",
              "combatMove": {"uniqueId": "TACKLE", "type": "POKEMON_TYPE_NORMAL", "power": 5.0, "energyDelta": -30}
            }
          }
        ]"#,
    )
    .unwrap();

    let gm = GameMaster::load_file(&path).unwrap();
    assert_eq!(gm.len(), 1);
    assert_eq!(gm.combat_moves().len(), 1);
}
