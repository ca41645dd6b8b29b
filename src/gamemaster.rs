//! Snapshot boundary: loads the flat game-master dataset from disk and
//! extracts the typed pieces the classifier needs. Everything here is
//! plain file I/O plus serde; no network access.

use crate::error::{MgResult, MoveGridError};
use crate::record::{MoveRecord, RawCombatMove};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Template fields scanned for teachable move ids.
///
/// Caution: this does NOT cover every move usable in game. Known gaps
/// include shadow/purified exclusives, Smeargle moves, true legacy moves,
/// and the short window before a new Community Day move enters the pool.
const MOVE_LIST_FIELDS: [&str; 4] = [
    "quickMoves",
    "cinematicMoves",
    "eliteQuickMove",
    "eliteCinematicMove",
];

/// One loaded game-master snapshot: the flattened template list with the
/// redundant `templateId`/`data` wrapper already stripped.
#[derive(Debug, Clone)]
pub struct GameMaster {
    templates: Vec<Value>,
}

/// A snapshot plus the millisecond timestamp of its sidecar file, when
/// one was present next to it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub gm: GameMaster,
    pub fetched_ms: Option<i64>,
}

impl GameMaster {
    /// Parses the raw wrapped array format: each element is
    /// `{"templateId": ..., "data": {"templateId": ..., "<kind>": {...}}}`
    /// where the outer id duplicates the inner one. Only the inner object
    /// is kept. Elements that do not match the wrapper shape are dropped
    /// with a warning rather than failing the whole load.
    pub fn from_value(raw: Value) -> MgResult<Self> {
        let Value::Array(items) = raw else {
            return Err(MoveGridError::Validation(
                "game master root is not an array".into(),
            ));
        };

        let mut templates = Vec::with_capacity(items.len());
        for item in items {
            let Some(obj) = item.as_object() else {
                warn!("skipping non-object game master entry");
                continue;
            };
            let outer_id = obj.get("templateId").and_then(Value::as_str);
            match obj.get("data") {
                Some(data) if data.is_object() => {
                    let inner_id = data.get("templateId").and_then(Value::as_str);
                    if outer_id != inner_id {
                        warn!(?outer_id, ?inner_id, "wrapper templateId mismatch");
                    }
                    templates.push(data.clone());
                }
                _ => {
                    warn!(?outer_id, "game master entry has no data object");
                }
            }
        }
        Ok(Self { templates })
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> MgResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_value(serde_json::from_str(&content)?)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Every `combatMove` template as a typed record. Individually
    /// malformed entries are skipped with a diagnostic, never an error.
    pub fn combat_moves(&self) -> Vec<MoveRecord> {
        let mut records = Vec::new();
        for template in &self.templates {
            let Some(raw) = template.get("combatMove") else {
                continue;
            };
            match serde_json::from_value::<RawCombatMove>(raw.clone()) {
                Ok(raw) => records.push(MoveRecord::from(raw)),
                Err(e) => warn!(error = %e, "skipping malformed combatMove entry"),
            }
        }
        records
    }

    /// Ids of all moves reachable through the standard move-teaching
    /// mechanisms, scanned from every `pokemonSettings` template.
    pub fn teachable_moves(&self) -> HashSet<String> {
        let mut moves = HashSet::new();
        for template in &self.templates {
            let Some(settings) = template.get("pokemonSettings") else {
                continue;
            };
            for field in MOVE_LIST_FIELDS {
                let Some(Value::Array(list)) = settings.get(field) else {
                    continue;
                };
                for entry in list {
                    if let Some(id) = entry.as_str() {
                        moves.insert(id.to_string());
                    }
                }
            }
        }
        moves
    }

    /// Season-end timestamps (millis) from the competitive season
    /// settings template, in stored order. The raw values are strings.
    pub fn season_end_timestamps(&self) -> Option<Vec<i64>> {
        let settings = self
            .templates
            .iter()
            .find_map(|t| t.get("combatCompetitiveSeasonSettings"))?;
        let Some(Value::Array(stamps)) = settings.get("seasonEndTimeTimestamp") else {
            return None;
        };
        Some(
            stamps
                .iter()
                .filter_map(|v| v.as_str().and_then(|s| s.parse().ok()))
                .collect(),
        )
    }
}

/// Human label for the season active at `now_ms`, given the season-end
/// timestamp list. One slot in the schedule was the unnumbered
/// "Interlude" season; every other slot is numbered from the list start.
pub fn season_label(timestamps: &[i64], now_ms: i64) -> Option<String> {
    let index = timestamps.iter().position(|&t| t > now_ms)?;
    if index == 12 {
        return Some("Interlude".to_string());
    }
    Some(format!("{}", index as i64 - 2))
}

/// Loads `latest.json` plus the optional `timestamp.txt` sidecar from a
/// snapshot directory.
pub fn load_snapshot<P: AsRef<Path>>(dir: P) -> MgResult<Snapshot> {
    let dir = dir.as_ref();
    let gm = GameMaster::load_file(dir.join("latest.json"))?;
    let fetched_ms = match fs::read_to_string(dir.join("timestamp.txt")) {
        Ok(text) => match text.trim().parse() {
            Ok(ms) => Some(ms),
            Err(_) => {
                warn!("timestamp.txt is not a millisecond epoch; ignoring");
                None
            }
        },
        Err(_) => None,
    };
    Ok(Snapshot { gm, fetched_ms })
}
