pub mod charged;
pub mod fast;

use chrono::{DateTime, Utc};
use movegrid::gamemaster::{self, GameMaster};

/// Season caption for the table, from the competitive season schedule.
pub fn season_caption(gm: &GameMaster) -> Option<String> {
    let timestamps = gm.season_end_timestamps()?;
    let now = Utc::now().timestamp_millis();
    let label = gamemaster::season_label(&timestamps, now)?;
    Some(format!("GBL Season {label}"))
}

/// Human form of the snapshot's fetch timestamp.
pub fn updated_stamp(fetched_ms: Option<i64>) -> Option<String> {
    let stamp = DateTime::<Utc>::from_timestamp_millis(fetched_ms?)?;
    Some(stamp.format("%Y-%m-%d %H:%M UTC").to_string())
}
