//! Display-name contract: a small table of irregular names checked
//! first, then a generic underscore-to-title-case fallback.

/// Charged move ids whose display names do not follow the generic
/// transform (hyphens, mid-word capitals, mode-suffixed variants).
const CHARGED_NAMES: &[(&str, &str)] = &[
    ("POWER_UP_PUNCH", "Power-Up Punch"),
    ("V_CREATE", "V-create"),
    ("X_SCISSOR", "X-Scissor"),
    ("TECHNO_BLAST_NORMAL", "Techno Blast"),
    ("TECHNO_BLAST_BURN", "Techno Blast"),
    ("TECHNO_BLAST_CHILL", "Techno Blast"),
    ("TECHNO_BLAST_WATER", "Techno Blast"),
    ("TECHNO_BLAST_SHOCK", "Techno Blast"),
    ("WEATHER_BALL_NORMAL", "Weather Ball"),
    ("WEATHER_BALL_FIRE", "Weather Ball"),
    ("WEATHER_BALL_ICE", "Weather Ball"),
    ("WEATHER_BALL_ROCK", "Weather Ball"),
    ("WEATHER_BALL_WATER", "Weather Ball"),
];

const FAST_NAMES: &[(&str, &str)] = &[("WATER_GUN_FAST_BLASTOISE", "Water Gun Blastoise")];

fn lookup(table: &[(&str, &str)], id: &str) -> Option<String> {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| (*name).to_string())
}

fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn charged_title(id: &str) -> String {
    lookup(CHARGED_NAMES, id).unwrap_or_else(|| title_case(id))
}

/// Fast ids carry a fixed `_FAST` mode suffix that is stripped before
/// the generic transform.
pub fn fast_title(id: &str) -> String {
    lookup(FAST_NAMES, id)
        .unwrap_or_else(|| title_case(id.strip_suffix("_FAST").unwrap_or(id)))
}

/// Fixed-point formatting for displayed rates and ratios.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
