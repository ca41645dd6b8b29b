//! HTML rendering of the classified trees. Writes complete documents to
//! any `io::Write`; layout widths are carried on CSS custom properties
//! so the stylesheet stays in charge of actual pixel math.

use crate::band::Band;
use crate::classify::{ChargedTree, FastTree, Leaf};
use crate::config::GroupingConfig;
use crate::layout::{
    max_ratio, rate_extent, row_origin, scale_row, spacer_units, trailing_spacer_units,
};
use crate::metric::{Power, RateKey, Turns};
use crate::record::BuffSpec;
use crate::titles::{charged_title, fast_title, format_fixed};
use std::collections::BTreeMap;
use std::io::{self, Write};
use strum::IntoEnumIterator;

const NBSP: char = '\u{a0}';
const HELPFUL_MARK: char = '\u{1f496}';
const HURTFUL_MARK: char = '\u{1f4a3}';

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn write_head<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    write!(
        w,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 1rem; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; vertical-align: top; padding: 0.25rem; }}
td > div {{ display: flex; gap: 0.5rem; }}
figure {{ margin: 0; }}
figcaption {{ font-weight: 600; white-space: nowrap; }}
ul {{ list-style: none; margin: 0; padding: 0; }}
img {{ height: 1em; }}
.spacer {{ flex-grow: var(--spacer-units); }}
.scale {{ display: flex; }}
.scale-seg {{ flex-grow: var(--seg-width); border-left: 1px solid #999; font-size: 0.75rem; }}
caption {{ caption-side: top; font-weight: 700; }}
</style>
</head>
<body>
"#
    )
}

fn write_foot<W: Write>(w: &mut W, updated: Option<&str>) -> io::Result<()> {
    if let Some(stamp) = updated {
        writeln!(w, "<p id=\"last-updated\">Last updated {}</p>", escape(stamp))?;
    }
    writeln!(w, "</body>\n</html>")
}

fn buff_markup(buffs: &BuffSpec) -> Option<String> {
    let mut text = String::new();
    if buffs.buff_activation_chance != 1.0 {
        // omit the 100% case to save space
        text.push_str(&format!("{}% ", buffs.buff_activation_chance * 100.0));
    }

    let mut helpful = String::new();
    if buffs.attacker_attack_stat_stage_change > 0 {
        helpful.push_str(&format!("{NBSP}A+{}", buffs.attacker_attack_stat_stage_change));
    }
    if buffs.attacker_defense_stat_stage_change > 0 {
        helpful.push_str(&format!("{NBSP}D+{}", buffs.attacker_defense_stat_stage_change));
    }
    if buffs.target_attack_stat_stage_change < 0 {
        helpful.push_str(&format!("{NBSP}A{}", buffs.target_attack_stat_stage_change));
    }
    if buffs.target_defense_stat_stage_change < 0 {
        helpful.push_str(&format!("{NBSP}D{}", buffs.target_defense_stat_stage_change));
    }
    if !helpful.is_empty() {
        text.push(HELPFUL_MARK);
        text.push_str(&helpful);
    }

    let mut hurtful = String::new();
    if buffs.attacker_attack_stat_stage_change < 0 {
        hurtful.push_str(&format!("{NBSP}A{}", buffs.attacker_attack_stat_stage_change));
    }
    if buffs.attacker_defense_stat_stage_change < 0 {
        hurtful.push_str(&format!("{NBSP}D{}", buffs.attacker_defense_stat_stage_change));
    }
    if buffs.target_attack_stat_stage_change > 0 {
        hurtful.push_str(&format!("{NBSP}A+{}", buffs.target_attack_stat_stage_change));
    }
    if buffs.target_defense_stat_stage_change > 0 {
        hurtful.push_str(&format!("{NBSP}D+{}", buffs.target_defense_stat_stage_change));
    }
    if !hurtful.is_empty() {
        text.push(HURTFUL_MARK);
        text.push_str(&hurtful);
    }

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn type_icon(slug: &str) -> String {
    format!(
        "<img src=\"images/type-icons.svg#{slug}-badge\" alt=\"{slug}\">",
        slug = escape(slug)
    )
}

fn charged_bucket<W: Write>(w: &mut W, power: Power, leaf: &Leaf) -> io::Result<()> {
    // empty placeholder keeps the grid cadence
    if leaf.is_empty() {
        return writeln!(w, "<div></div>");
    }
    writeln!(w, "<figure><figcaption>{power} power</figcaption>\n<ul>")?;
    for record in leaf {
        write!(
            w,
            "<li><p>{}</p>{}",
            escape(&charged_title(&record.id)),
            type_icon(&record.type_slug())
        )?;
        if let Some(buffs) = &record.buffs {
            if let Some(text) = buff_markup(buffs) {
                write!(w, "<p>{text}</p>")?;
            }
        }
        writeln!(w, "</li>")?;
    }
    writeln!(w, "</ul></figure>")
}

/// Charged-move table: one row per energy cost, three cells for the
/// low/mid/high efficiency bands, and a log-scale gutter of the row's
/// damage-per-energy range.
pub fn write_charged<W: Write>(
    w: &mut W,
    tree: &ChargedTree,
    cfg: &GroupingConfig,
    caption: Option<&str>,
    updated: Option<&str>,
) -> io::Result<()> {
    write_head(w, "Charged moves by energy and power")?;
    writeln!(w, "<table id=\"moves-container\">")?;
    if let Some(caption) = caption {
        writeln!(w, "<caption>{}</caption>", escape(caption))?;
    }

    let scale_max = max_ratio(tree).unwrap_or(cfg.dpe_ceiling);

    for (energy, bucket) in tree.rows() {
        writeln!(w, "<tr>\n<th scope=\"row\"><div>{energy} energy</div></th>")?;
        for band in Band::iter() {
            writeln!(w, "<td class=\"{band}\"><div>")?;
            for (&power, leaf) in bucket {
                if Band::of_dpe(energy, power, cfg) != band {
                    continue;
                }
                charged_bucket(w, power, leaf)?;
            }
            writeln!(w, "</div></td>")?;
        }

        let ratios: Vec<f64> = bucket
            .iter()
            .filter(|(_, leaf)| !leaf.is_empty())
            .map(|(&p, _)| f64::from(p.0) / f64::from(energy.0))
            .collect();
        writeln!(w, "<td><div class=\"scale\">")?;
        for segment in scale_row(cfg.dpe_floor, scale_max, &ratios) {
            write!(
                w,
                "<div class=\"scale-seg\" style=\"--seg-width: {:.4}\">",
                segment.width
            )?;
            if let Some(label) = &segment.label {
                write!(w, "{label}")?;
            }
            writeln!(w, "</div>")?;
        }
        writeln!(w, "</div></td>\n</tr>")?;
    }

    writeln!(w, "</table>")?;
    write_foot(w, updated)
}

fn fast_bucket<W: Write>(
    w: &mut W,
    ept: RateKey,
    sumpt: RateKey,
    bucket: &BTreeMap<Turns, Leaf>,
) -> io::Result<()> {
    let ppt = (sumpt.0 - ept.0) as f64 / crate::metric::COMMON_MULTIPLE as f64;
    writeln!(
        w,
        "<div class=\"ppt-container\">\n<div>{} ppt</div>",
        format_fixed(ppt, 2)
    )?;
    for (&turns, leaf) in bucket {
        let energy = ept.per_event(turns);
        let power = RateKey(sumpt.0 - ept.0).per_event(turns);
        let plural = if turns.0 > 1 { "s" } else { "" };
        writeln!(
            w,
            "<figure><figcaption><span>{energy}e {power}p</span><span> {turns} turn{plural}</span></figcaption>\n<ul>"
        )?;
        for record in leaf {
            writeln!(
                w,
                "<li>{}{}</li>",
                escape(&fast_title(&record.id)),
                type_icon(&record.type_slug())
            )?;
        }
        writeln!(w, "</ul></figure>")?;
    }
    writeln!(w, "</div>")
}

fn spacer<W: Write>(w: &mut W, units: f64) -> io::Result<()> {
    writeln!(
        w,
        "<div class=\"spacer\" style=\"--spacer-units: {units:.2}\"></div>"
    )
}

/// Fast-move table: one row per energy-per-turn rate (highest first),
/// three cells for combined rates below, at, and above the mid band,
/// with proportional spacers between populated buckets.
pub fn write_fast<W: Write>(
    w: &mut W,
    tree: &FastTree,
    cfg: &GroupingConfig,
    caption: Option<&str>,
    updated: Option<&str>,
) -> io::Result<()> {
    write_head(w, "Fast moves by energy and power per turn")?;
    writeln!(w, "<table id=\"moves-container\">")?;
    if let Some(caption) = caption {
        writeln!(w, "<caption>{}</caption>", escape(caption))?;
    }
    writeln!(w, "<tbody>")?;

    let extent = rate_extent(tree);
    let mid = cfg.mid_band_key();

    for (ept, row) in tree.rows() {
        let (min_sumpt, max_sumpt) = extent.unwrap_or((mid, mid));
        writeln!(
            w,
            "<tr>\n<th scope=\"row\"><div>{} ept</div></th>",
            format_fixed(ept.to_rate(), 2)
        )?;

        // below the mid band
        writeln!(w, "<td><div>")?;
        let mut last = row_origin(min_sumpt);
        for (&sumpt, bucket) in row.range(..mid) {
            if let Some(units) = spacer_units(last, sumpt) {
                spacer(w, units)?;
            }
            fast_bucket(w, ept, sumpt, bucket)?;
            last = sumpt;
        }
        if let Some(units) = spacer_units(last, mid) {
            spacer(w, units)?;
        }
        writeln!(w, "</div></td>")?;

        // exactly the mid band
        writeln!(w, "<td><div>")?;
        if let Some(bucket) = row.get(&mid) {
            fast_bucket(w, ept, mid, bucket)?;
        }
        writeln!(w, "</div></td>")?;

        // above the mid band
        writeln!(w, "<td><div>")?;
        last = mid;
        for (&sumpt, bucket) in row.range(RateKey(mid.0 + 1)..) {
            if let Some(units) = spacer_units(last, sumpt) {
                spacer(w, units)?;
            }
            fast_bucket(w, ept, sumpt, bucket)?;
            last = sumpt;
        }
        if let Some(units) = trailing_spacer_units(last, max_sumpt) {
            spacer(w, units)?;
        }
        writeln!(w, "</div></td>\n</tr>")?;
    }

    writeln!(w, "</tbody>\n</table>")?;
    write_foot(w, updated)
}
