use crate::classify::{ChargedTree, FastTree};
use crate::layout::{rate_extent, ratio_range};
use crate::titles::format_fixed;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Console summary of a charged tree: one row per energy group with
/// bucket/move counts and the observed damage-per-energy range.
pub fn charged_summary(tree: &ChargedTree) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Energy").add_attribute(Attribute::Bold),
        Cell::new("Slots"),
        Cell::new("Moves").fg(Color::Cyan),
        Cell::new("DPE min"),
        Cell::new("DPE max"),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (energy, bucket) in tree.rows() {
        let moves: usize = bucket.values().map(Vec::len).sum();
        let (lo, hi) = ratio_range(energy, bucket).unwrap_or((0.0, 0.0));
        table.add_row(vec![
            Cell::new(energy).add_attribute(Attribute::Bold),
            Cell::new(bucket.len()),
            Cell::new(moves).fg(Color::Cyan),
            Cell::new(format_fixed(lo, 2)),
            Cell::new(format_fixed(hi, 2)),
        ]);
    }
    println!("\n{table}");
}

/// Console summary of a fast tree: one row per energy-per-turn rate
/// (highest first) with its combined-rate spread.
pub fn fast_summary(tree: &FastTree) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("EPT").add_attribute(Attribute::Bold),
        Cell::new("Buckets"),
        Cell::new("Moves").fg(Color::Cyan),
        Cell::new("Rate min"),
        Cell::new("Rate max"),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (ept, row) in tree.rows() {
        let moves: usize = row.values().flat_map(|b| b.values()).map(Vec::len).sum();
        let lo = row.keys().next();
        let hi = row.keys().next_back();
        table.add_row(vec![
            Cell::new(format_fixed(ept.to_rate(), 2)).add_attribute(Attribute::Bold),
            Cell::new(row.len()),
            Cell::new(moves).fg(Color::Cyan),
            Cell::new(lo.map_or_else(String::new, |k| format_fixed(k.to_rate(), 2))),
            Cell::new(hi.map_or_else(String::new, |k| format_fixed(k.to_rate(), 2))),
        ]);
    }

    if let Some((lo, hi)) = rate_extent(tree) {
        println!(
            "\nCombined rate extent: {} .. {}",
            format_fixed(lo.to_rate(), 2),
            format_fixed(hi.to_rate(), 2)
        );
    }
    println!("\n{table}");
}
