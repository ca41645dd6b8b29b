use movegrid::classify::{group_charged, group_fast};
use movegrid::config::GroupingConfig;
use movegrid::metric::{Energy, Power, RateKey, Turns};
use std::collections::HashSet;

mod common;
use common::{charged, fast};

fn no_teachable() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn end_to_end_charged_scenario() {
    let records = vec![charged("A", 50, 50), charged("B", 50, 100)];
    let cfg = GroupingConfig::default();
    let mut tree = group_charged(&records, &no_teachable(), &cfg);
    tree.sort_leaves();

    assert_eq!(tree.groups.len(), 1);
    let bucket = &tree.groups[&Energy(50)];

    let leaf_a = &bucket[&Power(50)];
    let leaf_b = &bucket[&Power(100)];
    assert_eq!(leaf_a.len(), 1);
    assert_eq!(leaf_a[0].id, "A");
    assert_eq!(leaf_b.len(), 1);
    assert_eq!(leaf_b[0].id, "B");

    // the 1x..2x band is fully slotted with no gaps
    let keys: Vec<i32> = bucket.keys().map(|p| p.0).collect();
    let expected: Vec<i32> = (50..=100).step_by(5).collect();
    assert_eq!(keys, expected);
}

#[test]
fn placeholder_slots_are_explicitly_empty() {
    let records = vec![charged("SOLO", 40, 60)];
    let tree = group_charged(&records, &no_teachable(), &GroupingConfig::default());
    let bucket = &tree.groups[&Energy(40)];

    for power in (40..=80).step_by(5) {
        let leaf = bucket
            .get(&Power(power))
            .unwrap_or_else(|| panic!("missing slot at power {power}"));
        if power == 60 {
            assert_eq!(leaf.len(), 1);
        } else {
            assert!(leaf.is_empty(), "slot at power {power} should be a placeholder");
        }
    }
}

#[test]
fn wrong_sign_records_are_never_bucketed() {
    let generates = fast("GAINER", 5, 10, 1);
    let mut wrong_charged = charged("WRONG", 50, 50);
    wrong_charged.energy_delta = 5; // generates energy: not a charged move

    let charged_tree = group_charged(
        &[wrong_charged.clone(), generates.clone()],
        &no_teachable(),
        &GroupingConfig::default(),
    );
    assert_eq!(charged_tree.record_count(), 0);

    let mut wrong_fast = fast("DRAIN", 5, 10, 1);
    wrong_fast.energy_delta = -3; // consumes energy: not a fast move
    let fast_tree = group_fast(&[wrong_fast], &no_teachable());
    assert_eq!(fast_tree.record_count(), 0);
}

#[test]
fn denylisted_moves_are_dropped() {
    let records = vec![charged("REST", 35, 50), charged("KEEP", 35, 50)];
    let tree = group_charged(&records, &no_teachable(), &GroupingConfig::default());
    let ids: Vec<&str> = tree
        .groups
        .values()
        .flat_map(|b| b.values())
        .flatten()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["KEEP"]);
}

#[test]
fn teachable_set_overrides_the_denylist() {
    let records = vec![charged("REST", 35, 50)];
    let mut teachable = HashSet::new();
    teachable.insert("REST".to_string());

    let tree = group_charged(&records, &teachable, &GroupingConfig::default());
    let count = tree
        .groups
        .values()
        .flat_map(|b| b.values())
        .flatten()
        .filter(|r| r.id == "REST")
        .count();
    assert_eq!(count, 1, "stale denylist entry must be included exactly once");
}

#[test]
fn fast_moves_with_equal_rates_share_keys() {
    // 2 ept, 1.5 sumpt-minus-ept: same rates at different durations
    let records = vec![fast("LONG", 8, 6, 4), fast("SHORT", 4, 3, 2)];
    let tree = group_fast(&records, &no_teachable());

    assert_eq!(tree.groups.len(), 1, "equal ept must share the outer key");
    let row = tree.groups.values().next().unwrap();
    assert_eq!(row.len(), 1, "equal combined rate must share the inner key");
    let bucket = row.values().next().unwrap();
    assert_eq!(bucket.len(), 2, "different durations keep separate leaves");
    assert!(bucket.contains_key(&Turns(2)));
    assert!(bucket.contains_key(&Turns(4)));
}

#[test]
fn fast_rows_iterate_descending_by_rate() {
    let records = vec![fast("SLOW", 2, 2, 1), fast("QUICK", 4, 2, 1)];
    let tree = group_fast(&records, &no_teachable());
    let keys: Vec<RateKey> = tree.rows().map(|(k, _)| k).collect();
    assert_eq!(keys.len(), 2);
    assert!(keys[0] > keys[1], "higher ept must sort first");
}

#[test]
fn leaves_sort_in_strict_id_order() {
    let records = vec![
        charged("ZAP", 50, 50),
        charged("AURA", 50, 50),
        charged("MID", 50, 50),
    ];
    let mut tree = group_charged(&records, &no_teachable(), &GroupingConfig::default());
    tree.sort_leaves();

    let leaf = &tree.groups[&Energy(50)][&Power(50)];
    let ids: Vec<&str> = leaf.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["AURA", "MID", "ZAP"]);
}

#[test]
fn classification_is_idempotent() {
    let records = vec![
        charged("A", 50, 50),
        charged("B", 50, 100),
        charged("C", 40, 35),
        fast("D", 4, 3, 2),
    ];
    let cfg = GroupingConfig::default();
    let teachable = no_teachable();

    let mut first = group_charged(&records, &teachable, &cfg);
    first.sort_leaves();
    let mut second = group_charged(&records, &teachable, &cfg);
    second.sort_leaves();
    assert_eq!(first, second);

    let keys_a: Vec<(Energy, Vec<Power>)> = first
        .rows()
        .map(|(e, b)| (e, b.keys().copied().collect()))
        .collect();
    let keys_b: Vec<(Energy, Vec<Power>)> = second
        .rows()
        .map(|(e, b)| (e, b.keys().copied().collect()))
        .collect();
    assert_eq!(keys_a, keys_b);

    let mut fast_first = group_fast(&records, &teachable);
    fast_first.sort_leaves();
    let mut fast_second = group_fast(&records, &teachable);
    fast_second.sort_leaves();
    assert_eq!(fast_first, fast_second);
}
