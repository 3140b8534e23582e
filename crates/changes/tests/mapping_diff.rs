//! Drives the change model the way a diffing engine would: compare two
//! snapshots of a mapping property and record one entry change per key.

use std::collections::{BTreeMap, HashSet};

use auditdiff_changes::{EntryChange, EntryChangeType, MapChange};
use auditdiff_core::Atomic;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct WarehouseCode(String);

impl WarehouseCode {
    fn new(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Minimal stand-in for the comparison engine, good enough to feed the model.
fn compare(
    property: &str,
    left: &BTreeMap<WarehouseCode, u32>,
    right: &BTreeMap<WarehouseCode, u32>,
) -> MapChange<WarehouseCode, u32> {
    let mut entries = Vec::new();
    for (key, old) in left {
        match right.get(key) {
            None => entries.push(EntryChange::removed(key.clone(), *old)),
            Some(new) if new != old => {
                entries.push(EntryChange::value_changed(key.clone(), *old, *new))
            }
            Some(_) => {}
        }
    }
    for (key, new) in right {
        if !left.contains_key(key) {
            entries.push(EntryChange::added(key.clone(), *new));
        }
    }
    MapChange::new(property, entries).unwrap()
}

fn stock(pairs: &[(&str, u32)]) -> BTreeMap<WarehouseCode, u32> {
    pairs
        .iter()
        .map(|(code, qty)| (WarehouseCode::new(code), *qty))
        .collect()
}

#[test]
fn snapshot_comparison_yields_one_change_per_differing_key() {
    let left = stock(&[("ber-1", 10), ("muc-2", 4), ("ham-3", 7)]);
    let right = stock(&[("ber-1", 10), ("muc-2", 6), ("fra-4", 1)]);

    let change = compare("stock_by_warehouse", &left, &right);

    assert_eq!(change.len(), 3);
    let muc = change.get(&WarehouseCode::new("muc-2")).unwrap();
    assert_eq!(muc.change_type(), EntryChangeType::EntryValueChanged);
    assert_eq!((muc.left_value(), muc.right_value()), (Some(&4), Some(&6)));

    let ham = change.get(&WarehouseCode::new("ham-3")).unwrap();
    assert_eq!(ham.change_type(), EntryChangeType::EntryRemoved);

    let fra = change.get(&WarehouseCode::new("fra-4")).unwrap();
    assert_eq!(fra.change_type(), EntryChangeType::EntryAdded);
    assert_eq!(fra.key(), &WarehouseCode::new("fra-4"));

    assert!(!change.contains_key(&WarehouseCode::new("ber-1")));
}

#[test]
fn identical_snapshots_produce_an_empty_change() {
    let snapshot = stock(&[("ber-1", 10)]);
    assert!(compare("stock_by_warehouse", &snapshot, &snapshot).is_empty());
}

#[test]
fn change_records_deduplicate_by_key_in_downstream_sets() {
    let left = stock(&[("ber-1", 10)]);
    let right = stock(&[("ber-1", 11)]);
    let first_pass = compare("stock_by_warehouse", &left, &right);
    let second_pass = compare("stock_by_warehouse", &left, &right);

    let merged: HashSet<_> = first_pass
        .into_entries()
        .into_iter()
        .chain(second_pass.into_entries())
        .collect();
    assert_eq!(merged.len(), 1);

    let wrapped: HashSet<_> = merged.iter().map(|c| c.wrapped_key().clone()).collect();
    assert!(wrapped.contains(&Atomic::new(WarehouseCode::new("ber-1"))));
}

#[test]
fn added_and_removed_for_same_key_is_a_contract_violation() {
    let entries = vec![
        EntryChange::added(WarehouseCode::new("ber-1"), 1),
        EntryChange::removed(WarehouseCode::new("ber-1"), 1),
    ];
    assert!(MapChange::new("stock_by_warehouse", entries).is_err());
}

#[test]
fn change_records_are_shared_across_threads_without_locking() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MapChange<WarehouseCode, u32>>();

    let change = compare(
        "stock_by_warehouse",
        &stock(&[("ber-1", 1), ("muc-2", 2)]),
        &stock(&[("ber-1", 3)]),
    );

    std::thread::scope(|scope| {
        let readers: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    change
                        .entries()
                        .iter()
                        .filter(|entry| entry.key() == &WarehouseCode::new("ber-1"))
                        .count()
                })
            })
            .collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), 1);
        }
    });
}
