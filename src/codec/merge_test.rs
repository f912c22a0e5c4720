use super::*;
use crate::bangs::{BangEntry, BangId};

fn entry(id: u64, url: &str, pos: i64) -> BangEntry {
    BangEntry::new(id, url, pos)
}

#[test]
fn test_shared_key_takes_imported_value() {
    let mut a = BangTable::new();
    a.insert("g", entry(1, "https://google.com?q=%s", 1));
    a.insert("w", entry(2, "https://old-wiki?q=%s", 2));

    let mut b = BangTable::new();
    b.insert("w", entry(5, "https://wiki.org?q=%s", 1));

    let merged = merge_import(&a, b.clone());

    assert_eq!(merged.get("w"), b.get("w"));
    assert_eq!(merged.get("g"), a.get("g"));
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_keys_only_in_imported_are_added() {
    let mut a = BangTable::new();
    a.insert("g", entry(1, "https://google.com?q=%s", 1));
    let mut b = BangTable::new();
    b.insert("yt", entry(7, "https://youtube.com?q=%s", 3));

    let merged = merge_import(&a, b);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.get("yt").unwrap().id, BangId::Numeric(7));
}

#[test]
fn test_merge_with_empty_sides() {
    let mut a = BangTable::new();
    a.insert("g", entry(1, "https://google.com?q=%s", 1));

    assert_eq!(merge_import(&a, BangTable::new()), a);
    assert_eq!(merge_import(&BangTable::new(), a.clone()), a);
}

#[test]
fn test_replace_policy_drops_current() {
    let mut a = BangTable::new();
    a.insert("g", entry(1, "https://google.com?q=%s", 1));
    let mut b = BangTable::new();
    b.insert("w", entry(5, "https://wiki.org?q=%s", 1));

    let merged = merge_with_policy(&a, b.clone(), MergePolicy::Replace);
    assert_eq!(merged, b);
}

#[test]
fn test_policy_deserializes_from_snake_case() {
    let policy: MergePolicy = serde_json::from_str("\"replace\"").unwrap();
    assert_eq!(policy, MergePolicy::Replace);
    assert_eq!(MergePolicy::default(), MergePolicy::Combine);
}
