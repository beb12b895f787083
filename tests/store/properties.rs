//! Invariants over arbitrary drafts and inventories.

use asset_tracker::{AssetStore, Draft, Filter, StoreError};
use proptest::prelude::*;

use crate::support::store;

fn blank_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

fn named_draft() -> impl Strategy<Value = Draft> {
    (
        "[A-Za-z0-9][A-Za-z0-9 ,-]{0,15}",
        prop_oneof![Just(""), Just("IT"), Just("Furniture")],
        prop_oneof![Just(""), Just("Active"), Just("Retired")],
        "[a-z ]{0,10}",
        "[0-9.a-z-]{0,6}",
    )
        .prop_map(|(name, category, status, location, value)| {
            Draft::new(name)
                .category(category)
                .status(status)
                .location(location)
                .current_value(value)
        })
}

fn filled_store(drafts: Vec<Draft>) -> AssetStore {
    let mut store = store();
    for draft in drafts {
        store.create(draft).unwrap();
    }
    store
}

proptest! {
    #[test]
    fn named_drafts_are_admitted_and_listed(draft in named_draft()) {
        let mut store = store();
        let asset = store.create(draft).unwrap();

        prop_assert!(store.list().iter().any(|a| a.id == asset.id));
        prop_assert!(asset.current_value.is_finite());
        prop_assert!(asset.current_value >= 0.0);
        prop_assert!(!asset.status.is_empty());
    }

    #[test]
    fn blank_names_are_always_rejected(
        existing in proptest::collection::vec(named_draft(), 0..5),
        name in blank_name(),
        category in "[A-Za-z]{0,8}",
    ) {
        let mut store = filled_store(existing);
        let before: Vec<_> = store.list().into_iter().cloned().collect();

        let err = store.create(Draft::new(name.clone()).category(category)).unwrap_err();
        let is_name_failure = matches!(err, StoreError::ValidationFailed { field: "name", .. });
        prop_assert!(is_name_failure);

        if let Some(first) = before.first() {
            prop_assert!(store.update(first.id, Draft::new(name)).is_err());
        }

        let after: Vec<_> = store.list().into_iter().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn empty_filter_is_the_identity(drafts in proptest::collection::vec(named_draft(), 0..12)) {
        let store = filled_store(drafts);
        prop_assert_eq!(store.query(&Filter::all()), store.list());
    }

    #[test]
    fn ids_stay_unique(drafts in proptest::collection::vec(named_draft(), 1..20), deletes in 0usize..5) {
        let mut store = filled_store(drafts);
        let doomed: Vec<u64> = store.iter().take(deletes).map(|a| a.id).collect();
        for id in doomed {
            prop_assert!(store.delete(id));
            prop_assert!(!store.delete(id));
        }
        store.create(Draft::new("Late arrival")).unwrap();

        let mut ids: Vec<u64> = store.iter().map(|a| a.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn csv_has_one_line_per_asset(drafts in proptest::collection::vec(named_draft(), 0..12)) {
        let store = filled_store(drafts);
        let csv = store.export_csv(&Filter::all());
        prop_assert_eq!(csv.lines().count(), store.len() + 1);
    }
}
