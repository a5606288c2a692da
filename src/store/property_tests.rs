//! Property-Based Tests for the Store Module
//!
//! Uses proptest against `MemoryKvStore`, driving the async API with
//! `tokio_test::block_on`.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashSet};
use tokio_test::block_on;

use crate::store::{KvStore, ListOptions, MemoryKvStore};

// == Strategies ==
/// Generates valid store keys
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,24}"
}

/// Generates arbitrary JSON values a few levels deep
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,32}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn seeded(keys: &BTreeSet<String>) -> MemoryKvStore {
    let store = MemoryKvStore::new("prop");
    block_on(async {
        for key in keys {
            store.put(key, &json!(key), None).await.unwrap();
        }
    });
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A key that was never written reads as absent.
    #[test]
    fn prop_unwritten_key_is_absent(
        written in prop::collection::btree_set(valid_key_strategy(), 0..20),
        probe in valid_key_strategy()
    ) {
        prop_assume!(!written.contains(&probe));
        let store = seeded(&written);

        prop_assert_eq!(block_on(store.get(&probe)).unwrap(), None);
    }

    // Put followed by Get returns a deep-equal value.
    #[test]
    fn prop_roundtrip_storage(
        key in valid_key_strategy(),
        value in json_value_strategy(),
        ttl in prop::option::of(60u64..86_400)
    ) {
        let store = MemoryKvStore::new("prop");

        block_on(store.put(&key, &value, ttl)).unwrap();
        let retrieved = block_on(store.get(&key)).unwrap();

        prop_assert_eq!(retrieved, Some(value));
    }

    // Deleting an existing key makes it absent; deleting again reports nothing removed.
    #[test]
    fn prop_delete_removes_entry(key in valid_key_strategy(), value in json_value_strategy()) {
        let store = MemoryKvStore::new("prop");

        block_on(store.put(&key, &value, None)).unwrap();
        prop_assert!(block_on(store.delete(&key)).unwrap());
        prop_assert_eq!(block_on(store.get(&key)).unwrap(), None);
        prop_assert!(!block_on(store.delete(&key)).unwrap());
    }

    // A page never exceeds the limit and only carries matching keys.
    #[test]
    fn prop_list_respects_limit_and_prefix(
        keys in prop::collection::btree_set(valid_key_strategy(), 0..60),
        prefix in "[a-z0-9]{0,2}",
        limit in 1usize..20
    ) {
        let store = seeded(&keys);

        let page = block_on(store.list(ListOptions::new(limit).with_prefix(prefix.clone()))).unwrap();

        prop_assert!(page.keys.len() <= limit);
        for key in &page.keys {
            prop_assert!(key.name.starts_with(&prefix), "{} lacks prefix {}", key.name, prefix);
        }
        if page.list_complete {
            prop_assert!(page.cursor.is_none());
        } else {
            prop_assert!(page.cursor.is_some());
        }
    }

    // Following cursors terminates and yields exactly the matching key set once.
    #[test]
    fn prop_cursor_chain_covers_all_keys(
        keys in prop::collection::btree_set(valid_key_strategy(), 0..80),
        prefix in "[a-z0-9]{0,1}",
        limit in 1usize..10
    ) {
        let store = seeded(&keys);
        let expected: Vec<String> = keys
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();

        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;
        loop {
            let mut options = ListOptions::new(limit).with_prefix(prefix.clone());
            options.cursor = cursor.take();
            let page = block_on(store.list(options)).unwrap();
            seen.extend(page.keys.into_iter().map(|k| k.name));
            pages += 1;
            prop_assert!(pages <= keys.len() + 1, "cursor chain did not terminate");

            if page.list_complete {
                break;
            }
            cursor = page.cursor;
        }

        let unique: HashSet<&String> = seen.iter().collect();
        prop_assert_eq!(unique.len(), seen.len(), "duplicate keys across pages");
        prop_assert_eq!(seen, expected);
    }
}
