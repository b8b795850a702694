//! Property-Based Tests for the Catalog Service
//!
//! Uses proptest to verify the name-uniqueness property over arbitrary
//! create sequences.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::cache::MemoryCache;
use crate::error::CatalogError;
use crate::models::ProductDraft;
use crate::service::CatalogService;
use crate::store::{CatalogStore, MemoryStore};

// == Test Configuration ==
const TEST_TTL: u64 = 300;

// == Strategies ==
/// Generates product names from a small alphabet so collisions are common
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,3}".prop_map(|s| s)
}

/// Outcome of one create call, recorded for assertion outside the runtime
#[derive(Debug)]
enum CreateOutcome {
    Created,
    Duplicate,
    Other,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of create calls, no two live products ever share a
    // name: the duplicate attempt fails and leaves the store unchanged.
    #[test]
    fn prop_name_uniqueness(names in prop::collection::vec(name_strategy(), 1..20)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let (outcomes, live) = runtime.block_on(async {
            let store = Arc::new(MemoryStore::new());
            let service =
                CatalogService::new(store.clone(), Arc::new(MemoryCache::new()), TEST_TTL);

            let mut outcomes = Vec::new();
            for name in &names {
                let outcome = match service
                    .create(ProductDraft::new(name.clone(), 1.0, "desc"))
                    .await
                {
                    Ok(_) => CreateOutcome::Created,
                    Err(CatalogError::Duplicate(_)) => CreateOutcome::Duplicate,
                    Err(_) => CreateOutcome::Other,
                };
                outcomes.push(outcome);
            }

            let live: Vec<String> = store
                .list_all()
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect();
            (outcomes, live)
        });

        // Exactly the first create of each name succeeds
        let mut seen: HashSet<String> = HashSet::new();
        for (name, outcome) in names.iter().zip(&outcomes) {
            if seen.insert(name.clone()) {
                prop_assert!(
                    matches!(outcome, CreateOutcome::Created),
                    "first create of '{}' should succeed, got {:?}",
                    name,
                    outcome
                );
            } else {
                prop_assert!(
                    matches!(outcome, CreateOutcome::Duplicate),
                    "repeat create of '{}' should be a duplicate, got {:?}",
                    name,
                    outcome
                );
            }
        }

        // The store holds exactly the distinct names, each once
        let live_set: HashSet<String> = live.iter().cloned().collect();
        prop_assert_eq!(live.len(), live_set.len(), "no two live products share a name");
        prop_assert_eq!(live_set, seen);
    }
}
