use product_store::{Change, StoreActor, StoreClient, StoreError, StoreHandle, StoreItem};
use std::collections::HashSet;
use std::num::NonZeroUsize;

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: u64,
    owner: usize,
}

impl StoreItem for Entry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, thiserror::Error)]
#[error("ledger unavailable: {0}")]
struct LedgerError(String);

struct Ledger {
    inner: StoreClient<Entry>,
}

impl StoreHandle<Entry> for Ledger {
    type Error = LedgerError;

    fn inner(&self) -> &StoreClient<Entry> {
        &self.inner
    }

    fn map_error(e: StoreError) -> LedgerError {
        LedgerError(e.to_string())
    }
}

/// Concurrent appends from many tasks: every item lands exactly once and every
/// mutation gets its own revision number.
#[tokio::test]
async fn test_concurrent_appends_are_serialized() {
    let (actor, client) = StoreActor::<Entry>::new(NonZeroUsize::new(4).unwrap());
    let handle = tokio::spawn(actor.run());

    let mut tasks = vec![];
    for owner in 0..10 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut revisions = vec![];
            for n in 0..5 {
                let id = (owner * 100 + n) as u64;
                revisions.push(client.append(Entry { id, owner }).await.unwrap().number);
            }
            revisions
        }));
    }

    let mut all_revisions = HashSet::new();
    for task in tasks {
        for number in task.await.unwrap() {
            assert!(all_revisions.insert(number), "revision {number} issued twice");
        }
    }
    assert_eq!(all_revisions.len(), 50);
    assert_eq!(all_revisions.iter().max(), Some(&50));

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 50);

    // per-owner order is preserved even though owners interleave
    for owner in 0..10 {
        let ids: Vec<u64> = snapshot
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_handle_wrapper_reads_through_inner_client() {
    let (actor, client) = StoreActor::<Entry>::new(NonZeroUsize::new(8).unwrap());
    tokio::spawn(actor.run());
    let ledger = Ledger {
        inner: client.clone(),
    };

    let mut changes = ledger.subscribe().await.unwrap();
    client
        .replace_all(vec![Entry { id: 1, owner: 0 }, Entry { id: 2, owner: 0 }])
        .await
        .unwrap();

    changes.changed().await.unwrap();
    assert_eq!(changes.borrow().change, Change::Replaced);
    assert_eq!(ledger.len().await.unwrap(), 2);
    assert_eq!(ledger.snapshot().await.unwrap()[1].id, 2);
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = StoreActor::<Entry>::new(NonZeroUsize::new(8).unwrap());
    drop(actor);

    let result = client.append(Entry { id: 1, owner: 0 }).await;
    assert_eq!(result, Err(StoreError::ActorClosed));

    let ledger = Ledger { inner: client };
    let err = ledger.snapshot().await.unwrap_err();
    assert!(err.to_string().contains("Store actor closed"));
}

#[tokio::test]
async fn test_subscription_ends_when_store_shuts_down() {
    let (actor, client) = StoreActor::<Entry>::new(NonZeroUsize::new(8).unwrap());
    let handle = tokio::spawn(actor.run());

    let mut changes = client.subscribe().await.unwrap();
    drop(client);
    handle.await.unwrap();

    assert!(changes.changed().await.is_err());
}
