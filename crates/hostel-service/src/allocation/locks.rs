//! Per-room critical sections.

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use hostel_entity::room::RoomKey;

type LockMap = DashMap<RoomKey, Arc<Mutex<()>>>;

/// Serialises mutations that touch the same room.
///
/// Entries are created on first use and removed again once no task holds
/// or waits on them, so keys for rooms that do not exist never accumulate.
#[derive(Debug, Clone, Default)]
pub struct RoomLocks {
    locks: Arc<LockMap>,
}

impl RoomLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to one room.
    pub async fn lock(&self, key: &RoomKey) -> RoomGuard {
        self.lock_many([key.clone()]).await
    }

    /// Waits for exclusive access to several rooms.
    ///
    /// Keys are deduplicated and locked in ascending order, so two callers
    /// locking overlapping sets cannot deadlock.
    pub async fn lock_many(&self, keys: impl IntoIterator<Item = RoomKey>) -> RoomGuard {
        let ordered: BTreeSet<RoomKey> = keys.into_iter().collect();
        let mut held = Vec::with_capacity(ordered.len());
        for key in ordered {
            let mutex = Arc::clone(self.locks.entry(key.clone()).or_default().value());
            held.push((key, mutex.lock_owned().await));
        }
        RoomGuard {
            locks: Arc::clone(&self.locks),
            held,
        }
    }

    /// Number of rooms with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no room currently has a lock entry.
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one or more rooms; released on drop.
#[derive(Debug)]
pub struct RoomGuard {
    locks: Arc<LockMap>,
    held: Vec<(RoomKey, OwnedMutexGuard<()>)>,
}

#[cfg(test)]
impl RoomGuard {
    /// Keys of the rooms held by this guard, in lock order.
    fn keys(&self) -> impl Iterator<Item = &RoomKey> {
        self.held.iter().map(|(key, _)| key)
    }
}

impl Drop for RoomGuard {
    fn drop(&mut self) {
        for (key, guard) in self.held.drain(..).rev() {
            drop(guard);
            self.locks
                .remove_if(&key, |_, mutex| Arc::strong_count(mutex) == 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use hostel_entity::room::Gender;

    #[tokio::test]
    async fn test_entries_are_removed_after_use() {
        let locks = RoomLocks::new();
        let key = RoomKey::new(Gender::Male, "A", 1);
        {
            let _guard = locks.lock(&key).await;
            assert_eq!(locks.len(), 1);
        }
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn test_lock_many_orders_and_dedups() {
        let locks = RoomLocks::new();
        let a = RoomKey::new(Gender::Male, "A", 1);
        let b = RoomKey::new(Gender::Female, "A", 1);
        let guard = locks.lock_many([b.clone(), a.clone(), a.clone()]).await;
        let keys: Vec<&RoomKey> = guard.keys().collect();
        assert_eq!(keys, vec![&a, &b]);
    }

    #[tokio::test]
    async fn test_same_room_is_exclusive() {
        let locks = RoomLocks::new();
        let key = RoomKey::new(Gender::Male, "A", 1);
        let guard = locks.lock(&key).await;

        let waiter = {
            let locks = locks.clone();
            let key = key.clone();
            tokio::spawn(async move {
                let _g = locks.lock(&key).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.unwrap();
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn test_other_rooms_do_not_block() {
        let locks = RoomLocks::new();
        let _held = locks.lock(&RoomKey::new(Gender::Male, "A", 1)).await;
        let other = tokio::time::timeout(
            Duration::from_millis(100),
            locks.lock(&RoomKey::new(Gender::Male, "A", 2)),
        )
        .await;
        assert!(other.is_ok());
    }
}
