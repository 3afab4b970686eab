// In-memory collections backing every endpoint.
// Data lives for the lifetime of the process and resets on restart.

pub mod seed;

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::models::application::Application;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::review::Review;

/// A record addressable by a numeric id.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> u64;
}

/// A lock-guarded list of records with a monotonic id counter.
/// Ids are never reused, even after a delete.
pub struct Collection<T: Record> {
    items: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            items: RwLock::new(items),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Snapshot of every record in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.items.read().await.iter().find(|r| r.id() == id).cloned()
    }

    /// Allocates the next id, builds the record with it and appends it.
    pub async fn insert(&self, build: impl FnOnce(u64) -> T) -> T {
        let mut items = self.items.write().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = build(id);
        items.push(record.clone());
        record
    }

    /// Like `insert`, but `check` sees the current records under the same
    /// write lock and may refuse the insert.
    pub async fn try_insert<E>(
        &self,
        check: impl FnOnce(&[T]) -> Result<(), E>,
        build: impl FnOnce(u64) -> T,
    ) -> Result<T, E> {
        let mut items = self.items.write().await;
        check(items.as_slice())?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = build(id);
        items.push(record.clone());
        Ok(record)
    }

    /// Applies `apply` to the record in place and returns the updated copy.
    /// The closure may reject the update; the record is left untouched then.
    pub async fn update<E>(
        &self,
        id: u64,
        apply: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut items = self.items.write().await;
        let record = items.iter_mut().find(|r| r.id() == id)?;
        let mut draft = record.clone();
        Some(apply(&mut draft).map(|()| {
            *record = draft.clone();
            draft
        }))
    }

    pub async fn remove(&self, id: u64) -> Option<T> {
        let mut items = self.items.write().await;
        let idx = items.iter().position(|r| r.id() == id)?;
        Some(items.remove(idx))
    }
}

/// All collections the API serves.
pub struct Store {
    pub jobs: Collection<Job>,
    pub candidates: Collection<Candidate>,
    pub reviews: Collection<Review>,
    pub applications: Collection<Application>,
}

impl Store {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            jobs: Collection::new(Vec::new()),
            candidates: Collection::new(Vec::new()),
            reviews: Collection::new(Vec::new()),
            applications: Collection::new(Vec::new()),
        }
    }

    /// Store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        Self {
            jobs: Collection::new(seed::jobs()),
            candidates: Collection::new(seed::candidates()),
            reviews: Collection::new(seed::reviews()),
            applications: Collection::new(Vec::new()),
        }
    }
}
