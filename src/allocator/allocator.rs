use crate::allocator::{Category, Identifier};
use crate::storage::{Record, RecordDraft, RecordStore, StoreError};
use dashmap::DashMap;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::timeout;

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Allocates the next sequential identifier for a category and inserts the
/// record under one category-scoped lock, so a creation either fully
/// succeeds with its identifier attached or leaves nothing behind.
pub struct IdAllocator {
    store: RecordStore,
    locks: Arc<DashMap<Category, Arc<Mutex<()>>>>,
    lock_timeout: Duration,
}

impl IdAllocator {
    pub fn new(store: RecordStore) -> Self {
        IdAllocator::with_lock_timeout(store, DEFAULT_LOCK_TIMEOUT)
    }

    pub fn with_lock_timeout(store: RecordStore, lock_timeout: Duration) -> Self {
        IdAllocator {
            store,
            locks: Arc::new(DashMap::new()),
            lock_timeout,
        }
    }

    pub async fn create(
        &self,
        category: Category,
        draft: RecordDraft,
    ) -> Result<Record, AllocateError> {
        let lock = self.category_lock(category);

        let _guard = timeout(self.lock_timeout, lock.lock())
            .await
            .map_err(|_| AllocateError::LockTimeout(category))?;

        let number = self.next_number(category)?;
        let identifier = Identifier::format(category, number);

        let record = Record::new(identifier, draft);

        self.store.insert(category, number, &record)?;

        debug!("allocated {} in category '{}'", record.identifier, category);

        Ok(record)
    }

    // The counter is derived from the persisted tail on every call, never
    // cached across calls.
    fn next_number(&self, category: Category) -> Result<u64, StoreError> {
        if let Some(last) = self.store.last_record(category)? {
            if let Some(number) = Identifier::parse(category, last.identifier.as_str()) {
                return Ok(number + 1);
            }

            warn!(
                "malformed identifier '{}' in category '{}', falling back to record count",
                last.identifier, category
            );
        }

        Ok(self.store.count(category)? as u64 + 1)
    }

    fn category_lock(&self, category: Category) -> Arc<Mutex<()>> {
        self.locks.entry(category).or_default().value().clone()
    }
}

impl Clone for IdAllocator {
    fn clone(&self) -> Self {
        IdAllocator {
            store: self.store.clone(),
            locks: Arc::clone(&self.locks),
            lock_timeout: self.lock_timeout,
        }
    }
}

#[derive(Error, Debug)]
pub enum AllocateError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
    #[error("lock timeout in category '{0}'")]
    LockTimeout(Category),
}
