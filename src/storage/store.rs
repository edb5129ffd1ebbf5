use crate::allocator::Category;
use crate::storage::{CategoryNames, Record};
use log::warn;
use sled::Tree;
use std::path::Path;
use thiserror::Error;

// Records live in one tree per category, keyed by the big-endian sequence
// number, so the tree tail is always the highest issued identifier.
#[derive(Clone)]
pub struct RecordStore {
    db: sled::Db,
}

impl RecordStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(RecordStore {
            db: sled::open(path)?,
        })
    }

    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new()
            .temporary(true)
            .flush_every_ms(None)
            .open()?;

        Ok(RecordStore { db })
    }

    pub fn count(&self, category: Category) -> Result<usize, StoreError> {
        Ok(self.tree(category)?.len())
    }

    // An undecodable tail value counts as absent: the allocator then falls
    // back to the record count, same as for a malformed identifier.
    pub fn last_record(&self, category: Category) -> Result<Option<Record>, StoreError> {
        match self.tree(category)?.last()? {
            Some((key, value)) => match serde_json::from_slice(&value) {
                Ok(record) => Ok(Some(record)),
                Err(err) => {
                    warn!(
                        "undecodable record at key {:?} in category '{}': {}",
                        key, category, err
                    );

                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn get(&self, category: Category, number: u64) -> Result<Option<Record>, StoreError> {
        match self.tree(category)?.get(number.to_be_bytes())? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    pub fn records(&self, category: Category) -> Result<Vec<Record>, StoreError> {
        let mut records = Vec::new();

        for entry in self.tree(category)?.iter() {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(&value)?);
        }

        Ok(records)
    }

    // Mutation is reserved for the allocator's locked path.
    pub(crate) fn insert(
        &self,
        category: Category,
        number: u64,
        record: &Record,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_vec(record)?;

        self.tree(category)?.insert(number.to_be_bytes(), value)?;

        Ok(())
    }

    fn tree(&self, category: Category) -> sled::Result<Tree> {
        self.db.open_tree(CategoryNames::records(category.as_str()))
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
