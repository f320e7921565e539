//! Storage collaborator boundaries
//!
//! Persistence of candidate records and of the uploaded document blob is
//! entirely the caller's concern; the pipeline only hands over values. These
//! traits define that boundary, and [`MemoryCandidateStore`] provides the
//! in-memory implementation used by tests.

use crate::candidate::CandidateRecord;
use crate::error::{CvExtractError, Result};
use chrono::Utc;
use std::collections::BTreeMap;

/// Persistent storage of candidate records, keyed by identifier.
pub trait CandidateStore: Send + Sync {
    /// Insert a new record, assigning and returning its identifier.
    ///
    /// # Errors
    /// Returns an error if the record cannot be persisted.
    fn insert(&mut self, record: CandidateRecord) -> Result<u64>;

    /// Fetch a record by identifier.
    ///
    /// # Errors
    /// Returns [`CvExtractError::Store`] if no record has that identifier.
    fn get(&self, id: u64) -> Result<CandidateRecord>;

    /// Replace an existing record; refreshes `last_updated`.
    ///
    /// # Errors
    /// Returns [`CvExtractError::Store`] if no record has that identifier.
    fn update(&mut self, record: CandidateRecord) -> Result<()>;

    /// Delete a record by identifier.
    ///
    /// # Errors
    /// Returns [`CvExtractError::Store`] if no record has that identifier.
    fn delete(&mut self, id: u64) -> Result<()>;

    /// All records in insertion order.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn list(&self) -> Result<Vec<CandidateRecord>>;
}

/// Storage of the uploaded document blob, keyed by stored filename.
///
/// Deleting a candidate record pairs with removing its blob; the pairing is
/// the caller's responsibility, not the store's.
pub trait BlobStore: Send + Sync {
    /// Store document bytes under a filename.
    ///
    /// # Errors
    /// Returns an error if the bytes cannot be written.
    fn put(&mut self, filename: &str, data: &[u8]) -> Result<()>;

    /// Retrieve document bytes by filename.
    ///
    /// # Errors
    /// Returns [`CvExtractError::Store`] if no blob has that filename.
    fn get(&self, filename: &str) -> Result<Vec<u8>>;

    /// Remove a blob by filename. Removing an absent blob is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be modified.
    fn remove(&mut self, filename: &str) -> Result<()>;
}

/// In-memory candidate store.
///
/// Reference implementation of [`CandidateStore`] for tests and for callers
/// that do not need durability.
#[derive(Debug, Default)]
pub struct MemoryCandidateStore {
    records: BTreeMap<u64, CandidateRecord>,
    next_id: u64,
}

impl MemoryCandidateStore {
    /// Create an empty store.
    #[inline]
    #[must_use = "constructors return a new instance"]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CandidateStore for MemoryCandidateStore {
    fn insert(&mut self, mut record: CandidateRecord) -> Result<u64> {
        self.next_id += 1;
        record.id = self.next_id;
        self.records.insert(self.next_id, record);
        Ok(self.next_id)
    }

    fn get(&self, id: u64) -> Result<CandidateRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| CvExtractError::Store(format!("no candidate with id {id}")))
    }

    fn update(&mut self, mut record: CandidateRecord) -> Result<()> {
        let id = record.id;
        if !self.records.contains_key(&id) {
            return Err(CvExtractError::Store(format!("no candidate with id {id}")));
        }
        record.last_updated = Utc::now();
        self.records.insert(id, record);
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CvExtractError::Store(format!("no candidate with id {id}")))
    }

    fn list(&self) -> Result<Vec<CandidateRecord>> {
        Ok(self.records.values().cloned().collect())
    }
}
