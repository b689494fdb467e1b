use crate::database::DbError;
use crate::database::global_record::GlobalRecord;
use crate::database::record_store::RecordStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Record store kept in memory, ordered by id.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<GlobalRecord>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new(mut records: Vec<GlobalRecord>) -> Self {
        records.sort_by_key(|r| r.id);
        Self {
            records: RwLock::new(records),
        }
    }
}

// Test-only helpers; the store is read-only through `RecordStore`.
#[cfg(test)]
impl MemoryRecordStore {
    /// Insert or replace the record with the same id.
    async fn upsert(&self, record: GlobalRecord) {
        let mut records = self.records.write().await;
        match records.binary_search_by_key(&record.id, |r| r.id) {
            Ok(i) => records[i] = record,
            Err(i) => records.insert(i, record),
        }
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find_by_keyword(
        &self,
        keyword: &str,
        limit: i64,
    ) -> Result<Vec<GlobalRecord>, DbError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.matches_keyword(keyword))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
