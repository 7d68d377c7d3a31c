//! In-Memory Health Record Reader
//!
//! Holds records per user in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::health::HealthRecord;
use crate::ports::{HealthRecordReader, RecordReaderError};

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct InMemoryHealthRecordReader {
    records: Arc<RwLock<HashMap<UserId, Vec<HealthRecord>>>>,
}

impl InMemoryHealthRecordReader {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all records of a user
    pub async fn set_records(&self, user_id: UserId, records: Vec<HealthRecord>) {
        self.records.write().await.insert(user_id, records);
    }

    /// Add or replace the record for its date, keeping one record per day
    pub async fn upsert(&self, user_id: UserId, record: HealthRecord) {
        let mut all = self.records.write().await;
        let records = all.entry(user_id).or_default();
        match records.iter_mut().find(|r| r.recorded_at == record.recorded_at) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Number of records held for a user
    pub async fn record_count(&self, user_id: &UserId) -> usize {
        self.records
            .read()
            .await
            .get(user_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl HealthRecordReader for InMemoryHealthRecordReader {
    async fn records_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<HealthRecord>, RecordReaderError> {
        Ok(self
            .records
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}
