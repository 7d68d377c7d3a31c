//! HealthRecordReader port - Read access to a user's record history.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::health::HealthRecord;

/// Errors that can occur when loading records
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordReaderError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the historical records of a user.
///
/// Records may be returned in any order and need not be pre-filtered; the
/// analysis keeps only those carrying both mood and pressure.
#[async_trait]
pub trait HealthRecordReader: Send + Sync {
    /// Load all records for a user
    ///
    /// # Errors
    /// Returns `RecordReaderError` if the store cannot be read
    async fn records_for_user(&self, user_id: &UserId)
        -> Result<Vec<HealthRecord>, RecordReaderError>;
}
