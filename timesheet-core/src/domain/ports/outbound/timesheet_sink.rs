use async_trait::async_trait;

use crate::domain::{models::TimesheetRecord, StoreError};

/// Outbound port for persisting submitted timesheet lines.
#[async_trait]
pub trait TimesheetSink: Send + Sync + 'static {
    /// Insert all records as one batch. Either every record is stored or
    /// the call fails.
    async fn insert_records(&self, records: &[TimesheetRecord]) -> Result<(), StoreError>;
}
