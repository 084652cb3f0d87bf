use async_trait::async_trait;
use time::Date;

use crate::domain::{FormSession, ReferenceData, ReferenceLoad, SubmitError, SubmitOutcome};

/// Inbound port for the timesheet form.
///
/// User-facing notifications are raised by the implementation, so callers
/// only need the return values to update their own state.
#[async_trait]
pub trait TimesheetService: Send + Sync + 'static {
    /// Fetch both reference tables. A failed table is reported and left
    /// empty; the other one is still returned.
    async fn load_reference_data(&self) -> ReferenceLoad;

    /// Validate the session and persist one record per row in a single
    /// batch. `today` is used when the form files entries under the date of
    /// submission.
    ///
    /// Only one submission may be in flight at a time; a concurrent call
    /// fails with [`SubmitError::InFlight`].
    async fn submit(
        &self,
        session: &FormSession,
        reference: &ReferenceData,
        today: Date,
    ) -> Result<SubmitOutcome, SubmitError>;
}
