use timesheet_core::domain::{ReferenceLoad, SubmitError, SubmitOutcome};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    LoadReferenceData,
    ReferenceDataLoaded(ReferenceLoad),
    Submit,
    SubmitFinished(Result<SubmitOutcome, SubmitError>),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
