use std::sync::Arc;

use timesheet_core::domain::ports::inbound::TimesheetService;
use tracing::debug;

use crate::app::App;

use super::action_queue::{Action, ActionTx};

/// Store calls run on spawned tasks and report back through the action
/// queue, so the UI keeps drawing while they are pending.
pub(super) fn run_action(
    action: Action,
    app: &mut App,
    service: &Arc<dyn TimesheetService>,
    action_tx: &ActionTx,
) {
    match action {
        Action::LoadReferenceData => {
            app.is_loading = true;
            let service = Arc::clone(service);
            let tx = action_tx.clone();
            tokio::spawn(async move {
                let load = service.load_reference_data().await;
                let _ = tx.send(Action::ReferenceDataLoaded(load));
            });
        }
        Action::ReferenceDataLoaded(load) => {
            app.set_reference_data(load.data);
        }
        Action::Submit => {
            if app.submitting {
                debug!("submit already pending");
                return;
            }
            app.submitting = true;
            let service = Arc::clone(service);
            let tx = action_tx.clone();
            let session = app.session.clone();
            let reference = Arc::clone(&app.reference);
            let today = App::today();
            tokio::spawn(async move {
                let result = service.submit(&session, &reference, today).await;
                let _ = tx.send(Action::SubmitFinished(result));
            });
        }
        Action::SubmitFinished(result) => {
            app.submission_finished(result);
        }
    }
}
