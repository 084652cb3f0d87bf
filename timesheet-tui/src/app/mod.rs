use std::sync::Arc;
use std::time::{Duration, Instant};

use throbber_widgets_tui::ThrobberState;
use time::{Date, OffsetDateTime};
use timesheet_core::domain::{
    models::Notification, FormConfig, FormSession, ReferenceData, RowUpdate, SubmitError,
    SubmitOutcome,
};
use tracing::warn;

mod edit;
mod navigation;
mod picker;
mod state;
pub use state::{
    Focus, PickerKind, PickerState, RowColumn, TextEditState, TextInput, TextTarget, Toast, View,
};

const TOAST_TTL: Duration = Duration::from_secs(5);

pub struct App {
    pub running: bool,
    pub is_loading: bool,
    pub submitting: bool,
    pub throbber_state: ThrobberState,
    pub current_view: View,
    pub status_message: Option<String>,

    /// Snapshot of the reference tables, shared with in-flight submissions.
    pub reference: Arc<ReferenceData>,
    pub session: FormSession,
    pub focus: Focus,

    pub picker: Option<PickerState>,
    pub text_edit: Option<TextEditState>,
    pub toasts: Vec<Toast>,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            running: true,
            is_loading: false,
            submitting: false,
            throbber_state: ThrobberState::default(),
            current_view: View::Form,
            status_message: None,
            reference: Arc::new(ReferenceData::default()),
            session: FormSession::new(config),
            focus: Focus::Employee,
            picker: None,
            text_edit: None,
            toasts: Vec::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Install a freshly loaded snapshot and re-derive every current
    /// selection against it.
    pub fn set_reference_data(&mut self, data: ReferenceData) {
        self.reference = Arc::new(data);
        self.is_loading = false;

        let employee = self.session.employee_name().to_string();
        if !employee.is_empty() {
            self.session.select_employee(employee, &self.reference);
        }
        let clients: Vec<_> = self
            .session
            .rows()
            .iter()
            .filter(|row| !row.client_name().is_empty())
            .map(|row| (row.id, row.client_name().to_string()))
            .collect();
        for (id, client) in clients {
            if let Err(e) = self
                .session
                .update_row(id, RowUpdate::Client(client), &self.reference)
            {
                warn!(error = %e, "could not re-resolve client after reload");
                self.set_status(e.to_string());
            }
        }
    }

    pub fn add_row(&mut self) {
        match self.session.add_row() {
            Ok(_) => {
                self.focus = Focus::Row {
                    index: self.session.rows().len() - 1,
                    column: RowColumn::Client,
                };
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn remove_last_row(&mut self) {
        if !self.session.remove_last_row() {
            self.set_status("At least one row is required");
            return;
        }
        let last = self.session.rows().len() - 1;
        if let Focus::Row { index, column } = self.focus {
            if index > last {
                self.focus = Focus::Row {
                    index: last,
                    column,
                };
            }
        }
    }

    /// Clear the value under the cursor. Cascade columns clear every
    /// level below them as well.
    pub fn clear_focused(&mut self) {
        let Focus::Row { column, .. } = self.focus else {
            return;
        };
        let Some(id) = self.focused_row_id() else {
            return;
        };
        let update = match column {
            RowColumn::Client => RowUpdate::Client(String::new()),
            RowColumn::Cascade(level) => RowUpdate::ClearCascade(level),
            RowColumn::Task => RowUpdate::Task(None),
            RowColumn::Hours => RowUpdate::Hours(String::new()),
            RowColumn::Remarks => RowUpdate::Remarks(String::new()),
        };
        if let Err(e) = self.session.update_row(id, update, &self.reference) {
            self.set_status(e.to_string());
        }
    }

    pub fn submission_finished(&mut self, result: Result<SubmitOutcome, SubmitError>) {
        self.submitting = false;
        match result {
            Ok(outcome) => {
                self.session.reset();
                self.focus = Focus::Employee;
                self.set_status(format!("Submitted {} entries", outcome.inserted));
            }
            Err(SubmitError::InFlight) => {}
            // The full list is in the validation notification.
            Err(SubmitError::Invalid(violations)) => self.set_status(format!(
                "Fix {} problem{} before submitting",
                violations.len(),
                if violations.len() == 1 { "" } else { "s" }
            )),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn push_toast(&mut self, notification: Notification) {
        self.toasts.push(Toast {
            notification,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn today() -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet_core::domain::{
        models::{Client, Employee, Severity},
        ValidationError, WeekEndingMode,
    };

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![Employee::new("A. Singh")
                .with_gpn(1001)
                .with_designation("Associate")
                .with_manager("Indirect Tax")],
            vec![Client::new("Acme").with_partner("P. Rao")],
        )
    }

    #[test]
    fn reloading_reference_data_refreshes_derived_fields() {
        let mut app = App::new(FormConfig::default());
        app.set_reference_data(ReferenceData::default());
        app.session.select_employee("A. Singh", &app.reference);
        assert!(app.session.employee_details().is_none());

        app.set_reference_data(reference());

        assert_eq!(
            app.session.employee_details().map(|d| d.vertical.as_str()),
            Some("Indirect Tax")
        );
    }

    #[test]
    fn the_last_row_cannot_be_removed() {
        let mut app = App::new(FormConfig::default());

        app.remove_last_row();

        assert_eq!(app.session.rows().len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("At least one row is required")
        );
    }

    #[test]
    fn removing_a_row_keeps_focus_in_bounds() {
        let mut app = App::new(FormConfig::default());
        app.add_row();
        assert_eq!(
            app.focus,
            Focus::Row {
                index: 1,
                column: RowColumn::Client
            }
        );

        app.remove_last_row();

        assert_eq!(
            app.focus,
            Focus::Row {
                index: 0,
                column: RowColumn::Client
            }
        );
    }

    #[test]
    fn single_row_forms_report_why_rows_cannot_be_added() {
        let config = FormConfig::builder()
            .week_ending(WeekEndingMode::Today)
            .multi_row(false)
            .build();
        let mut app = App::new(config);

        app.add_row();

        assert_eq!(app.session.rows().len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("this form only accepts a single row")
        );
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut app = App::new(FormConfig::default());
        app.set_reference_data(reference());
        app.session.select_employee("A. Singh", &app.reference);
        app.submitting = true;

        app.submission_finished(Ok(SubmitOutcome { inserted: 1 }));

        assert!(!app.submitting);
        assert_eq!(app.session.employee_name(), "");
        assert_eq!(app.focus, Focus::Employee);
    }

    #[test]
    fn failed_submission_keeps_the_form() {
        let mut app = App::new(FormConfig::default());
        app.set_reference_data(reference());
        app.session.select_employee("A. Singh", &app.reference);
        app.submitting = true;

        app.submission_finished(Err(SubmitError::Store("duplicate key value".into())));

        assert!(!app.submitting);
        assert_eq!(app.session.employee_name(), "A. Singh");
    }

    #[test]
    fn invalid_submission_points_at_the_notification() {
        let mut app = App::new(FormConfig::default());
        app.submitting = true;

        app.submission_finished(Err(SubmitError::Invalid(vec![
            ValidationError::EmployeeRequired,
            ValidationError::TaskRequired { row: 1 },
        ])));

        assert_eq!(
            app.status_message.as_deref(),
            Some("Fix 2 problems before submitting")
        );
    }

    #[test]
    fn toasts_expire() {
        let mut app = App::new(FormConfig::default());
        app.push_toast(Notification::destructive("Error", "Failed to load clients"));
        assert_eq!(app.toasts[0].notification.severity, Severity::Destructive);

        app.prune_toasts(Instant::now());
        assert_eq!(app.toasts.len(), 1);

        app.prune_toasts(Instant::now() + TOAST_TTL + Duration::from_secs(1));
        assert!(app.toasts.is_empty());
    }
}
