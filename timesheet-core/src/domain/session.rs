use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

use super::models::{EmployeeDetails, RowId, Task, TimesheetRow};
use super::{
    resolve_employee, CascadeCatalog, CascadeError, CascadeLevel, FormError, ReferenceData,
    RowSequence,
};

/// Where the week-ending date of submitted entries comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekEndingMode {
    /// The user picks a date; it is required.
    #[default]
    Picker,
    /// The date of submission is used.
    Today,
}

/// Which features a form session runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    pub week_ending: WeekEndingMode,
    pub multi_row: bool,
    /// Submit hours as typed instead of truncating them to whole hours.
    pub preserve_fractional_hours: bool,
    pub cascade: Option<Arc<CascadeCatalog>>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            week_ending: WeekEndingMode::Picker,
            multi_row: true,
            preserve_fractional_hours: false,
            cascade: None,
        }
    }
}

impl FormConfig {
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct FormConfigBuilder {
    config: FormConfig,
}

impl FormConfigBuilder {
    pub fn week_ending(mut self, mode: WeekEndingMode) -> Self {
        self.config.week_ending = mode;
        self
    }

    pub fn multi_row(mut self, multi_row: bool) -> Self {
        self.config.multi_row = multi_row;
        self
    }

    pub fn preserve_fractional_hours(mut self, preserve: bool) -> Self {
        self.config.preserve_fractional_hours = preserve;
        self
    }

    pub fn cascade(mut self, catalog: CascadeCatalog) -> Self {
        self.config.cascade = Some(Arc::new(catalog));
        self
    }

    pub fn build(self) -> FormConfig {
        self.config
    }
}

/// A change to a single field of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowUpdate {
    Client(String),
    Task(Option<Task>),
    Hours(String),
    Remarks(String),
    Cascade { level: CascadeLevel, value: String },
    ClearCascade(CascadeLevel),
}

/// State of one fill-in of the timesheet form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    config: FormConfig,
    employee_name: String,
    employee_details: Option<EmployeeDetails>,
    week_ending: Option<Date>,
    rows: RowSequence,
}

impl FormSession {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            employee_name: String::new(),
            employee_details: None,
            week_ending: None,
            rows: RowSequence::new(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn employee_details(&self) -> Option<&EmployeeDetails> {
        self.employee_details.as_ref()
    }

    pub fn week_ending(&self) -> Option<Date> {
        self.week_ending
    }

    pub fn rows(&self) -> &RowSequence {
        &self.rows
    }

    /// Select an employee and recompute the derived fields. An unknown name
    /// leaves no derived fields behind.
    pub fn select_employee(&mut self, name: impl Into<String>, reference: &ReferenceData) {
        let name = name.into();
        self.employee_details = resolve_employee(reference, &name);
        debug!(name = %name, matched = self.employee_details.is_some(), "employee selected");
        self.employee_name = name;
    }

    pub fn set_week_ending(&mut self, date: Option<Date>) {
        self.week_ending = date;
    }

    /// The date entries will be filed under, or `None` when the user still
    /// has to pick one.
    pub fn effective_week_ending(&self, today: Date) -> Option<Date> {
        match self.config.week_ending {
            WeekEndingMode::Picker => self.week_ending,
            WeekEndingMode::Today => Some(today),
        }
    }

    pub fn add_row(&mut self) -> Result<RowId, FormError> {
        if !self.config.multi_row {
            return Err(FormError::SingleRowForm);
        }
        Ok(self.rows.add_row())
    }

    /// Remove the final row. Returns false when only one row is left.
    pub fn remove_last_row(&mut self) -> bool {
        self.rows.remove_last_row().is_some()
    }

    pub fn update_row(
        &mut self,
        id: RowId,
        update: RowUpdate,
        reference: &ReferenceData,
    ) -> Result<(), FormError> {
        let catalog = self.config.cascade.clone();
        let row: &mut TimesheetRow = self.rows.get_mut(id)?;
        match update {
            RowUpdate::Client(account) => row.set_client(account, reference),
            RowUpdate::Task(task) => row.task = task,
            RowUpdate::Hours(hours) => row.hours = hours,
            RowUpdate::Remarks(remarks) => row.remarks = remarks,
            RowUpdate::Cascade { level, value } => {
                let catalog = catalog.ok_or(CascadeError::Disabled)?;
                row.cascade.select(level, &value, &catalog)?;
            }
            RowUpdate::ClearCascade(level) => row.cascade.clear(level),
        }
        Ok(())
    }

    /// Back to the initial state: no employee, no date, one empty row.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Client, Employee};
    use time::macros::date;

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![Employee::new("A. Singh")
                .with_gpn(1001)
                .with_designation("Associate")
                .with_manager("Indirect Tax")],
            vec![
                Client::new("Acme").with_partner("P. Rao").with_location("Mumbai"),
                Client::new("Beta").with_partner("K. Shah").with_complexity("Low"),
            ],
        )
    }

    fn first_row(session: &FormSession) -> RowId {
        session.rows().as_slice()[0].id
    }

    #[test]
    fn selecting_an_unknown_employee_clears_derived_fields() {
        let reference = reference();
        let mut session = FormSession::new(FormConfig::default());

        session.select_employee("A. Singh", &reference);
        assert!(session.employee_details().is_some());

        session.select_employee("Someone Else", &reference);
        assert_eq!(session.employee_name(), "Someone Else");
        assert_eq!(session.employee_details(), None);
    }

    #[test]
    fn changing_client_replaces_all_derived_fields() {
        let reference = reference();
        let mut session = FormSession::new(FormConfig::default());
        let id = first_row(&session);

        session
            .update_row(id, RowUpdate::Client("Acme".into()), &reference)
            .unwrap();
        session
            .update_row(id, RowUpdate::Client("Beta".into()), &reference)
            .unwrap();

        let row = session.rows().get(id).unwrap();
        let details = row.client_details().unwrap();
        assert_eq!(row.client_name(), "Beta");
        assert_eq!(details.partner, "K. Shah");
        assert_eq!(details.complexity, "Low");
        assert_eq!(details.location, "");

        session
            .update_row(id, RowUpdate::Client("Gamma".into()), &reference)
            .unwrap();
        assert_eq!(session.rows().get(id).unwrap().client_details(), None);
    }

    #[test]
    fn update_leaves_other_fields_untouched() {
        let reference = reference();
        let mut session = FormSession::new(FormConfig::default());
        let id = first_row(&session);
        session
            .update_row(id, RowUpdate::Task(Some(Task::Automation)), &reference)
            .unwrap();

        session
            .update_row(id, RowUpdate::Hours("2.5".into()), &reference)
            .unwrap();

        let row = session.rows().get(id).unwrap();
        assert_eq!(row.task, Some(Task::Automation));
        assert_eq!(row.hours, "2.5");
        assert_eq!(row.remarks, "");
    }

    #[test]
    fn updating_a_missing_row_fails() {
        let reference = reference();
        let mut session = FormSession::new(FormConfig::default());
        let missing = RowId::new(42);

        let err = session
            .update_row(missing, RowUpdate::Hours("1".into()), &reference)
            .unwrap_err();

        assert_eq!(err, FormError::RowNotFound(missing));
    }

    #[test]
    fn single_row_forms_reject_new_rows() {
        let config = FormConfig::builder().multi_row(false).build();
        let mut session = FormSession::new(config);

        assert_eq!(session.add_row(), Err(FormError::SingleRowForm));
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn cascade_updates_require_a_catalog() {
        let reference = reference();
        let mut session = FormSession::new(FormConfig::default());
        let id = first_row(&session);

        let err = session
            .update_row(
                id,
                RowUpdate::Cascade {
                    level: CascadeLevel::Project,
                    value: "Anything".into(),
                },
                &reference,
            )
            .unwrap_err();

        assert_eq!(err, FormError::Cascade(CascadeError::Disabled));
    }

    #[test]
    fn today_mode_ignores_the_picked_date() {
        let config = FormConfig::builder()
            .week_ending(WeekEndingMode::Today)
            .build();
        let mut session = FormSession::new(config);
        session.set_week_ending(Some(date!(2024 - 01 - 05)));

        assert_eq!(
            session.effective_week_ending(date!(2024 - 03 - 15)),
            Some(date!(2024 - 03 - 15))
        );
    }

    #[test]
    fn reset_restores_the_initial_state_but_keeps_config() {
        let reference = reference();
        let config = FormConfig::builder().preserve_fractional_hours(true).build();
        let mut session = FormSession::new(config.clone());
        session.select_employee("A. Singh", &reference);
        session.set_week_ending(Some(date!(2024 - 01 - 05)));
        session.add_row().unwrap();

        session.reset();

        assert_eq!(session, FormSession::new(config));
    }
}
