use crate::domain::{resolve_client, CascadeSelection, ReferenceData};

use super::{ClientDetails, RowId, Task};

/// One line of work on the form.
///
/// `client_details` is always the projection of `client_name` against the
/// reference data it was last set with; the only way to change the client is
/// [`TimesheetRow::set_client`], which replaces both together.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetRow {
    pub id: RowId,
    client_name: String,
    client_details: Option<ClientDetails>,
    pub task: Option<Task>,
    /// Hours exactly as typed; parsed during validation and submission.
    pub hours: String,
    pub remarks: String,
    pub cascade: CascadeSelection,
}

impl TimesheetRow {
    pub fn empty(id: RowId) -> Self {
        Self {
            id,
            client_name: String::new(),
            client_details: None,
            task: None,
            hours: String::new(),
            remarks: String::new(),
            cascade: CascadeSelection::default(),
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_details(&self) -> Option<&ClientDetails> {
        self.client_details.as_ref()
    }

    pub fn set_client(&mut self, account: impl Into<String>, reference: &ReferenceData) {
        let account = account.into();
        self.client_details = resolve_client(reference, &account);
        self.client_name = account;
    }

    /// Whether the user has touched any field of this row.
    pub fn is_blank(&self) -> bool {
        self.client_name.is_empty()
            && self.task.is_none()
            && self.hours.trim().is_empty()
            && self.remarks.trim().is_empty()
            && self.cascade.is_empty()
    }
}
