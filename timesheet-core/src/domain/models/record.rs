use time::Date;

/// One persisted timesheet line, as handed to the store.
///
/// Employee and client fields are copied from the reference data at the
/// moment of submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetRecord {
    pub employee_name: String,
    pub employee_gpn: Option<i64>,
    pub designation: String,
    pub vertical: String,
    pub client_name: String,
    pub partner: String,
    pub cad_manager: String,
    pub complexity: String,
    pub location: String,
    pub task: String,
    pub hours: f64,
    pub remarks: String,
    pub week_ending: Date,
    /// "<Month> <Year>" label of `week_ending`, e.g. "October 2026".
    pub month: String,
    pub project: Option<ProjectPath>,
}

/// The four cascade selections of a row, when the project catalog is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    pub project: String,
    pub sub_project: String,
    pub task: String,
    pub category: String,
}
