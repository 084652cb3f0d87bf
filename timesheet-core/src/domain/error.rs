use thiserror::Error;
use time::Date;

use super::{models::RowId, CascadeLevel};

/// Errors raised by the outbound store adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("unauthorized")]
    Unauthorized,
    /// The store answered, but refused the request. Carries the store's own message.
    #[error("{0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("parsing error: {0}")]
    Parsing(String),
}

impl StoreError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Whether the store itself produced this error (as opposed to the
    /// request never reaching it, or the reply being unreadable).
    pub fn is_store_reported(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Rejected(_))
    }
}

/// Reference tables fetched once per form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ReferenceTable {
    #[strum(serialize = "employees")]
    Employees,
    #[strum(serialize = "clients")]
    Clients,
}

/// A reference table could not be loaded. Never fatal: the table is left empty.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load {table}: {source}")]
pub struct ReferenceLoadError {
    pub table: ReferenceTable,
    pub source: StoreError,
}

/// One violated form rule. Row numbers are 1-based, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Employee name is required")]
    EmployeeRequired,
    #[error("Employee \"{0}\" was not found")]
    UnknownEmployee(String),
    #[error("Week ending date is required")]
    WeekEndingRequired,
    #[error("Week ending date must be between {min} and {max}")]
    WeekEndingOutOfRange { min: Date, max: Date },
    #[error("Client name is required for row {row}")]
    ClientRequired { row: usize },
    #[error("Client \"{client}\" was not found for row {row}")]
    UnknownClient { row: usize, client: String },
    #[error("Task is required for row {row}")]
    TaskRequired { row: usize },
    #[error("Valid hours required for row {row}")]
    HoursInvalid { row: usize },
    #[error("Hours for row {row} must be at least 1 (fractional hours are dropped)")]
    HoursBelowWhole { row: usize },
    #[error("Remarks are required for \"Other Work\" in row {row}")]
    RemarksRequired { row: usize },
    #[error("{level} is required for row {row}")]
    CascadeIncomplete { row: usize, level: CascadeLevel },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    #[error("{value:?} is not a valid {level} for the current selection")]
    NotACandidate { level: CascadeLevel, value: String },
    #[error("the project catalog is not enabled for this form")]
    Disabled,
}

/// Errors from mutating a form session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("row {0} does not exist")]
    RowNotFound(RowId),
    #[error("this form only accepts a single row")]
    SingleRowForm,
    #[error(transparent)]
    Cascade(#[from] CascadeError),
}

/// Errors that can occur while submitting a timesheet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("validation failed: {}", super::summarize(.0))]
    Invalid(Vec<ValidationError>),
    #[error("a submission is already in progress")]
    InFlight,
    #[error("{0}")]
    Store(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        if err.is_store_reported() {
            Self::Store(err.to_string())
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}
