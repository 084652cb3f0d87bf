use time::{macros::date, Date};

use super::models::TimesheetRow;
use super::{FormConfig, FormSession, ValidationError, WeekEndingMode};

/// Earliest week-ending date the form accepts.
pub const MIN_WEEK_ENDING: Date = date!(1980 - 01 - 01);
/// Latest week-ending date the form accepts.
pub const MAX_WEEK_ENDING: Date = date!(2050 - 12 - 31);

/// Check every rule against the whole session and return all violations,
/// in form order. An empty list means the session can be submitted.
pub fn validate(session: &FormSession) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let employee = session.employee_name();
    if employee.is_empty() {
        errors.push(ValidationError::EmployeeRequired);
    } else if session.employee_details().is_none() {
        errors.push(ValidationError::UnknownEmployee(employee.to_string()));
    }

    if session.config().week_ending == WeekEndingMode::Picker {
        match session.week_ending() {
            None => errors.push(ValidationError::WeekEndingRequired),
            Some(date) if !(MIN_WEEK_ENDING..=MAX_WEEK_ENDING).contains(&date) => {
                errors.push(ValidationError::WeekEndingOutOfRange {
                    min: MIN_WEEK_ENDING,
                    max: MAX_WEEK_ENDING,
                })
            }
            Some(_) => {}
        }
    }

    let config = session.config();
    for (index, row) in session.rows().iter().enumerate() {
        validate_row(index + 1, row, config, &mut errors);
    }

    errors
}

fn validate_row(
    row_number: usize,
    row: &TimesheetRow,
    config: &FormConfig,
    errors: &mut Vec<ValidationError>,
) {
    if row.client_name().is_empty() {
        errors.push(ValidationError::ClientRequired { row: row_number });
    } else if row.client_details().is_none() {
        errors.push(ValidationError::UnknownClient {
            row: row_number,
            client: row.client_name().to_string(),
        });
    }

    if config.cascade.is_some() {
        if let Some(level) = row.cascade.first_missing() {
            errors.push(ValidationError::CascadeIncomplete {
                row: row_number,
                level,
            });
        }
    }

    if row.task.is_none() {
        errors.push(ValidationError::TaskRequired { row: row_number });
    }

    match parse_hours(&row.hours) {
        None => errors.push(ValidationError::HoursInvalid { row: row_number }),
        // Truncated submissions must still be positive.
        Some(hours) if !config.preserve_fractional_hours && hours.trunc() <= 0.0 => {
            errors.push(ValidationError::HoursBelowWhole { row: row_number })
        }
        Some(_) => {}
    }

    if row.task.is_some_and(|task| task.requires_remarks()) && row.remarks.trim().is_empty() {
        errors.push(ValidationError::RemarksRequired { row: row_number });
    }
}

/// Parse an hours field. Only finite, strictly positive decimals are valid.
pub fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours > 0.0)
}

/// Join violations into the single message shown to the user.
pub fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
