use time::Date;

use super::models::{ProjectPath, TimesheetRecord, TimesheetRow};
use super::{
    parse_hours, resolve_client, resolve_employee, CascadeLevel, FormSession, ReferenceData,
};

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Number of records written to the store.
    pub inserted: usize,
}

/// Month label stored with every record, e.g. "June 2024".
pub fn month_label(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}

/// Build one record per row of a validated session.
///
/// Employee and client fields are looked up again in `reference` rather than
/// taken from what the form displayed, so the newest snapshot is what gets
/// stored. Returns an empty list when the session has no usable week-ending
/// date.
pub fn build_records(
    session: &FormSession,
    reference: &ReferenceData,
    today: Date,
) -> Vec<TimesheetRecord> {
    let Some(week_ending) = session.effective_week_ending(today) else {
        return Vec::new();
    };
    let month = month_label(week_ending);
    let employee_name = session.employee_name();
    let employee = resolve_employee(reference, employee_name);
    let preserve_fraction = session.config().preserve_fractional_hours;

    session
        .rows()
        .iter()
        .map(|row| {
            let client = resolve_client(reference, row.client_name());
            TimesheetRecord {
                employee_name: employee_name.to_string(),
                employee_gpn: employee.as_ref().and_then(|e| e.gpn),
                designation: employee
                    .as_ref()
                    .map(|e| e.designation.clone())
                    .unwrap_or_default(),
                vertical: employee
                    .as_ref()
                    .map(|e| e.vertical.clone())
                    .unwrap_or_default(),
                client_name: row.client_name().to_string(),
                partner: client
                    .as_ref()
                    .map(|c| c.partner.clone())
                    .unwrap_or_default(),
                cad_manager: client
                    .as_ref()
                    .map(|c| c.cad_manager.clone())
                    .unwrap_or_default(),
                complexity: client
                    .as_ref()
                    .map(|c| c.complexity.clone())
                    .unwrap_or_default(),
                location: client
                    .as_ref()
                    .map(|c| c.location.clone())
                    .unwrap_or_default(),
                task: row.task.map(|t| t.to_string()).unwrap_or_default(),
                hours: submitted_hours(&row.hours, preserve_fraction),
                remarks: row.remarks.clone(),
                week_ending,
                month: month.clone(),
                project: session
                    .config()
                    .cascade
                    .as_ref()
                    .and_then(|_| project_path(row)),
            }
        })
        .collect()
}

// Whole hours unless fractions are preserved; the stored value has always
// been truncated toward zero.
fn submitted_hours(raw: &str, preserve_fraction: bool) -> f64 {
    let hours = parse_hours(raw).unwrap_or_default();
    if preserve_fraction {
        hours
    } else {
        hours.trunc()
    }
}

fn project_path(row: &TimesheetRow) -> Option<ProjectPath> {
    let cascade = &row.cascade;
    Some(ProjectPath {
        project: cascade.get(CascadeLevel::Project)?.to_string(),
        sub_project: cascade.get(CascadeLevel::SubProject)?.to_string(),
        task: cascade.get(CascadeLevel::Task)?.to_string(),
        category: cascade.get(CascadeLevel::Category)?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Client, Employee, Task};
    use crate::domain::{validate, FormConfig, RowUpdate, WeekEndingMode};
    use time::macros::date;

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![Employee::new("A. Singh")
                .with_gpn(1001)
                .with_designation("Associate")
                .with_manager("Indirect Tax")],
            vec![
                Client::new("Acme")
                    .with_partner("P. Rao")
                    .with_cad_manager("M. Iyer")
                    .with_complexity("High")
                    .with_location("Mumbai"),
                Client::new("Beta")
                    .with_partner("K. Shah")
                    .with_cad_manager("R. Das")
                    .with_complexity("Low")
                    .with_location("Pune"),
            ],
        )
    }

    fn two_row_session(config: FormConfig, reference: &ReferenceData) -> FormSession {
        let mut session = FormSession::new(config);
        session.select_employee("A. Singh", reference);
        session.set_week_ending(Some(date!(2024 - 06 - 07)));
        let first = session.rows().as_slice()[0].id;
        let second = session.add_row().unwrap();
        for (id, client, task, hours) in [
            (first, "Acme", Task::IdleTime, "3"),
            (second, "Beta", Task::Automation, "2.5"),
        ] {
            session
                .update_row(id, RowUpdate::Client(client.into()), reference)
                .unwrap();
            session
                .update_row(id, RowUpdate::Task(Some(task)), reference)
                .unwrap();
            session
                .update_row(id, RowUpdate::Hours(hours.into()), reference)
                .unwrap();
        }
        session
    }

    #[test]
    fn builds_one_record_per_row() {
        let reference = reference();
        let session = two_row_session(FormConfig::default(), &reference);
        assert!(validate(&session).is_empty());

        let records = build_records(&session, &reference, date!(2024 - 06 - 10));

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.employee_name, "A. Singh");
            assert_eq!(record.employee_gpn, Some(1001));
            assert_eq!(record.designation, "Associate");
            assert_eq!(record.vertical, "Indirect Tax");
            assert_eq!(record.week_ending, date!(2024 - 06 - 07));
            assert_eq!(record.month, "June 2024");
            assert_eq!(record.project, None);
        }
        assert_eq!(records[0].client_name, "Acme");
        assert_eq!(records[0].partner, "P. Rao");
        assert_eq!(records[0].location, "Mumbai");
        assert_eq!(records[0].task, "Idle Time");
        assert_eq!(records[1].client_name, "Beta");
        assert_eq!(records[1].cad_manager, "R. Das");
        assert_eq!(records[1].complexity, "Low");
        assert_eq!(records[1].task, "Automation");
    }

    #[test]
    fn truncates_hours_unless_configured_otherwise() {
        let reference = reference();

        let truncated = build_records(
            &two_row_session(FormConfig::default(), &reference),
            &reference,
            date!(2024 - 06 - 10),
        );
        assert_eq!(truncated[1].hours, 2.0);

        let config = FormConfig::builder().preserve_fractional_hours(true).build();
        let preserved = build_records(
            &two_row_session(config, &reference),
            &reference,
            date!(2024 - 06 - 10),
        );
        assert_eq!(preserved[0].hours, 3.0);
        assert_eq!(preserved[1].hours, 2.5);
    }

    #[test]
    fn validated_sessions_never_submit_zero_hours() {
        let reference = reference();
        for preserve in [false, true] {
            let config = FormConfig::builder()
                .preserve_fractional_hours(preserve)
                .build();
            let mut session = two_row_session(config, &reference);
            let first = session.rows().as_slice()[0].id;
            session
                .update_row(first, RowUpdate::Hours("0.5".into()), &reference)
                .unwrap();

            if !validate(&session).is_empty() {
                assert!(!preserve, "0.5 hours should be accepted when preserved");
                continue;
            }
            let records = build_records(&session, &reference, date!(2024 - 06 - 10));
            assert!(records.iter().all(|record| record.hours > 0.0));
            assert_eq!(records[0].hours, 0.5);
        }
    }

    #[test]
    fn uses_the_reference_snapshot_at_submit_time() {
        let reference = reference();
        let session = two_row_session(FormConfig::default(), &reference);
        let refreshed = ReferenceData::new(
            vec![Employee::new("A. Singh")
                .with_gpn(1001)
                .with_designation("Senior Associate")
                .with_manager("Indirect Tax")],
            vec![
                Client::new("Acme").with_partner("New Partner"),
                Client::new("Beta"),
            ],
        );

        let records = build_records(&session, &refreshed, date!(2024 - 06 - 10));

        assert_eq!(records[0].designation, "Senior Associate");
        assert_eq!(records[0].partner, "New Partner");
        assert_eq!(records[1].partner, "");
    }

    #[test]
    fn today_mode_files_under_the_submission_date() {
        let reference = reference();
        let config = FormConfig::builder()
            .week_ending(WeekEndingMode::Today)
            .build();
        let session = two_row_session(config, &reference);

        let records = build_records(&session, &reference, date!(2024 - 12 - 31));

        assert_eq!(records[0].week_ending, date!(2024 - 12 - 31));
        assert_eq!(records[0].month, "December 2024");
    }

    #[test]
    fn month_label_uses_the_full_month_name() {
        assert_eq!(month_label(date!(2026 - 10 - 16)), "October 2026");
        assert_eq!(month_label(date!(1999 - 02 - 01)), "February 1999");
    }
}
