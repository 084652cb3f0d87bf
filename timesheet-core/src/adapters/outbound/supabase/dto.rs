use serde::{Deserialize, Serialize, Serializer};
use time::Date;

use crate::domain::models::{Client, Employee, TimesheetRecord};

time::serde::format_description!(week_ending_format, Date, "[year]-[month]-[day]");

/// Error payload returned by PostgREST.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "GPN")]
    pub gpn: Option<i64>,
    #[serde(rename = "Updated Designation")]
    pub designation: Option<String>,
    #[serde(rename = "Manager")]
    pub manager: Option<String>,
}

impl EmployeeRow {
    pub const COLUMNS: &'static [&'static str] =
        &["Name", "GPN", "Updated Designation", "Manager"];

    /// Rows without a name cannot be selected and are dropped.
    pub fn into_domain(self) -> Option<Employee> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(Employee {
            name,
            gpn: self.gpn,
            designation: self.designation,
            manager: self.manager,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ClientRow {
    #[serde(rename = "Account")]
    pub account: Option<String>,
    #[serde(rename = "BU Partner 2")]
    pub partner: Option<String>,
    #[serde(rename = "CAD Manager")]
    pub cad_manager: Option<String>,
    #[serde(rename = "Complexity")]
    pub complexity: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

impl ClientRow {
    pub const COLUMNS: &'static [&'static str] =
        &["Account", "BU Partner 2", "CAD Manager", "Complexity", "Location"];

    pub fn into_domain(self) -> Option<Client> {
        let account = self.account.filter(|a| !a.is_empty())?;
        Some(Client {
            account,
            partner: self.partner,
            cad_manager: self.cad_manager,
            complexity: self.complexity,
            location: self.location,
        })
    }
}

/// One row of the `Timesheet` insert.
#[derive(Debug, Serialize)]
pub struct TimesheetInsert<'a> {
    #[serde(rename = "Employee Name")]
    pub employee_name: &'a str,
    #[serde(rename = "Employee GPN")]
    pub employee_gpn: Option<i64>,
    #[serde(rename = "Designation")]
    pub designation: &'a str,
    #[serde(rename = "Vertical")]
    pub vertical: &'a str,
    #[serde(rename = "Client Name")]
    pub client_name: &'a str,
    #[serde(rename = "Partner")]
    pub partner: &'a str,
    #[serde(rename = "CAD Manager")]
    pub cad_manager: &'a str,
    #[serde(rename = "Complexity")]
    pub complexity: &'a str,
    #[serde(rename = "Location")]
    pub location: &'a str,
    #[serde(rename = "Task")]
    pub task: &'a str,
    #[serde(rename = "Hours", serialize_with = "serialize_hours")]
    pub hours: f64,
    #[serde(rename = "Remarks")]
    pub remarks: &'a str,
    #[serde(rename = "Week Ending", with = "week_ending_format")]
    pub week_ending: Date,
    #[serde(rename = "Month")]
    pub month: &'a str,
    #[serde(rename = "Project", skip_serializing_if = "Option::is_none")]
    pub project: Option<&'a str>,
    #[serde(rename = "Sub Project", skip_serializing_if = "Option::is_none")]
    pub sub_project: Option<&'a str>,
    #[serde(rename = "Project Task", skip_serializing_if = "Option::is_none")]
    pub project_task: Option<&'a str>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
}

impl<'a> From<&'a TimesheetRecord> for TimesheetInsert<'a> {
    fn from(record: &'a TimesheetRecord) -> Self {
        let project = record.project.as_ref();
        Self {
            employee_name: &record.employee_name,
            employee_gpn: record.employee_gpn,
            designation: &record.designation,
            vertical: &record.vertical,
            client_name: &record.client_name,
            partner: &record.partner,
            cad_manager: &record.cad_manager,
            complexity: &record.complexity,
            location: &record.location,
            task: &record.task,
            hours: record.hours,
            remarks: &record.remarks,
            week_ending: record.week_ending,
            month: &record.month,
            project: project.map(|p| p.project.as_str()),
            sub_project: project.map(|p| p.sub_project.as_str()),
            project_task: project.map(|p| p.task.as_str()),
            category: project.map(|p| p.category.as_str()),
        }
    }
}

// Whole hours go out as integers so integer columns accept them.
fn serialize_hours<S: Serializer>(hours: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if hours.fract() == 0.0 && hours.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*hours as i64)
    } else {
        serializer.serialize_f64(*hours)
    }
}
