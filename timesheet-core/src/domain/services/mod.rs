mod timesheet;

pub use timesheet::TimesheetServiceImpl;
