mod notifier;
mod reference_source;
mod timesheet_sink;

pub use notifier::*;
pub use reference_source::*;
pub use timesheet_sink::*;
