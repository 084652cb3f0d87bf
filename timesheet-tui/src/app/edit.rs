use time::{macros::format_description, Date};
use timesheet_core::domain::RowUpdate;

use super::{App, TextEditState, TextInput, TextTarget, View};

impl App {
    pub fn open_text_edit(&mut self, target: TextTarget) {
        let initial = match target {
            TextTarget::WeekEnding => self
                .session
                .week_ending()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            TextTarget::Hours(id) => self
                .session
                .rows()
                .get(id)
                .map(|r| r.hours.clone())
                .unwrap_or_default(),
            TextTarget::Remarks(id) => self
                .session
                .rows()
                .get(id)
                .map(|r| r.remarks.clone())
                .unwrap_or_default(),
        };
        self.text_edit = Some(TextEditState {
            target,
            input: TextInput::from_str(&initial),
            error: None,
        });
        self.current_view = View::EditText;
    }

    pub fn text_edit_input(&mut self) -> Option<&mut TextInput> {
        self.text_edit.as_mut().map(|state| &mut state.input)
    }

    pub fn cancel_text_edit(&mut self) {
        self.text_edit = None;
        self.current_view = View::Form;
    }

    /// Apply the edited value. A week-ending date that does not parse keeps
    /// the editor open with an error.
    pub fn confirm_text_edit(&mut self) {
        let Some(state) = self.text_edit.as_mut() else {
            return;
        };
        let value = state.input.value.clone();

        let result = match state.target {
            TextTarget::WeekEnding => match parse_week_ending(&value) {
                Ok(date) => {
                    self.session.set_week_ending(date);
                    Ok(())
                }
                Err(msg) => {
                    state.error = Some(msg);
                    return;
                }
            },
            TextTarget::Hours(id) => {
                self.session
                    .update_row(id, RowUpdate::Hours(value), &self.reference)
            }
            TextTarget::Remarks(id) => {
                self.session
                    .update_row(id, RowUpdate::Remarks(value), &self.reference)
            }
        };

        self.cancel_text_edit();
        if let Err(e) = result {
            self.set_status(e.to_string());
        }
    }
}

/// Empty input clears the date.
fn parse_week_ending(value: &str) -> Result<Option<Date>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| format!("\"{value}\" is not a date (YYYY-MM-DD)"))
}
