use std::time::Instant;

use timesheet_core::domain::{models::Notification, models::RowId, CascadeLevel};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Form,
    Picker,
    EditText,
}

/// A column of the row table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    Client,
    Cascade(CascadeLevel),
    Task,
    Hours,
    Remarks,
}

/// The focusable positions of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Employee,
    WeekEnding,
    Row { index: usize, column: RowColumn },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Employee,
    Client(RowId),
    Task(RowId),
    Cascade(RowId, CascadeLevel),
}

impl PickerKind {
    pub fn title(&self) -> String {
        match self {
            Self::Employee => "Employees".to_string(),
            Self::Client(_) => "Clients".to_string(),
            Self::Task(_) => "Tasks".to_string(),
            Self::Cascade(_, CascadeLevel::Project) => "Projects".to_string(),
            Self::Cascade(_, CascadeLevel::SubProject) => "Sub-projects".to_string(),
            Self::Cascade(_, CascadeLevel::Task) => "Project tasks".to_string(),
            Self::Cascade(_, CascadeLevel::Category) => "Categories".to_string(),
        }
    }
}

/// Fuzzy-searchable list of options for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub kind: PickerKind,
    pub options: Vec<String>,
    pub input: TextInput,
    pub filtered: Vec<String>,
    pub index: usize,
    pub list_focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    WeekEnding,
    Hours(RowId),
    Remarks(RowId),
}

impl TextTarget {
    pub fn title(&self) -> &'static str {
        match self {
            Self::WeekEnding => "Week Ending (YYYY-MM-DD)",
            Self::Hours(_) => "Hours",
            Self::Remarks(_) => "Remarks",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextEditState {
    pub target: TextTarget,
    pub input: TextInput,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() else {
            return;
        };
        self.value.drain(idx..self.cursor);
        self.cursor = idx;
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_characters() {
        let mut input = TextInput::from_str("Mü");
        input.backspace();
        assert_eq!(input.value, "M");

        input.insert('ö');
        input.move_left();
        input.insert('x');
        assert_eq!(input.split_at_cursor(), ("Mx", "ö"));

        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, input.value.len());
    }
}
