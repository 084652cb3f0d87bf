use strum::IntoEnumIterator;
use timesheet_core::domain::{models::RowId, CascadeLevel, WeekEndingMode};

use super::{App, Focus, PickerKind, RowColumn, TextTarget};

impl App {
    /// Every focusable position, in tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Employee];
        if self.session.config().week_ending == WeekEndingMode::Picker {
            order.push(Focus::WeekEnding);
        }
        let columns = self.row_columns();
        for index in 0..self.session.rows().len() {
            order.extend(columns.iter().map(|&column| Focus::Row { index, column }));
        }
        order
    }

    /// Row table columns, in display order.
    pub fn row_columns(&self) -> Vec<RowColumn> {
        let mut columns = vec![RowColumn::Client];
        if self.session.config().cascade.is_some() {
            columns.extend(CascadeLevel::iter().map(RowColumn::Cascade));
        }
        columns.extend([RowColumn::Task, RowColumn::Hours, RowColumn::Remarks]);
        columns
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + order.len() - 1) % order.len()];
    }

    pub fn focused_row_id(&self) -> Option<RowId> {
        match self.focus {
            Focus::Row { index, .. } => self.session.rows().as_slice().get(index).map(|r| r.id),
            _ => None,
        }
    }

    /// Open the picker or editor for the focused field.
    pub fn activate_focus(&mut self) {
        match self.focus {
            Focus::Employee => self.open_picker(PickerKind::Employee),
            Focus::WeekEnding => self.open_text_edit(TextTarget::WeekEnding),
            Focus::Row { column, .. } => {
                let Some(id) = self.focused_row_id() else {
                    return;
                };
                match column {
                    RowColumn::Client => self.open_picker(PickerKind::Client(id)),
                    RowColumn::Cascade(level) => self.open_picker(PickerKind::Cascade(id, level)),
                    RowColumn::Task => self.open_picker(PickerKind::Task(id)),
                    RowColumn::Hours => self.open_text_edit(TextTarget::Hours(id)),
                    RowColumn::Remarks => self.open_text_edit(TextTarget::Remarks(id)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet_core::domain::{CascadeCatalog, FormConfig};

    #[test]
    fn tab_order_walks_every_field_and_wraps() {
        let mut app = App::new(FormConfig::default());
        let order = app.focus_order();
        assert_eq!(order.len(), 2 + 4);

        for expected in order.iter().skip(1) {
            app.focus_next();
            assert_eq!(app.focus, *expected);
        }
        app.focus_next();
        assert_eq!(app.focus, Focus::Employee);

        app.focus_previous();
        assert_eq!(
            app.focus,
            Focus::Row {
                index: 0,
                column: RowColumn::Remarks
            }
        );
    }

    #[test]
    fn today_mode_has_no_week_ending_field() {
        let config = FormConfig::builder()
            .week_ending(WeekEndingMode::Today)
            .build();
        let app = App::new(config);

        assert!(!app.focus_order().contains(&Focus::WeekEnding));
    }

    #[test]
    fn cascade_adds_four_columns_per_row() {
        let config = FormConfig::builder()
            .cascade(CascadeCatalog::default())
            .build();
        let app = App::new(config);

        assert_eq!(
            app.row_columns(),
            vec![
                RowColumn::Client,
                RowColumn::Cascade(CascadeLevel::Project),
                RowColumn::Cascade(CascadeLevel::SubProject),
                RowColumn::Cascade(CascadeLevel::Task),
                RowColumn::Cascade(CascadeLevel::Category),
                RowColumn::Task,
                RowColumn::Hours,
                RowColumn::Remarks,
            ]
        );
    }
}
