use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::str::FromStr;
use timesheet_core::domain::{models::Task, RowUpdate};

use super::{App, Focus, PickerKind, PickerState, RowColumn, TextInput, View};

impl App {
    fn picker_options(&self, kind: PickerKind) -> Vec<String> {
        match kind {
            PickerKind::Employee => self
                .reference
                .employees()
                .iter()
                .map(|e| e.name.clone())
                .collect(),
            PickerKind::Client(_) => self
                .reference
                .clients()
                .iter()
                .map(|c| c.account.clone())
                .collect(),
            PickerKind::Task(_) => Task::all().map(|t| t.to_string()).collect(),
            PickerKind::Cascade(id, level) => {
                let (Some(catalog), Ok(row)) =
                    (self.session.config().cascade.as_ref(), self.session.rows().get(id))
                else {
                    return Vec::new();
                };
                row.cascade
                    .options(level, catalog)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    pub fn open_picker(&mut self, kind: PickerKind) {
        let options = self.picker_options(kind);
        if options.is_empty() {
            self.set_status(format!("No {} to choose from", kind.title().to_lowercase()));
            return;
        }
        self.picker = Some(PickerState {
            kind,
            filtered: options.clone(),
            options,
            input: TextInput::new(),
            index: 0,
            list_focused: false,
        });
        self.current_view = View::Picker;
    }

    pub fn filter_picker(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        picker.index = 0;
        if picker.input.value.is_empty() {
            picker.filtered = picker.options.clone();
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(&String, i64)> = picker
            .options
            .iter()
            .filter_map(|option| {
                matcher
                    .fuzzy_match(option, &picker.input.value)
                    .map(|score| (option, score))
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        picker.filtered = scored.into_iter().map(|(o, _)| o.clone()).collect();
    }

    pub fn picker_input_char(&mut self, c: char) {
        if let Some(picker) = self.picker.as_mut() {
            picker.input.insert(c);
        }
        self.filter_picker();
    }

    pub fn picker_input_backspace(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.input.backspace();
        }
        self.filter_picker();
    }

    pub fn picker_input_clear(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.input.clear();
        }
        self.filter_picker();
    }

    pub fn picker_move_cursor(&mut self, left: bool) {
        if let Some(picker) = self.picker.as_mut() {
            if left {
                picker.input.move_left();
            } else {
                picker.input.move_right();
            }
        }
    }

    pub fn picker_cursor_home_end(&mut self, home: bool) {
        if let Some(picker) = self.picker.as_mut() {
            if home {
                picker.input.home();
            } else {
                picker.input.end();
            }
        }
    }

    pub fn picker_select_next(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            if picker.index + 1 < picker.filtered.len() {
                picker.index += 1;
            }
        }
    }

    pub fn picker_select_previous(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.index = picker.index.saturating_sub(1);
        }
    }

    pub fn cancel_picker(&mut self) {
        self.picker = None;
        self.current_view = View::Form;
    }

    /// Apply the highlighted option. Choosing a cascade level moves straight
    /// on to the next level when it has candidates.
    pub fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        self.current_view = View::Form;
        let Some(value) = picker.filtered.get(picker.index).cloned() else {
            return;
        };

        let update = match picker.kind {
            PickerKind::Employee => {
                self.session.select_employee(value, &self.reference);
                return;
            }
            PickerKind::Client(id) => (id, RowUpdate::Client(value)),
            PickerKind::Task(id) => match Task::from_str(&value) {
                Ok(task) => (id, RowUpdate::Task(Some(task))),
                Err(_) => return,
            },
            PickerKind::Cascade(id, level) => (id, RowUpdate::Cascade { level, value }),
        };

        let (id, update) = update;
        if let Err(e) = self.session.update_row(id, update, &self.reference) {
            self.set_status(e.to_string());
            return;
        }

        if let PickerKind::Cascade(id, level) = picker.kind {
            if let Some(next) = level.next() {
                if let Focus::Row { index, .. } = self.focus {
                    self.focus = Focus::Row {
                        index,
                        column: RowColumn::Cascade(next),
                    };
                }
                if !self.picker_options(PickerKind::Cascade(id, next)).is_empty() {
                    self.open_picker(PickerKind::Cascade(id, next));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet_core::domain::{
        models::{Client, Employee},
        CascadeCatalog, CascadeLevel, FormConfig, ReferenceData,
    };

    fn app() -> App {
        let mut app = App::new(FormConfig::default());
        app.set_reference_data(ReferenceData::new(
            vec![Employee::new("A. Singh"), Employee::new("R. Menon")],
            vec![Client::new("Acme").with_partner("P. Rao"), Client::new("Beta")],
        ));
        app
    }

    fn catalog() -> CascadeCatalog {
        toml::from_str(
            r#"
            [[projects]]
            name = "Website Development"
            sub_projects = ["Frontend"]

            [[projects.tasks]]
            name = "UI Design"
            sub_project = "Frontend"
            categories = ["Design"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn fuzzy_filter_narrows_options() {
        let mut app = app();
        app.open_picker(PickerKind::Employee);

        for c in "mnn".chars() {
            app.picker_input_char(c);
        }

        assert_eq!(app.picker.as_ref().unwrap().filtered, vec!["R. Menon"]);
    }

    #[test]
    fn confirming_a_client_fills_the_derived_fields() {
        let mut app = app();
        let id = app.session.rows().as_slice()[0].id;
        app.open_picker(PickerKind::Client(id));

        app.confirm_picker();

        let row = app.session.rows().get(id).unwrap();
        assert_eq!(row.client_name(), "Acme");
        assert_eq!(row.client_details().unwrap().partner, "P. Rao");
        assert_eq!(app.current_view, View::Form);
        assert!(app.picker.is_none());
    }

    #[test]
    fn confirming_a_task_parses_its_display_name() {
        let mut app = app();
        let id = app.session.rows().as_slice()[0].id;
        app.open_picker(PickerKind::Task(id));
        for c in "Automation".chars() {
            app.picker_input_char(c);
        }

        app.confirm_picker();

        assert_eq!(
            app.session.rows().get(id).unwrap().task,
            Some(Task::Automation)
        );
    }

    #[test]
    fn empty_option_lists_do_not_open_a_picker() {
        let mut app = App::new(FormConfig::default());

        app.open_picker(PickerKind::Employee);

        assert!(app.picker.is_none());
        assert_eq!(app.current_view, View::Form);
        assert_eq!(
            app.status_message.as_deref(),
            Some("No employees to choose from")
        );
    }

    #[test]
    fn cascade_selection_advances_to_the_next_level() {
        let mut app = App::new(FormConfig::builder().cascade(catalog()).build());
        let id = app.session.rows().as_slice()[0].id;
        app.focus = Focus::Row {
            index: 0,
            column: RowColumn::Cascade(CascadeLevel::Project),
        };
        app.activate_focus();

        app.confirm_picker();

        let picker = app.picker.as_ref().unwrap();
        assert_eq!(
            picker.kind,
            PickerKind::Cascade(id, CascadeLevel::SubProject)
        );
        assert_eq!(picker.options, vec!["Frontend"]);
        assert_eq!(
            app.focus,
            Focus::Row {
                index: 0,
                column: RowColumn::Cascade(CascadeLevel::SubProject)
            }
        );

        app.confirm_picker();
        app.confirm_picker();
        app.confirm_picker();
        let row = app.session.rows().get(id).unwrap();
        assert!(row.cascade.is_complete());
        assert_eq!(row.cascade.get(CascadeLevel::Category), Some("Design"));
        assert!(app.picker.is_none());
    }
}
