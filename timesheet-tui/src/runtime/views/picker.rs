use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_picker_key(key: KeyEvent, app: &mut App) {
    let Some(picker) = app.picker.as_ref() else {
        return;
    };
    let list_focused = picker.list_focused;
    let at_top = picker.index == 0;
    let at_bottom = picker.index + 1 >= picker.filtered.len();

    match key.code {
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Esc => app.cancel_picker(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input_clear()
        }
        KeyCode::Tab => set_list_focus(app, true),
        KeyCode::BackTab => set_list_focus(app, false),
        KeyCode::Char('j') if list_focused => {
            if at_bottom {
                set_list_focus(app, false);
            } else {
                app.picker_select_next();
            }
        }
        KeyCode::Char('k') if list_focused => {
            if at_top {
                set_list_focus(app, false);
            } else {
                app.picker_select_previous();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !list_focused {
                app.picker_input_char(c);
            }
        }
        KeyCode::Backspace => app.picker_input_backspace(),
        KeyCode::Up => {
            if list_focused && at_top {
                set_list_focus(app, false);
            } else {
                app.picker_select_previous();
            }
        }
        KeyCode::Down => {
            if list_focused && at_bottom {
                set_list_focus(app, false);
            } else {
                app.picker_select_next();
            }
        }
        KeyCode::Left if !list_focused => app.picker_move_cursor(true),
        KeyCode::Right if !list_focused => app.picker_move_cursor(false),
        KeyCode::Home if !list_focused => app.picker_cursor_home_end(true),
        KeyCode::End if !list_focused => app.picker_cursor_home_end(false),
        _ => {}
    }
}

fn set_list_focus(app: &mut App, focused: bool) {
    if let Some(picker) = app.picker.as_mut() {
        picker.list_focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PickerKind, View};
    use timesheet_core::domain::{models::Employee, FormConfig, ReferenceData};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_picker() -> App {
        let mut app = App::new(FormConfig::default());
        app.set_reference_data(ReferenceData::new(
            vec![
                Employee::new("A. Singh"),
                Employee::new("R. Menon"),
                Employee::new("S. Kapoor"),
            ],
            vec![],
        ));
        app.open_picker(PickerKind::Employee);
        app
    }

    #[test]
    fn typing_filters_and_enter_selects() {
        let mut app = app_with_picker();

        for c in "kap".chars() {
            handle_picker_key(key(KeyCode::Char(c)), &mut app);
        }
        handle_picker_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.session.employee_name(), "S. Kapoor");
        assert_eq!(app.current_view, View::Form);
    }

    #[test]
    fn j_and_k_navigate_only_when_the_list_is_focused() {
        let mut app = app_with_picker();

        handle_picker_key(key(KeyCode::Char('j')), &mut app);
        assert_eq!(app.picker.as_ref().unwrap().input.value, "j");

        handle_picker_key(key(KeyCode::Backspace), &mut app);
        handle_picker_key(key(KeyCode::Tab), &mut app);
        handle_picker_key(key(KeyCode::Char('j')), &mut app);
        handle_picker_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.session.employee_name(), "R. Menon");
    }

    #[test]
    fn esc_leaves_the_selection_untouched() {
        let mut app = app_with_picker();

        handle_picker_key(key(KeyCode::Down), &mut app);
        handle_picker_key(key(KeyCode::Esc), &mut app);

        assert_eq!(app.session.employee_name(), "");
        assert!(app.picker.is_none());
    }
}
