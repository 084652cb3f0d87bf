use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_text_edit_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.confirm_text_edit(),
        KeyCode::Esc => app.cancel_text_edit(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.text_edit_input() {
                input.clear();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.text_edit_input() {
                input.insert(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.text_edit_input() {
                input.backspace();
            }
        }
        KeyCode::Left => {
            if let Some(input) = app.text_edit_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.text_edit_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = app.text_edit_input() {
                input.home();
            }
        }
        KeyCode::End => {
            if let Some(input) = app.text_edit_input() {
                input.end();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{TextTarget, View};
    use time::macros::date;
    use timesheet_core::domain::FormConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_text_edit_key(key(KeyCode::Char(c)), app);
        }
    }

    #[test]
    fn enter_sets_the_week_ending_date() {
        let mut app = App::new(FormConfig::default());
        app.open_text_edit(TextTarget::WeekEnding);

        type_str(&mut app, "2024-06-07");
        handle_text_edit_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.session.week_ending(), Some(date!(2024 - 06 - 07)));
        assert_eq!(app.current_view, View::Form);
    }

    #[test]
    fn esc_discards_remarks() {
        let mut app = App::new(FormConfig::default());
        let id = app.session.rows().as_slice()[0].id;
        app.open_text_edit(TextTarget::Remarks(id));

        type_str(&mut app, "filing for Q2");
        handle_text_edit_key(key(KeyCode::Esc), &mut app);

        assert_eq!(app.session.rows().get(id).unwrap().remarks, "");
        assert!(app.text_edit.is_none());
    }

    #[test]
    fn editing_mid_string() {
        let mut app = App::new(FormConfig::default());
        let id = app.session.rows().as_slice()[0].id;
        app.open_text_edit(TextTarget::Hours(id));

        type_str(&mut app, "25");
        handle_text_edit_key(key(KeyCode::Left), &mut app);
        type_str(&mut app, ".");
        handle_text_edit_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.session.rows().get(id).unwrap().hours, "2.5");
    }
}
