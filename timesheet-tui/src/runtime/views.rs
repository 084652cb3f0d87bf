use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod form;
mod picker;
mod text_edit;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    // The form is not interactive until reference data has arrived.
    if app.is_loading {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            app.quit();
        }
        return;
    }
    // Edits made during a submit would be lost when the form resets.
    if app.submitting {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            _ => app.set_status("Submission in progress"),
        }
        return;
    }

    match app.current_view {
        View::Form => form::handle_form_key(key, app, action_tx),
        View::Picker => picker::handle_picker_key(key, app),
        View::EditText => text_edit::handle_text_edit_key(key, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet_core::domain::FormConfig;

    use super::super::action_queue::channel;

    #[test]
    fn input_is_ignored_while_loading_except_quit() {
        let mut app = App::new(FormConfig::default());
        app.is_loading = true;
        let (tx, mut rx) = channel();

        handle_view_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE), &mut app, &tx);
        handle_view_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::Form);
        assert!(app.running);

        handle_view_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), &mut app, &tx);
        assert!(!app.running);
    }

    #[test]
    fn form_is_locked_while_a_submit_is_pending() {
        let mut app = App::new(FormConfig::default());
        app.submitting = true;
        let (tx, mut rx) = channel();

        handle_view_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app, &tx);
        handle_view_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), &mut app, &tx);
        handle_view_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::Form);
        assert_eq!(app.session.rows().len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Submission in progress"));

        app.submitting = false;
        handle_view_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), &mut app, &tx);
        assert_eq!(app.session.rows().len(), 2);
    }
}
