use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus_previous(),
        KeyCode::Enter => app.activate_focus(),
        KeyCode::Char('s') | KeyCode::Char('S') => request_submit(app, action_tx),
        KeyCode::Char('a') | KeyCode::Char('A') => app.add_row(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.remove_last_row(),
        KeyCode::Delete | KeyCode::Backspace => {
            if matches!(app.focus, Focus::Row { .. }) {
                app.clear_focused();
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::LoadReferenceData)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn request_submit(app: &mut App, action_tx: &ActionTx) {
    if app.submitting {
        app.set_status("Submission in progress");
        return;
    }
    app.status_message = None;
    enqueue_action(action_tx, Action::Submit);
}
