use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use timesheet_core::domain::{models::Notification, ports::inbound::TimesheetService};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::App;
use crate::ui;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: Arc<dyn TimesheetService>,
    mut notifications: UnboundedReceiver<Notification>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let _ = action_tx.send(Action::LoadReferenceData);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading || app.submitting {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &service, &action_tx);
        }

        while let Ok(notification) = notifications.try_recv() {
            app.push_toast(notification);
        }
        app.prune_toasts(Instant::now());

        if !app.running {
            break;
        }
    }

    Ok(())
}
