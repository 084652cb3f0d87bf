use super::utils::wrap_words;
use super::*;
use timesheet_core::domain::models::Severity;

const TOAST_WIDTH: u16 = 48;
// Borders and horizontal padding.
const TEXT_WIDTH: u16 = TOAST_WIDTH - 4;

/// Newest toast on top, stacked down the right edge. Each toast grows to fit
/// its wrapped description so long validation summaries are shown in full.
pub fn render_toasts(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    if screen.width < TOAST_WIDTH || app.toasts.is_empty() {
        return;
    }

    let x = screen.x + screen.width.saturating_sub(TOAST_WIDTH + 1);
    let bottom = screen.y + screen.height;
    let mut y = screen.y + 1;
    for toast in app.toasts.iter().rev() {
        let lines = wrap_words(&toast.notification.description, TEXT_WIDTH as usize);
        let height = (lines.len() as u16 + 2).min(bottom.saturating_sub(y));
        if height < 3 {
            break;
        }
        let area = Rect::new(x, y, TOAST_WIDTH, height);
        y += height;
        let color = match toast.notification.severity {
            Severity::Info => Color::Green,
            Severity::Destructive => Color::Red,
        };

        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(Span::styled(
                        format!(" {} ", toast.notification.title),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use timesheet_core::domain::{models::Notification, summarize, validate, FormConfig, FormSession};

    /// Text inside the first toast, one entry per row.
    fn toast_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let x = area.width - TOAST_WIDTH - 1;
        let mut rows = Vec::new();
        for y in 2..area.height {
            if buffer[(x, y)].symbol() == "└" {
                break;
            }
            let row: String = (x + 1..x + TOAST_WIDTH - 1)
                .map(|col| buffer[(col, y)].symbol())
                .collect();
            rows.push(row.trim().to_string());
        }
        rows
    }

    #[test]
    fn validation_toast_shows_every_violation() {
        let message = summarize(&validate(&FormSession::new(FormConfig::default())));
        let mut app = App::new(FormConfig::default());
        app.push_toast(Notification::destructive("Validation Error", message.clone()));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render_toasts(frame, &app)).unwrap();

        let rows = toast_rows(&terminal);
        assert!(rows.len() > 2, "expected a multi-line toast, got {rows:?}");
        assert_eq!(rows.join(" "), message);
        assert!(rows.join(" ").ends_with("Valid hours required for row 1"));
    }

    #[test]
    fn short_toasts_stay_compact() {
        let mut app = App::new(FormConfig::default());
        app.push_toast(Notification::destructive("Error", "Failed to load clients"));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render_toasts(frame, &app)).unwrap();

        assert_eq!(toast_rows(&terminal), vec!["Failed to load clients"]);
    }
}
