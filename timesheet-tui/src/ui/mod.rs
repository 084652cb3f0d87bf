use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod form_view;
mod picker_view;
mod text_edit;
mod toasts;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app, root[0]);
    form_view::render_form(frame, app, root[1]);
    render_status(frame, app, root[2]);
    render_controls(frame, app, root[3]);

    match app.current_view {
        View::Form => {}
        View::Picker => picker_view::render_picker(frame, app),
        View::EditText => text_edit::render_text_edit(frame, app),
    }

    toasts::render_toasts(frame, app);
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Timesheet ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = if app.is_loading {
        Some("Loading employees and clients...")
    } else if app.submitting {
        Some("Submitting...")
    } else {
        None
    };

    match label {
        Some(label) => {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(label)
                .style(Style::default().fg(Color::Yellow))
                .throbber_style(Style::default().fg(Color::Yellow))
                .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
                .use_type(throbber_widgets_tui::WhichUse::Spin);
            frame.render_stateful_widget(throbber, inner, &mut app.throbber_state);
        }
        None => {
            let summary = format!(
                "{} employees, {} clients loaded",
                app.reference.employees().len(),
                app.reference.clients().len()
            );
            frame.render_widget(
                Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
                inner,
            );
        }
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.status_message else {
        return;
    };
    frame.render_widget(
        Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut spans = vec![
        key("Tab/↑↓"),
        Span::raw(": Move  "),
        key("Enter"),
        Span::raw(": Edit  "),
        key("Del"),
        Span::raw(": Clear  "),
    ];
    if app.session.config().multi_row {
        spans.extend([
            key("a"),
            Span::raw(": Add row  "),
            key("d"),
            Span::raw(": Remove row  "),
        ]);
    }
    spans.extend([
        key("s"),
        Span::raw(": Submit  "),
        key("r"),
        Span::raw(": Reload  "),
        key("q"),
        Span::raw(": Quit"),
    ]);

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )),
        );
    frame.render_widget(controls, area);
}

/// Clear `area` and draw a bordered popup frame, returning its inner area.
fn popup(frame: &mut Frame, area: Rect, title: String) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
