use super::*;
use ratatui::widgets::{List, ListItem};

pub fn render_picker(frame: &mut Frame, app: &App) {
    let Some(picker) = &app.picker else {
        return;
    };
    let area = utils::centered_rect(70, 22, frame.area());
    let inner = popup(frame, area, format!("Select {}", picker.kind.title()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Options
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let search_text = if picker.input.value.is_empty() {
        if picker.list_focused {
            "Type to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if picker.list_focused {
        picker.input.value.clone()
    } else {
        let (before, after) = picker.input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if picker.list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    // Keep the highlighted option on screen.
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let skip = picker.index.saturating_sub(visible.saturating_sub(1));
    let items: Vec<ListItem> = picker
        .filtered
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, option)| {
            let style = if i == picker.index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(option.clone()).style(style)
        })
        .collect();

    let title = if picker.input.value.is_empty() {
        format!(" {} ({}) ", picker.kind.title(), picker.options.len())
    } else {
        format!(
            " {} ({}/{}) ",
            picker.kind.title(),
            picker.filtered.len(),
            picker.options.len()
        )
    };
    let list_border = if picker.list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(list_border)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Focus list  "),
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Select  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
