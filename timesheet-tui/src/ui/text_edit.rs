use super::*;

pub fn render_text_edit(frame: &mut Frame, app: &App) {
    let Some(state) = &app.text_edit else {
        return;
    };
    let area = utils::centered_rect(60, 8, frame.area());
    let inner = popup(frame, area, state.target.title().to_string());

    let (before, after) = state.input.split_at_cursor();
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(before.to_string(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(after.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];
    match &state.error {
        Some(err) => lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Save  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1))),
        inner,
    );
}
