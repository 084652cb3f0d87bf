use super::utils::or_placeholder;
use super::*;
use crate::app::{Focus, RowColumn};
use ratatui::widgets::{Cell, Row, Table};
use timesheet_core::domain::{
    models::{ClientDetails, TimesheetRow},
    CascadeLevel, WeekEndingMode,
};

pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // Employee
            Constraint::Min(5),    // Rows
            Constraint::Length(6), // Client details
        ])
        .split(area);

    render_employee_panel(frame, app, chunks[0]);
    render_rows(frame, app, chunks[1]);
    render_client_panel(frame, app, chunks[2]);
}

fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), label_style()),
        Span::styled(value, value_style(focused)),
    ])
}

fn render_employee_panel(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let details = session.employee_details();
    let gpn = details
        .and_then(|d| d.gpn)
        .map(|g| g.to_string())
        .unwrap_or_default();

    let week_ending = match session.config().week_ending {
        WeekEndingMode::Picker => session
            .week_ending()
            .map(|d| d.to_string())
            .unwrap_or_default(),
        WeekEndingMode::Today => format!("{} (today)", App::today()),
    };

    let lines = vec![
        field_line(
            "Employee",
            or_placeholder(session.employee_name()).to_string(),
            app.focus == Focus::Employee,
        ),
        field_line("GPN", or_placeholder(&gpn).to_string(), false),
        field_line(
            "Designation",
            or_placeholder(details.map(|d| d.designation.as_str()).unwrap_or_default())
                .to_string(),
            false,
        ),
        field_line(
            "Vertical",
            or_placeholder(details.map(|d| d.vertical.as_str()).unwrap_or_default()).to_string(),
            false,
        ),
        field_line(
            "Week Ending",
            or_placeholder(&week_ending).to_string(),
            app.focus == Focus::WeekEnding,
        ),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Employee ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, area);
}

fn column_title(column: RowColumn) -> String {
    match column {
        RowColumn::Client => "Client".to_string(),
        RowColumn::Cascade(CascadeLevel::Task) => "Project Task".to_string(),
        RowColumn::Cascade(level) => level.to_string(),
        RowColumn::Task => "Task".to_string(),
        RowColumn::Hours => "Hours".to_string(),
        RowColumn::Remarks => "Remarks".to_string(),
    }
}

fn column_width(column: RowColumn) -> Constraint {
    match column {
        RowColumn::Client => Constraint::Fill(2),
        RowColumn::Cascade(_) => Constraint::Fill(2),
        RowColumn::Task => Constraint::Fill(3),
        RowColumn::Hours => Constraint::Length(7),
        RowColumn::Remarks => Constraint::Fill(3),
    }
}

fn cell_value(row: &TimesheetRow, column: RowColumn) -> String {
    match column {
        RowColumn::Client => row.client_name().to_string(),
        RowColumn::Cascade(level) => row.cascade.get(level).unwrap_or_default().to_string(),
        RowColumn::Task => row.task.map(|t| t.to_string()).unwrap_or_default(),
        RowColumn::Hours => row.hours.clone(),
        RowColumn::Remarks => row.remarks.clone(),
    }
}

fn render_rows(frame: &mut Frame, app: &App, area: Rect) {
    let columns = app.row_columns();

    let header = Row::new(
        std::iter::once(Cell::from("#"))
            .chain(columns.iter().map(|&c| Cell::from(column_title(c))))
            .collect::<Vec<_>>(),
    )
    .style(label_style().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .session
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cells = columns.iter().map(|&column| {
                let focused = app.focus == Focus::Row { index, column };
                Cell::from(or_placeholder(&cell_value(row, column)).to_string())
                    .style(value_style(focused))
            });
            Row::new(
                std::iter::once(Cell::from((index + 1).to_string()).style(label_style()))
                    .chain(cells)
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(3))
        .chain(columns.iter().map(|&c| column_width(c)))
        .collect();

    let title = format!(" Entries ({}) ", app.session.rows().len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, area);
}

fn render_client_panel(frame: &mut Frame, app: &App, area: Rect) {
    let index = match app.focus {
        Focus::Row { index, .. } => index,
        _ => 0,
    };
    let row = app.session.rows().as_slice().get(index);
    let details = row.and_then(|r| r.client_details());
    let value = |f: fn(&ClientDetails) -> &str| {
        or_placeholder(details.map(f).unwrap_or_default()).to_string()
    };
    let partner = value(|d| d.partner.as_str());
    let cad_manager = value(|d| d.cad_manager.as_str());
    let complexity = value(|d| d.complexity.as_str());
    let location = value(|d| d.location.as_str());

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<14}", "Partner"), label_style()),
            Span::styled(format!("{partner:<24}"), value_style(false)),
            Span::styled(format!("{:<14}", "CAD Manager"), label_style()),
            Span::styled(cad_manager, value_style(false)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Complexity"), label_style()),
            Span::styled(format!("{complexity:<24}"), value_style(false)),
            Span::styled(format!("{:<14}", "Location"), label_style()),
            Span::styled(location, value_style(false)),
        ]),
    ];

    let title = match row {
        Some(r) if !r.client_name().is_empty() => {
            format!(" Row {} · {} ", index + 1, r.client_name())
        }
        _ => format!(" Row {} · no client ", index + 1),
    };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, area);
}
