//! TUI rendering

use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::app::{App, FormField, Mode};
use crate::Notice;

const COLUMNS: [&str; 6] = [
    "Employee ID",
    "Name",
    "Email",
    "Address",
    "Date of Join",
    "Blood Group",
];

pub fn ui<G>(f: &mut Frame, app: &App<G>)
where
    G: crate::EmployeeGateway,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + search
            Constraint::Min(1),    // Table (+ logs)
            Constraint::Length(3), // Status line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.show_logs {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_table(f, app, main_chunks[0]);
        render_logs(f, app, main_chunks[1]);
    } else {
        render_table(f, app, chunks[1]);
    }

    render_status(f, app, chunks[2]);

    match app.mode {
        Mode::Edit => render_form(f, app),
        Mode::ConfirmDelete => render_confirm(f),
        _ => {}
    }
}

fn render_header<G: crate::EmployeeGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(10)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "Employee Records",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, header_chunks[0]);

    let editing = app.mode == Mode::Search;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    render_input(
        f,
        &app.search_input,
        " Search (/) ",
        style,
        header_chunks[1],
        editing,
    );
}

fn render_table<G: crate::EmployeeGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let header = Row::new(COLUMNS.map(Cell::from))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .board
        .page_rows()
        .into_iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.employee_id.clone().unwrap_or_default()),
                Cell::from(e.name.clone()),
                Cell::from(e.email.clone()),
                Cell::from(e.address.clone()),
                Cell::from(e.date_of_join.clone().unwrap_or_default()),
                Cell::from(e.blood_group.map(|g| g.to_string()).unwrap_or_default()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Percentage(18),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Length(13),
        Constraint::Length(12),
    ];

    let title = format!(
        " Employees ({} shown, {} per page, page {}) ",
        app.board.filtered().len(),
        app.page_size(),
        app.page_label()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_logs<G: crate::EmployeeGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_status<G: crate::EmployeeGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let help = match app.mode {
        Mode::Browse => "a add | e edit | d delete | / search | ←/→ page | r refresh | l logs | q quit",
        Mode::Search => "type to filter | Enter/Esc done",
        Mode::Edit => "Tab next field | ←/→ blood group | Enter save | Esc cancel",
        Mode::ConfirmDelete => "y yes | n no",
    };

    let line = match app.board.notice() {
        Some(Notice::Error(msg)) => Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Some(Notice::Info(msg)) => {
            Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Green)))
        }
        None => Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status, area);
}

fn render_form<G: crate::EmployeeGateway>(f: &mut Frame, app: &App<G>) {
    let area = centered_rect(60, 19, f.area());
    f.render_widget(Clear, area);

    let title = if app.board.draft().is_edit() {
        " Edit Employee "
    } else {
        " Add Employee "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(FormField::ALL.map(|_| Constraint::Length(3)))
        .split(inner);

    for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
        let focused = app.field == field;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = format!(" {} ", field.label());

        match app.form.get(field) {
            Some(input) => render_input(f, input, &label, style, *row, focused),
            None => {
                let value = app
                    .board
                    .draft()
                    .blood_group
                    .map(|g| format!("< {} >", g))
                    .unwrap_or_else(|| "< not set >".to_string());
                let widget = Paragraph::new(value)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).title(label));
                f.render_widget(widget, *row);
            }
        }
    }
}

fn render_confirm(f: &mut Frame) {
    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::from(crate::board::DELETE_PROMPT),
        Line::from(Span::styled(
            "[y] Yes   [n] No",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Confirm Deletion ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(dialog, area);
}

/// Single-line text input with a cursor when focused
fn render_input(f: &mut Frame, input: &Input, title: &str, style: Style, area: Rect, focused: bool) {
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let widget = Paragraph::new(input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(widget, area);

    if focused {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

/// Rect of `percent_x` width and `height` rows, centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(r.height)),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 19, outer);
        assert_eq!(r.width, 60);
        assert_eq!(r.height, 19);
        assert!(r.x >= 19 && r.y >= 10);
    }

    #[test]
    fn centered_rect_clamps_to_small_terminal() {
        let outer = Rect::new(0, 0, 40, 10);
        let r = centered_rect(50, 19, outer);
        assert!(r.height <= 10);
    }
}
