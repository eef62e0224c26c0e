use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(area);

    render_entry_form(f, chunks[0], app);
    render_records(f, chunks[1], app);
}

fn render_entry_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Insert;
    let border_color = if editing { theme::ACCENT } else { theme::OVERLAY };

    let mut lines = vec![Line::from("")];
    lines.extend(super::form_lines(&app.income_form, editing));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if editing {
            " Enter save | Esc cancel"
        } else {
            " a to add a record"
        },
        theme::dim_style(),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Add Income ", theme::title_style())),
    );
    f.render_widget(form, area);
}

fn render_records(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Your Income Records ({}) ", app.incomes.len()),
            theme::title_style(),
        ));

    if app.incomes.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "You haven't recorded any income yet.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Source", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let page = app.visible_rows.max(1);
    let rows: Vec<Row> = app
        .incomes
        .iter()
        .enumerate()
        .skip(app.income_scroll)
        .take(page)
        .map(|(i, rec)| {
            let style = if i == app.income_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                Style::default().fg(theme::TEXT).bg(theme::SURFACE)
            } else {
                theme::normal_style()
            };

            let amount = rec
                .amount
                .map(|a| format_amount(a, &app.currency))
                .unwrap_or_else(|| "—".to_string());

            Row::new(vec![
                Cell::from(rec.date.clone()),
                Cell::from(truncate(&rec.source, 28)),
                Cell::from(Line::from(Span::styled(amount, theme::income_style()))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
