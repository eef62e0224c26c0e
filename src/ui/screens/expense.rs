use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.manage_categories {
        render_category_panels(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(area);

    render_entry_form(f, chunks[0], app);
    render_records(f, chunks[1], app);
}

fn render_entry_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Insert;
    let border_color = if editing { theme::ACCENT } else { theme::OVERLAY };

    let mut lines = vec![Line::from("")];
    lines.extend(super::form_lines(&app.expense_form, editing));

    // Category picker, cycled with ←/→ rather than typed
    let category = app
        .selected_expense_category()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "(none — press c to add one)".to_string());
    lines.push(Line::from(vec![
        Span::styled(" Category  ", theme::dim_style()),
        Span::styled(
            format!("‹ {category} ›"),
            if editing {
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::normal_style()
            },
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if editing {
            " Enter save | Esc cancel"
        } else {
            " a to add | c to manage categories"
        },
        theme::dim_style(),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Add Expense ", theme::title_style())),
    );
    f.render_widget(form, area);
}

fn render_records(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Your Expenses ({}) ", app.expenses.len()),
            theme::title_style(),
        ));

    if app.expenses.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "You haven't recorded any expenses yet.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Category", "Amount", "Note"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let page = app.visible_rows.max(1);
    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(page)
        .map(|(i, rec)| {
            let style = if i == app.expense_index {
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
                Cell::from(truncate(&rec.category, 16)),
                Cell::from(Line::from(Span::styled(amount, theme::expense_style()))),
                Cell::from(truncate(&rec.note, 24)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

// ── Category management ──────────────────────────────────────

fn render_category_panels(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_add_category(f, chunks[0], app);
    render_category_list(f, chunks[1], app);
}

fn render_add_category(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Insert;
    let border_color = if editing { theme::ACCENT } else { theme::OVERLAY };

    let mut lines = vec![Line::from("")];
    lines.extend(super::form_lines(&app.category_form, editing));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if editing {
            " Enter save | Esc cancel"
        } else {
            " a to add | c back to expenses"
        },
        theme::dim_style(),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Add New Category ", theme::title_style())),
    );
    f.render_widget(form, area);
}

fn render_category_list(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Your Categories ({}) ", app.categories.len()),
            theme::title_style(),
        ));

    if app.categories.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No categories added yet.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .categories
        .iter()
        .enumerate()
        .skip(app.category_scroll)
        .take(app.visible_rows.max(1))
        .map(|(i, cat)| {
            let style = if i == app.category_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", cat.category), style)))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
