use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Welcome
            Constraint::Length(5), // Metric cards
            Constraint::Min(3),    // Getting-around notes
        ])
        .split(area);

    render_welcome(f, chunks[0], app);
    render_cards(f, chunks[1], app);
    render_notes(f, chunks[2], app);
}

fn render_welcome(f: &mut Frame, area: Rect, app: &App) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hello, {}!", app.session.username),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to your financial dashboard. Use the tabs above to add",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "income, track expenses, and see summaries.",
            theme::normal_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(text, area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let t = app.totals;
    super::render_metric_card(
        f,
        cards[0],
        "Total Income",
        t.total_income,
        &app.currency,
        theme::GREEN,
    );
    super::render_metric_card(
        f,
        cards[1],
        "Total Expense",
        t.total_expense,
        &app.currency,
        theme::RED,
    );
    super::render_metric_card(
        f,
        cards[2],
        "Net Balance",
        t.net_balance,
        &app.currency,
        if t.net_balance >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
    );
}

fn render_notes(f: &mut Frame, area: Rect, app: &App) {
    let income_count = app.incomes.len();
    let expense_count = app.expenses.len();
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "{income_count} income record{} and {expense_count} expense record{} on file.",
                if income_count == 1 { "" } else { "s" },
                if expense_count == 1 { "" } else { "s" },
            ),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "2:Income to record earnings, 3:Expense to log spending,",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "4:Summary for charts and totals.",
            theme::dim_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" At a Glance ", theme::title_style())),
    );
    f.render_widget(text, area);
}
