use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Account overview cards
            Constraint::Min(8),    // Expenses by category
            Constraint::Length(4), // Monthly income sparkline
        ])
        .split(area);

    render_overview_cards(f, chunks[0], app);
    render_category_chart(f, chunks[1], app);
    render_income_sparkline(f, chunks[2], app);
}

fn render_overview_cards(f: &mut Frame, area: Rect, app: &App) {
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

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Expenses by Category ", theme::title_style()));

    if app.category_breakdown.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expense data to generate category chart.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .category_breakdown
        .iter()
        .take(12)
        .map(|(name, amt)| {
            let val = amt.abs().to_u64().unwrap_or(0);
            let label = truncate(name, 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(theme::header_style())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_income_sparkline(f: &mut Frame, area: Rect, app: &App) {
    let title = if let (Some((first, _)), Some((last, _))) =
        (app.monthly_income.first(), app.monthly_income.last())
    {
        format!(" Monthly Income ({first} … {last}) ")
    } else {
        " Monthly Income ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()));

    if app.monthly_income.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No income data to generate time series chart.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let data: Vec<u64> = app
        .monthly_income
        .iter()
        .map(|(_, amt)| amt.to_u64().unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .style(Style::default().fg(theme::GREEN));

    f.render_widget(sparkline, area);
}
