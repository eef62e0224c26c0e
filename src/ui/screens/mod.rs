pub(crate) mod dashboard;
pub(crate) mod expense;
pub(crate) mod income;
pub(crate) mod login;
pub(crate) mod summary;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use super::forms::Form;
use super::theme;
use super::util::format_amount;

/// Render a form as "Label  value" lines. The focused field is
/// highlighted, with a cursor block appended while Insert mode (or the
/// login view) is accepting keystrokes.
pub(super) fn form_lines(form: &Form, editing: bool) -> Vec<Line<'static>> {
    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    form.fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == form.focus;
            let label_style = if focused && editing {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            let value_style = if focused && editing {
                theme::normal_style().add_modifier(Modifier::BOLD)
            } else {
                theme::normal_style()
            };

            let mut spans = vec![
                Span::styled(format!(" {:<label_width$}  ", field.label), label_style),
                Span::styled(field.display(), value_style),
            ];
            if focused && editing {
                spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT)));
            }
            Line::from(spans)
        })
        .collect()
}

/// One bordered metric card, shared by the dashboard and summary
/// screens.
pub(super) fn render_metric_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    currency: &str,
    color: ratatui::style::Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount, currency),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
