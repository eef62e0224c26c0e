use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, AuthPane};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    // Center a fixed-size box
    let box_width = 52.min(area.width.saturating_sub(4));
    let box_height = 12.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(box_width)) / 2;
    let y = area.y + (area.height.saturating_sub(box_height)) / 2;
    let popup = Rect::new(x, y, box_width, box_height);

    let (title, form, other_hint) = match app.auth_pane {
        AuthPane::SignIn => (
            " Sign In ",
            &app.login_form,
            "→ Register a new account",
        ),
        AuthPane::Register => (
            " Create Your Account ",
            &app.register_form,
            "← Back to sign in",
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(2), // form fields
            Constraint::Length(1), // spacer
            Constraint::Length(1), // submit hint
            Constraint::Length(1), // pane switch hint
            Constraint::Min(1),    // inline message
        ])
        .split(inner);

    let fields = super::form_lines(form, true);
    f.render_widget(Paragraph::new(fields), chunks[1]);

    let submit = match app.auth_pane {
        AuthPane::SignIn => "Enter to sign in",
        AuthPane::Register => "Enter to register (you still sign in after)",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {submit}"),
            theme::dim_style(),
        ))),
        chunks[3],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {other_hint}"),
            theme::dim_style(),
        ))),
        chunks[4],
    );

    if !app.status_message.is_empty() {
        let style = if app.status_message.starts_with('✓') {
            theme::income_style()
        } else {
            theme::error_style()
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", app.status_message),
                style,
            ))),
            chunks[5],
        );
    }
}
