use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rust_decimal::Decimal;
use std::io;
use std::str::FromStr;

use crate::auth;
use crate::ledger;
use crate::store::Store;
use crate::ui::app::{App, AuthPane, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &Store, currency: String) -> Result<()> {
    let mut app = App::new(currency);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab bar + status bar + command bar + table borders/header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            if !app.session.is_authenticated() {
                handle_login_input(key, app, store);
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Insert => handle_insert_input(key, app, store),
                InputMode::Command => handle_command_input(key, app, store)?,
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Login view ───────────────────────────────────────────────

fn handle_login_input(key: event::KeyEvent, app: &mut App, store: &Store) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Tab | KeyCode::Down => {
            active_auth_form(app).focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            active_auth_form(app).focus_prev();
        }
        KeyCode::Left => {
            app.auth_pane = AuthPane::SignIn;
            app.status_message.clear();
        }
        KeyCode::Right => {
            app.auth_pane = AuthPane::Register;
            app.status_message.clear();
        }
        KeyCode::Esc => {
            active_auth_form(app).clear();
            app.status_message.clear();
        }
        KeyCode::Enter => match app.auth_pane {
            AuthPane::SignIn => submit_login(app, store),
            AuthPane::Register => submit_register(app, store),
        },
        KeyCode::Backspace => {
            active_auth_form(app).backspace();
        }
        KeyCode::Char(c) => {
            active_auth_form(app).insert_char(c);
        }
        _ => {}
    }
}

fn active_auth_form(app: &mut App) -> &mut crate::ui::forms::Form {
    match app.auth_pane {
        AuthPane::SignIn => &mut app.login_form,
        AuthPane::Register => &mut app.register_form,
    }
}

fn submit_login(app: &mut App, store: &Store) {
    let username = app.login_form.value(0).to_string();
    let password = app.login_form.value(1).to_string();

    match auth::login(store, &mut app.session, &username, &password) {
        Ok(()) => {
            app.login_form.clear();
            app.register_form.clear();
            app.screen = Screen::Dashboard;
            app.status_message.clear();
            let result = app.refresh_all(store);
            app.report(result);
            if app.status_message.is_empty() {
                app.set_status(format!("Welcome back, {username}!"));
            }
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn submit_register(app: &mut App, store: &Store) {
    let username = app.register_form.value(0).trim().to_string();
    let password = app.register_form.value(1).to_string();

    match auth::register(store, &username, &password) {
        Ok(()) => {
            app.register_form.clear();
            app.auth_pane = AuthPane::SignIn;
            // Prefill the sign-in form; registration never auto-authenticates
            app.login_form.clear();
            app.login_form.set_value(0, username);
            app.login_form.focus_next();
            app.set_status("✓ Account created successfully. Please sign in.");
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

// ── Normal mode ──────────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &Store) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Income),
        KeyCode::Char('3') => switch_screen(app, store, Screen::Expense),
        KeyCode::Char('4') => switch_screen(app, store, Screen::Summary),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            if app.active_form_mut().is_some() {
                app.input_mode = InputMode::Insert;
            }
        }
        KeyCode::Char('c') if app.screen == Screen::Expense => {
            app.manage_categories = !app.manage_categories;
        }
        KeyCode::Left if app.screen == Screen::Expense && !app.manage_categories => {
            app.cycle_expense_category(-1);
        }
        KeyCode::Right if app.screen == Screen::Expense && !app.manage_categories => {
            app.cycle_expense_category(1);
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            if app.manage_categories {
                app.manage_categories = false;
            } else {
                app.status_message.clear();
            }
        }
        _ => {}
    }
    Ok(())
}

// ── Insert mode ──────────────────────────────────────────────

fn handle_insert_input(key: event::KeyEvent, app: &mut App, store: &Store) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.active_form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.active_form_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Left if app.screen == Screen::Expense && !app.manage_categories => {
            app.cycle_expense_category(-1);
        }
        KeyCode::Right if app.screen == Screen::Expense && !app.manage_categories => {
            app.cycle_expense_category(1);
        }
        KeyCode::Enter => submit_active_form(app, store),
        KeyCode::Backspace => {
            if let Some(form) = app.active_form_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.active_form_mut() {
                form.insert_char(c);
            }
        }
        _ => {}
    }
}

fn submit_active_form(app: &mut App, store: &Store) {
    match app.screen {
        Screen::Income => submit_income(app, store),
        Screen::Expense => {
            if app.manage_categories {
                submit_category(app, store);
            } else {
                submit_expense(app, store);
            }
        }
        _ => {}
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn submit_income(app: &mut App, store: &Store) {
    let date = app.income_form.value(0).trim().to_string();
    let source = app.income_form.value(1).to_string();
    let Some(amount) = parse_amount(app.income_form.value(2)) else {
        app.set_status("Please enter a valid source and amount.");
        return;
    };

    let username = app.session.username.clone();
    match ledger::add_income(store, &username, &date, &source, amount) {
        Ok(()) => {
            app.reset_entry_forms();
            app.input_mode = InputMode::Normal;
            let display = crate::ui::util::format_amount(amount, &app.currency);
            app.set_status(format!("✓ Income of {display} added successfully!"));
            let mut result = app.refresh_income(store);
            if result.is_ok() {
                result = app.refresh_summary(store);
            }
            app.report(result);
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn submit_expense(app: &mut App, store: &Store) {
    let date = app.expense_form.value(0).trim().to_string();
    let Some(amount) = parse_amount(app.expense_form.value(1)) else {
        app.set_status("Please enter a valid amount.");
        return;
    };
    let Some(category) = app.selected_expense_category().map(|c| c.to_string()) else {
        app.set_status("No categories found. Press c to add a category first.");
        return;
    };
    let note = app.expense_form.value(2).to_string();

    let username = app.session.username.clone();
    match ledger::add_expense(store, &username, &date, amount, &category, &note) {
        Ok(()) => {
            app.reset_entry_forms();
            app.input_mode = InputMode::Normal;
            let display = crate::ui::util::format_amount(amount, &app.currency);
            app.set_status(format!("✓ Expense of {display} for '{category}' added!"));
            let mut result = app.refresh_expenses(store);
            if result.is_ok() {
                result = app.refresh_summary(store);
            }
            app.report(result);
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn submit_category(app: &mut App, store: &Store) {
    let name = app.category_form.value(0).to_string();
    let username = app.session.username.clone();
    match ledger::add_category(store, &username, &name) {
        Ok(()) => {
            app.category_form.clear();
            app.input_mode = InputMode::Normal;
            app.set_status(format!("✓ Category '{}' added!", name.trim()));
            let result = app.refresh_expenses(store);
            app.report(result);
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

// ── Command mode ─────────────────────────────────────────────

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Confirm mode ─────────────────────────────────────────────

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::Logout => {
                        app.end_session();
                        app.set_status("Logged out");
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &Store, screen: Screen) {
    app.screen = screen;
    app.status_message.clear();
    let result = match screen {
        Screen::Dashboard | Screen::Summary => app.refresh_summary(store),
        Screen::Income => app.refresh_income(store),
        Screen::Expense => app.refresh_expenses(store),
    };
    app.report(result);
    if app.status_message.is_empty() {
        app.set_status(format!("{screen}"));
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Income => scroll_down(
            &mut app.income_index,
            &mut app.income_scroll,
            app.incomes.len(),
            page,
        ),
        Screen::Expense => {
            if app.manage_categories {
                scroll_down(
                    &mut app.category_index,
                    &mut app.category_scroll,
                    app.categories.len(),
                    page,
                );
            } else {
                scroll_down(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.expenses.len(),
                    page,
                );
            }
        }
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Income => scroll_up(&mut app.income_index, &mut app.income_scroll),
        Screen::Expense => {
            if app.manage_categories {
                scroll_up(&mut app.category_index, &mut app.category_scroll);
            } else {
                scroll_up(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        _ => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Income => scroll_to_top(&mut app.income_index, &mut app.income_scroll),
        Screen::Expense => {
            if app.manage_categories {
                scroll_to_top(&mut app.category_index, &mut app.category_scroll);
            } else {
                scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Income => scroll_to_bottom(
            &mut app.income_index,
            &mut app.income_scroll,
            app.incomes.len(),
            page,
        ),
        Screen::Expense => {
            if app.manage_categories {
                scroll_to_bottom(
                    &mut app.category_index,
                    &mut app.category_scroll,
                    app.categories.len(),
                    page,
                );
            } else {
                scroll_to_bottom(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.expenses.len(),
                    page,
                );
            }
        }
        _ => {}
    }
}
