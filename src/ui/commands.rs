use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::ledger;
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinTrack", cmd_quit, r);
    register_command!("quit", "Quit FinTrack", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("i", "Go to Income", cmd_income, r);
    register_command!("income", "Go to Income", cmd_income, r);
    register_command!("e", "Go to Expense", cmd_expense, r);
    register_command!("expense", "Go to Expense", cmd_expense, r);
    register_command!("s", "Go to Summary", cmd_summary, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("logout", "Log out of the current session", cmd_logout, r);
    register_command!(
        "category",
        "Add a category (e.g. :category Groceries)",
        cmd_category,
        r
    );
    register_command!(
        "currency",
        "Set the currency label (e.g. :currency USD)",
        cmd_currency,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    let result = app.refresh_summary(store);
    app.report(result);
    Ok(())
}

fn cmd_income(_args: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    app.screen = Screen::Income;
    let result = app.refresh_income(store);
    app.report(result);
    Ok(())
}

fn cmd_expense(_args: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    app.screen = Screen::Expense;
    let result = app.refresh_expenses(store);
    app.report(result);
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    let result = app.refresh_summary(store);
    app.report(result);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_logout(_args: &str, app: &mut App, _store: &Store) -> anyhow::Result<()> {
    app.confirm_message = format!("Log out {}?", app.session.username);
    app.pending_action = Some(PendingAction::Logout);
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, store: &Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :category <name>");
        return Ok(());
    }

    let username = app.session.username.clone();
    match ledger::add_category(store, &username, args) {
        Ok(()) => {
            app.set_status(format!("Category '{args}' added"));
            let result = app.refresh_expenses(store);
            app.report(result);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_currency(args: &str, app: &mut App, _store: &Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!("Current currency: {}", app.currency));
        return Ok(());
    }

    app.currency = args.to_string();
    let mut settings = crate::settings::load_settings();
    settings.currency = app.currency.clone();
    match crate::settings::save_settings(&settings) {
        Ok(()) => app.set_status(format!("Currency set to {args}")),
        Err(e) => app.set_status(format!("Currency set for this session only: {e}")),
    }
    Ok(())
}
