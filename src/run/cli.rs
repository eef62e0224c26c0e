use anyhow::Result;

use crate::ledger;
use crate::report;
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &Store, currency: &str) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], store, currency),
        "users" => cli_users(store),
        "export" => cli_export(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinTrack — multi-user personal finance tracker");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary <username> [YYYY-MM]  Print totals and category breakdown");
    println!("  users                         List registered usernames");
    println!("  export <username> [path]      Export a user's expenses to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(args: &[String], store: &Store, currency: &str) -> Result<()> {
    let Some(username) = args.first() else {
        anyhow::bail!("Usage: fintrack summary <username> [YYYY-MM]");
    };
    let month = args.get(1).map(String::as_str);

    let mut incomes = ledger::list_income(store, username)?;
    let mut expenses = ledger::list_expenses(store, username)?;
    if let Some(m) = month {
        incomes.retain(|r| r.date.starts_with(m));
        expenses.retain(|r| r.date.starts_with(m));
    }

    let totals = report::totals(&incomes, &expenses);
    match month {
        Some(m) => println!("Summary for {username} — {m}"),
        None => println!("Summary for {username} — all time"),
    }
    println!();
    println!("  Total Income   {}", format_amount(totals.total_income, currency));
    println!("  Total Expense  {}", format_amount(totals.total_expense, currency));
    println!("  Net Balance    {}", format_amount(totals.net_balance, currency));

    let breakdown = report::expenses_by_category(&expenses);
    if !breakdown.is_empty() {
        println!();
        println!("Expenses by category:");
        for (name, amount) in &breakdown {
            println!("  {name:<24} {}", format_amount(*amount, currency));
        }
    }

    let monthly = report::income_by_month(&incomes);
    if !monthly.is_empty() {
        println!();
        println!("Income by month:");
        for (m, amount) in &monthly {
            println!("  {m}  {}", format_amount(*amount, currency));
        }
    }

    Ok(())
}

fn cli_users(store: &Store) -> Result<()> {
    let users = store.load_users()?;
    if users.is_empty() {
        println!("No users registered yet.");
        return Ok(());
    }
    for user in &users {
        println!("{}", user.username);
    }
    Ok(())
}

fn cli_export(args: &[String], store: &Store) -> Result<()> {
    let Some(username) = args.first() else {
        anyhow::bail!("Usage: fintrack export <username> [path]");
    };
    let default_path = format!("expenses-{username}.csv");
    let path = args.get(1).map(String::as_str).unwrap_or(&default_path);

    let expenses = ledger::list_expenses(store, username)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["date", "category", "amount", "note"])?;
    for rec in &expenses {
        wtr.write_record([
            rec.date.as_str(),
            rec.category.as_str(),
            &rec.amount.map(|a| a.to_string()).unwrap_or_default(),
            rec.note.as_str(),
        ])?;
    }
    wtr.flush()?;

    println!("Exported {} expenses to {path}", expenses.len());
    Ok(())
}
