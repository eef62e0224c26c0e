use chrono::Local;
use rust_decimal::Decimal;

use crate::auth::Session;
use crate::error::Result;
use crate::ledger::{self, DATE_FORMAT};
use crate::models::{Category, ExpenseRecord, IncomeRecord};
use crate::report::{self, Totals};
use crate::store::Store;
use crate::ui::forms::{Field, Form};

/// The pages a signed-in user can be on. The login view is not a
/// `Screen`: it renders whenever the session is anonymous, which is the
/// whole routing gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Income,
    Expense,
    Summary,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Income, Self::Expense, Self::Summary]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Summary => write!(f, "Summary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "INSERT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Which pane of the login view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthPane {
    SignIn,
    Register,
}

/// Pending action that requires confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    Logout,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) session: Session,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    // Login view
    pub(crate) auth_pane: AuthPane,
    pub(crate) login_form: Form,
    pub(crate) register_form: Form,

    // Entry forms
    pub(crate) income_form: Form,
    pub(crate) expense_form: Form,
    pub(crate) category_form: Form,
    pub(crate) expense_category_index: usize,
    pub(crate) manage_categories: bool,

    // Cached rows for the current user
    pub(crate) incomes: Vec<IncomeRecord>,
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) categories: Vec<Category>,

    // Summary data
    pub(crate) totals: Totals,
    pub(crate) category_breakdown: Vec<(String, Decimal)>,
    pub(crate) monthly_income: Vec<(String, Decimal)>,

    // List cursors
    pub(crate) income_index: usize,
    pub(crate) income_scroll: usize,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) category_index: usize,
    pub(crate) category_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(currency: String) -> Self {
        let today = today();
        let mut income_form = Form::new(vec![
            Field::text("Date"),
            Field::text("Source"),
            Field::text("Amount"),
        ]);
        income_form.set_value(0, today.clone());
        let mut expense_form = Form::new(vec![
            Field::text("Date"),
            Field::text("Amount"),
            Field::text("Note"),
        ]);
        expense_form.set_value(0, today);

        Self {
            running: true,
            session: Session::new(),
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency,

            auth_pane: AuthPane::SignIn,
            login_form: Form::new(vec![Field::text("Username"), Field::secret("Password")]),
            register_form: Form::new(vec![Field::text("Username"), Field::secret("Password")]),

            income_form,
            expense_form,
            category_form: Form::new(vec![Field::text("Name")]),
            expense_category_index: 0,
            manage_categories: false,

            incomes: Vec::new(),
            expenses: Vec::new(),
            categories: Vec::new(),

            totals: Totals::default(),
            category_breakdown: Vec::new(),
            monthly_income: Vec::new(),

            income_index: 0,
            income_scroll: 0,
            expense_index: 0,
            expense_scroll: 0,
            category_index: 0,
            category_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh_income(&mut self, store: &Store) -> Result<()> {
        self.incomes = ledger::list_income(store, &self.session.username)?;
        if self.income_index >= self.incomes.len() {
            self.income_index = self.incomes.len().saturating_sub(1);
        }
        Ok(())
    }

    pub(crate) fn refresh_expenses(&mut self, store: &Store) -> Result<()> {
        self.expenses = ledger::list_expenses(store, &self.session.username)?;
        self.categories = ledger::list_categories(store, &self.session.username)?;
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.category_index >= self.categories.len() {
            self.category_index = self.categories.len().saturating_sub(1);
        }
        if self.expense_category_index >= self.categories.len() {
            self.expense_category_index = 0;
        }
        Ok(())
    }

    pub(crate) fn refresh_summary(&mut self, store: &Store) -> Result<()> {
        let incomes = ledger::list_income(store, &self.session.username)?;
        let expenses = ledger::list_expenses(store, &self.session.username)?;
        self.totals = report::totals(&incomes, &expenses);
        self.category_breakdown = report::expenses_by_category(&expenses);
        self.monthly_income = report::income_by_month(&incomes);
        Ok(())
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) -> Result<()> {
        self.refresh_income(store)?;
        self.refresh_expenses(store)?;
        self.refresh_summary(store)?;
        Ok(())
    }

    /// The category the expense form currently points at.
    pub(crate) fn selected_expense_category(&self) -> Option<&str> {
        self.categories
            .get(self.expense_category_index)
            .map(|c| c.category.as_str())
    }

    pub(crate) fn cycle_expense_category(&mut self, delta: i32) {
        let len = self.categories.len();
        if len == 0 {
            return;
        }
        self.expense_category_index = if delta >= 0 {
            (self.expense_category_index + 1) % len
        } else if self.expense_category_index == 0 {
            len - 1
        } else {
            self.expense_category_index - 1
        };
    }

    /// The form Insert mode edits on the current screen, if any.
    pub(crate) fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.screen {
            Screen::Income => Some(&mut self.income_form),
            Screen::Expense => {
                if self.manage_categories {
                    Some(&mut self.category_form)
                } else {
                    Some(&mut self.expense_form)
                }
            }
            _ => None,
        }
    }

    /// Reset entry forms to a blank state with today's date prefilled.
    pub(crate) fn reset_entry_forms(&mut self) {
        let today = today();
        self.income_form.clear();
        self.income_form.set_value(0, today.clone());
        self.expense_form.clear();
        self.expense_form.set_value(0, today);
        self.category_form.clear();
    }

    /// Drop everything tied to the signed-in user and return to the
    /// login view.
    pub(crate) fn end_session(&mut self) {
        self.session.logout();
        self.screen = Screen::Dashboard;
        self.input_mode = InputMode::Normal;
        self.manage_categories = false;
        self.auth_pane = AuthPane::SignIn;
        self.login_form.clear();
        self.register_form.clear();
        self.reset_entry_forms();
        self.incomes.clear();
        self.expenses.clear();
        self.categories.clear();
        self.totals = Totals::default();
        self.category_breakdown.clear();
        self.monthly_income.clear();
        self.income_index = 0;
        self.income_scroll = 0;
        self.expense_index = 0;
        self.expense_scroll = 0;
        self.category_index = 0;
        self.category_scroll = 0;
        self.expense_category_index = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Surface a failed refresh in the status bar instead of letting it
    /// unwind the event loop.
    pub(crate) fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            if e.is_storage() {
                self.set_status(format!("⚠ {e}"));
            } else {
                self.set_status(e.to_string());
            }
        }
    }
}

pub(crate) fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
