//! Subcommand handlers. Each one drives a page controller and prints the
//! result; messages for rejected submissions go to stderr, one per line.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use splitmates_client::app::{History, Route};
use splitmates_client::config::ClientConfig;
use splitmates_client::net::api::ApiClient;
use splitmates_client::net::expenses;
use splitmates_client::net::types::{Expense, Group, Member};
use splitmates_client::pages::expense::CreateExpensePage;
use splitmates_client::pages::group::GroupPage;
use splitmates_client::pages::groups::GroupsPage;
use splitmates_client::pages::login::LoginPage;
use splitmates_client::pages::register::RegisterPage;
use splitmates_client::pages::{PageError, Submit};
use splitmates_client::state::auth::AuthSession;
use splitmates_client::state::session::{FileTokenStore, Session};
use splitmates_client::util::auth::enter;
use splitmates_client::util::form::Field;
use splitmates_client::util::password_strength;
use splitmates_client::util::validation::Validator;

use crate::{Cli, CliError, Command, ExpensesSubcommand, GroupsSubcommand, RegisterArgs};

struct Context {
    config: ClientConfig,
    auth: AuthSession,
    history: History,
}

impl Context {
    fn new(api_url: Option<String>, home: Option<PathBuf>) -> Result<Self, CliError> {
        let config = ClientConfig::from_parts(api_url, home)?;
        let session = Session::new(Arc::new(FileTokenStore::new(config.session_path())));
        let history = History::default();
        let api = ApiClient::from_config(&config, session, Arc::new(history.clone()))?;
        tracing::debug!(api_url = %config.api_url, home = %config.home.display(), "client configured");
        Ok(Self { config, auth: AuthSession::new(api), history })
    }

    fn api(&self) -> &ApiClient {
        self.auth.api()
    }

    /// Pass `route` through the guard before touching the backend.
    fn require(&self, route: Route) -> Result<(), CliError> {
        if enter(self.auth.session(), &self.history, route) {
            Ok(())
        } else {
            Err(PageError::Redirected(self.history.current()).into())
        }
    }
}

pub(crate) async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { api_url, home, command } = cli;
    // Only commands that talk to the backend or the token slot need config.
    let connect = move || Context::new(api_url, home);
    match command {
        Command::PasswordStrength { password } => {
            print_strength(&password);
            Ok(())
        }
        Command::Login { email, password } => login(&connect()?, email, password).await,
        Command::Register(args) => register(&connect()?, args).await,
        Command::Logout => {
            connect()?.auth.logout()?;
            println!("Signed out.");
            Ok(())
        }
        Command::Status => {
            status(&connect()?);
            Ok(())
        }
        Command::Groups(groups) => run_groups(&connect()?, groups.command).await,
        Command::Expenses(expenses) => run_expenses(&connect()?, expenses.command).await,
    }
}

// =============================================================================
// AUTH
// =============================================================================

async fn login(ctx: &Context, email: String, password: Option<String>) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    let mut page = LoginPage::new(ctx.auth.clone());
    page.handle_change(Field::Email, &email, false);
    page.handle_change(Field::Password, &password, false);
    finish(page.submit().await, page.validator())?;
    println!("Signed in as {email}.");
    Ok(())
}

async fn register(ctx: &Context, args: RegisterArgs) -> Result<(), CliError> {
    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };
    let confirm = args.confirm_password.unwrap_or_else(|| password.clone());

    let mut page = RegisterPage::new(ctx.auth.clone());
    page.handle_change(Field::FirstName, &args.first_name);
    page.handle_change(Field::LastName, &args.last_name);
    page.handle_change(Field::Email, &args.email);
    page.handle_change(Field::Password, &password);
    page.handle_change(Field::ConfirmPassword, &confirm);

    let strength = page.strength();
    println!("Password strength: {} ({})", strength.label, strength.feedback());

    let account = finish(page.submit().await, page.validator())?;
    println!("Registered {}. Log in to continue.", account.email);
    Ok(())
}

fn status(ctx: &Context) {
    let snapshot = ctx.auth.session().snapshot();
    if snapshot.is_authenticated {
        println!("Signed in.");
    } else {
        println!("Signed out.");
    }
    println!("Session file: {}", ctx.config.session_path().display());
    println!("API: {}", ctx.config.api_url);
}

fn print_strength(password: &str) {
    let strength = password_strength::score(password);
    println!("{} ({}/5)", strength.label, strength.score);
    println!("{}", strength.feedback());
}

fn read_password() -> Result<String, CliError> {
    eprint!("Password: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

// =============================================================================
// GROUPS
// =============================================================================

async fn run_groups(ctx: &Context, command: GroupsSubcommand) -> Result<(), CliError> {
    let mut page = GroupsPage::new(ctx.api().clone());
    match command {
        GroupsSubcommand::List => {
            let groups = page.load().await?;
            if groups.is_empty() {
                println!("No groups yet.");
            }
            for group in groups {
                print_group(group);
            }
            Ok(())
        }
        GroupsSubcommand::Create { name, description } => {
            ctx.require(Route::Groups)?;
            page.handle_create_change(Field::GroupName, &name);
            page.handle_create_change(Field::Description, description.as_deref().unwrap_or_default());
            let outcome = page.submit_create().await;
            let group = finish(outcome, page.create_validator())?;
            println!("Created group:");
            print_group(&group);
            Ok(())
        }
        GroupsSubcommand::Join { invite_code } => {
            ctx.require(Route::Groups)?;
            page.handle_join_change(&invite_code);
            let outcome = page.submit_join().await;
            let group = finish(outcome, page.join_validator())?;
            println!("Joined group:");
            print_group(&group);
            Ok(())
        }
        GroupsSubcommand::Show { group_id } => {
            let mut page = GroupPage::new(ctx.api().clone(), group_id);
            page.load().await?;
            if let Some(group) = page.group() {
                print_group(group);
                if let Some(description) = group.description.as_deref().filter(|d| !d.is_empty()) {
                    println!("  {description}");
                }
            }
            println!("Members:");
            for member in page.members() {
                print_member(member);
            }
            println!("Expenses:");
            for expense in page.expenses() {
                print_expense(expense);
            }
            Ok(())
        }
    }
}

// =============================================================================
// EXPENSES
// =============================================================================

async fn run_expenses(ctx: &Context, command: ExpensesSubcommand) -> Result<(), CliError> {
    match command {
        ExpensesSubcommand::List { group_id } => {
            ctx.require(Route::Group(group_id.clone()))?;
            let listed = expenses::list_expenses(ctx.api(), &group_id).await?;
            if listed.is_empty() {
                println!("No expenses yet.");
            }
            for expense in &listed {
                print_expense(expense);
            }
            Ok(())
        }
        ExpensesSubcommand::Show { expense_id } => {
            ctx.require(Route::Groups)?;
            let expense = expenses::get_expense(ctx.api(), &expense_id).await?;
            print_expense(&expense);
            Ok(())
        }
        ExpensesSubcommand::Create { group_id, name, amount, expense_type, split_method, participants } => {
            let mut page = CreateExpensePage::new(ctx.api().clone(), group_id);
            page.load_members().await?;
            for user_id in participants {
                page.add_participant(&user_id)
                    .map_err(|source| CliError::Participant { user_id: user_id.clone(), source })?;
            }
            page.handle_change(Field::ExpenseName, &name);
            page.handle_change(Field::Amount, &amount);
            page.handle_change(Field::ExpenseType, &expense_type);
            page.handle_change(Field::SplitMethod, &split_method);

            let created = finish(page.submit().await, page.validator())?;
            println!("Created expense:");
            print_expense(&created.expense);
            for share in &created.shares {
                let who = page
                    .members()
                    .iter()
                    .find(|m| m.id == share.user_id)
                    .map_or_else(|| share.user_id.clone(), Member::display_name);
                println!("  {who} owes {:.2}", share.amount_owed);
            }
            Ok(())
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Unwrap a submit outcome, printing field and banner messages on failure.
fn finish<T>(outcome: Submit<T>, validator: &Validator) -> Result<T, CliError> {
    match outcome {
        Submit::Done(value) => Ok(value),
        Submit::Busy => Err(CliError::Busy),
        Submit::Invalid | Submit::Rejected => {
            for (field, message) in validator.visible_errors() {
                eprintln!("{}: {message}", field.name());
            }
            if let Some(general) = validator.general() {
                eprintln!("{general}");
            }
            Err(CliError::Rejected)
        }
    }
}

fn print_group(group: &Group) {
    let code = group.invite_code.as_deref().unwrap_or("-");
    println!("{}  {}  (code {code})", group.id, group.name);
}

fn print_member(member: &Member) {
    println!("  [{}] {}  {}", member.initials(), member.display_name(), member.email);
}

fn print_expense(expense: &Expense) {
    let settled = if expense.settled { "settled" } else { "open" };
    let created = expense.created_at.as_ref().map(ToString::to_string).unwrap_or_default();
    println!(
        "{}  {}  {:.2}  {}/{}  {settled}  {created}",
        expense.id, expense.name, expense.amount, expense.expense_type, expense.split_method
    );
}
