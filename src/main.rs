//! `splitmates` command-line front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each subcommand drives one page controller from `splitmates-client`
//! against a live backend. The bearer token lives in the durable slot under
//! `--home`, so `login` in one invocation authenticates the next.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use splitmates_client::config::ConfigError;
use splitmates_client::net::api::ApiError;
use splitmates_client::net::transport::TransportError;
use splitmates_client::pages::PageError;
use splitmates_client::pages::expense::ParticipantError;
use splitmates_client::state::auth::AuthError;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Page(#[from] PageError),
    #[error("{}", .0.message())]
    Api(#[from] ApiError),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("failed to read password: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("cannot add participant {user_id}: {source}")]
    Participant { user_id: String, source: ParticipantError },
    #[error("submission failed")]
    Rejected,
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Parser, Debug)]
#[command(name = "splitmates", about = "SplitMates expense-splitting client")]
struct Cli {
    #[arg(long, env = "SPLITMATES_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "SPLITMATES_HOME")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SPLITMATES_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account.
    Register(RegisterArgs),
    /// Forget the stored access token.
    Logout,
    /// Show whether a token is stored.
    Status,
    /// Score a password without sending it anywhere.
    PasswordStrength { password: String },
    Groups(GroupsCommand),
    Expenses(ExpensesCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "SPLITMATES_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// Defaults to the password.
    #[arg(long)]
    confirm_password: Option<String>,
}

#[derive(Args, Debug)]
struct GroupsCommand {
    #[command(subcommand)]
    command: GroupsSubcommand,
}

#[derive(Subcommand, Debug)]
enum GroupsSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Join {
        invite_code: String,
    },
    Show {
        group_id: String,
    },
}

#[derive(Args, Debug)]
struct ExpensesCommand {
    #[command(subcommand)]
    command: ExpensesSubcommand,
}

#[derive(Subcommand, Debug)]
enum ExpensesSubcommand {
    List {
        group_id: String,
    },
    Show {
        expense_id: String,
    },
    Create {
        group_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        expense_type: String,
        #[arg(long, default_value = "equal")]
        split_method: String,
        /// User id of a group member; repeat for each participant.
        #[arg(long = "participant")]
        participants: Vec<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
