use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use baby_accounts::api::ApiClient;
use baby_accounts::cli::{
    handle_config_command, handle_entity_command, handle_report_command,
    handle_transaction_command, ConfigCommands, EntityCommands, ReportArgs, TransactionCommands,
};
use baby_accounts::config::{AccountsPaths, Settings};
use baby_accounts::logging;
use baby_accounts::models::EntityKind;
use baby_accounts::services::TransactionSnapshot;

#[derive(Parser)]
#[command(
    name = "baby-accounts",
    version,
    about = "Command-line client for the Baby Accounts bookkeeping API",
    long_about = "Baby Accounts records business transactions against a REST backend. \
                  Manage businesses, ledgers, heads, modes and types, record \
                  transactions, and run the filtered transaction report with its \
                  credit, debit and net balance summary."
)]
struct Cli {
    /// Root of the REST API, overriding the config file
    #[arg(long, global = true, env = "BABY_ACCOUNTS_API_URL")]
    api_url: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Business management commands
    #[command(subcommand)]
    Business(EntityCommands),

    /// Transaction type management commands
    #[command(subcommand)]
    Type(EntityCommands),

    /// Ledger management commands
    #[command(subcommand)]
    Ledger(EntityCommands),

    /// Head management commands
    #[command(subcommand)]
    Head(EntityCommands),

    /// Payment mode management commands
    #[command(subcommand)]
    Mode(EntityCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Filtered transaction report with credit/debit totals
    Report(ReportArgs),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = AccountsPaths::new()?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Baby Accounts - bookkeeping from the command line");
            println!();
            println!("Run 'baby-accounts --help' for usage information.");
            println!("Run 'baby-accounts report' for the transaction report.");
            return Ok(());
        }
    };

    // Config commands must work even when the stored settings are broken
    let command = match command {
        Commands::Config(cmd) => {
            let file_settings = Settings::load_or_default(&paths);
            let effective = file_settings.clone().with_api_url(cli.api_url);
            handle_config_command(&paths, file_settings, &effective.api_url, cmd)?;
            return Ok(());
        }
        other => other,
    };

    let settings = Settings::load_or_create(&paths)?.with_api_url(cli.api_url);
    tracing::debug!(api_url = %settings.api_url, "settings loaded");

    let client = ApiClient::from_settings(&settings)?;

    match command {
        Commands::Business(cmd) => handle_entity_command(&client, EntityKind::Business, cmd).await?,
        Commands::Type(cmd) => handle_entity_command(&client, EntityKind::Type, cmd).await?,
        Commands::Ledger(cmd) => handle_entity_command(&client, EntityKind::Ledger, cmd).await?,
        Commands::Head(cmd) => handle_entity_command(&client, EntityKind::Head, cmd).await?,
        Commands::Mode(cmd) => handle_entity_command(&client, EntityKind::Mode, cmd).await?,
        Commands::Transaction(cmd) => handle_transaction_command(&client, &settings, cmd).await?,
        Commands::Report(args) => {
            let snapshot = TransactionSnapshot::load(&client)
                .await
                .context("Failed to load transactions")?;
            handle_report_command(&snapshot, &settings, args)?;
        }
        Commands::Config(_) => {}
    }

    Ok(())
}
