//! CLI administration tool for clipurl.
//!
//! Provides commands for managing accounts without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new account and print its API key
//! cargo run --bin admin -- create-account --email you@example.com --name "You"
//!
//! # List all accounts
//! cargo run --bin admin -- list-accounts
//!
//! # Delete an account and everything it owns
//! cargo run --bin admin -- delete-account --email you@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use clipurl::domain::entities::NewAccount;
use clipurl::domain::repositories::AccountRepository;
use clipurl::infrastructure::persistence::PgAccountRepository;
use clipurl::utils::api_key::generate_api_key;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing clipurl accounts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account and generate its API key
    CreateAccount {
        /// Contact email, must be unique
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },

    /// List all accounts
    ListAccounts,

    /// Delete an account together with its links and click history
    DeleteAccount {
        /// Email of the account to delete
        #[arg(short, long)]
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = Arc::new(PgAccountRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::CreateAccount { email, name } => create_account(repo, email, name).await?,
        Commands::ListAccounts => list_accounts(repo).await?,
        Commands::DeleteAccount { email, yes } => delete_account(repo, email, yes).await?,
    }

    Ok(())
}

/// Creates an account and prints its API key.
///
/// The key is shown once at creation; it is stored in plain form because
/// lookups happen on every authenticated request.
async fn create_account(
    repo: Arc<PgAccountRepository>,
    email: String,
    name: String,
) -> Result<()> {
    println!("{}", "🔑 Create Account".bright_blue().bold());
    println!();

    let api_key = generate_api_key();

    let account = repo
        .create(NewAccount {
            email,
            name,
            api_key: Some(api_key.clone()),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!("{}", "✅ Account created!".green().bold());
    println!();
    println!("  Id:      {}", account.id.to_string().cyan());
    println!("  Email:   {}", account.email.cyan());
    println!("  API key: {}", api_key.bright_yellow().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        api_key.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all accounts.
async fn list_accounts(repo: Arc<PgAccountRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let accounts = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("  {}", "No accounts found".dimmed());
        return Ok(());
    }

    println!(
        "  {:<38} {:<30} {:<20} {}",
        "Id".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).dimmed());

    for account in accounts {
        println!(
            "  {:<38} {:<30} {:<20} {}",
            account.id,
            account.email.cyan(),
            account.name,
            account.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

/// Deletes an account, its links, and its click history.
async fn delete_account(repo: Arc<PgAccountRepository>, email: String, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Account".bright_blue().bold());
    println!();

    let account = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up account: {}", e))?
        .with_context(|| format!("No account with email '{}'", email))?;

    println!("  Id:    {}", account.id.to_string().cyan());
    println!("  Email: {}", account.email.cyan());
    println!("  Name:  {}", account.name);
    println!();
    println!(
        "{}",
        "⚠️  This removes the account, all of its links, and their click history."
            .red()
            .bold()
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this account?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_cascade(account.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    if deleted {
        println!("{}", "✅ Account deleted".green().bold());
    } else {
        println!("{}", "❌ Account was already gone".red());
    }

    Ok(())
}
