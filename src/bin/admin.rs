//! CLI administration tool for the rewards service.
//!
//! Provides commands for managing accounts and restaurants and performing
//! database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List accounts with their beneficiaries
//! cargo run --bin admin -- account list
//!
//! # Create an account
//! cargo run --bin admin -- account create --number 123456789 --name "Keith and Keri Donald"
//!
//! # Register a restaurant with an 8% benefit rate
//! cargo run --bin admin -- restaurant create --merchant-number 1234567890 \
//!     --name AppleBees --benefit 8%
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::PgPool;

use rewards_service::domain::entities::{Account, Restaurant};
use rewards_service::domain::money::Percentage;
use rewards_service::domain::repositories::{AccountRepository, RestaurantRepository};
use rewards_service::infrastructure::persistence::{PgAccountRepository, PgRestaurantRepository};

/// CLI tool for managing the rewards service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage reward accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage participating restaurants
    Restaurant {
        #[command(subcommand)]
        action: RestaurantAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account
    Create {
        /// Nine-digit account number
        #[arg(long)]
        number: String,

        /// Account holder name
        #[arg(long)]
        name: String,

        /// Credit card linked to the account (16 digits)
        #[arg(long)]
        credit_card: Option<String>,
    },

    /// List all accounts with their beneficiaries
    List,
}

/// Restaurant management subcommands.
#[derive(Subcommand)]
enum RestaurantAction {
    /// Register a restaurant
    Create {
        /// Ten-digit merchant number
        #[arg(long)]
        merchant_number: String,

        /// Restaurant name
        #[arg(long)]
        name: String,

        /// Benefit rate, e.g. "8%" or "0.08"
        #[arg(long)]
        benefit: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &pool).await?,
        Commands::Restaurant { action } => handle_restaurant_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgAccountRepository::new(Arc::new(pool.clone())));

    match action {
        AccountAction::Create {
            number,
            name,
            credit_card,
        } => {
            let mut account = Account::new(number, name);
            account.credit_card_number = credit_card;

            let created = repo
                .save(&account)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

            println!(
                "Created account {} ({}), id {}",
                created.number,
                created.name,
                created.entity_id.unwrap_or_default()
            );
        }
        AccountAction::List => {
            let accounts = repo
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

            if accounts.is_empty() {
                println!("No accounts found");
                return Ok(());
            }

            for account in &accounts {
                println!("{}  {}", account.number, account.name);
                for beneficiary in account.beneficiaries() {
                    println!(
                        "    {:<30} {}",
                        beneficiary.name, beneficiary.allocation_percentage
                    );
                }
            }
            println!();
            println!("Total: {}", accounts.len());
        }
    }

    Ok(())
}

/// Dispatches restaurant management commands.
async fn handle_restaurant_action(action: RestaurantAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgRestaurantRepository::new(Arc::new(pool.clone())));

    match action {
        RestaurantAction::Create {
            merchant_number,
            name,
            benefit,
        } => {
            let benefit: Percentage = benefit
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid benefit rate: {}", e))?;

            let restaurant = Restaurant::new(merchant_number, name, benefit);
            let created = repo
                .save(&restaurant)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create restaurant: {}", e))?;

            println!(
                "Created restaurant {} ({}) with benefit {}",
                created.merchant_number, created.name, created.benefit_percentage
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("Database connection OK");
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("PostgreSQL: {}", version);
        }
    }

    Ok(())
}
