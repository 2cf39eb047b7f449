//! CLI administration tool for the Short Path service.
//!
//! Inspects and creates URL mappings and performs database checks without
//! going through the HTTP API. Creation goes through the same
//! [`UrlService`] as the server, so every validation rule applies.
//!
//! # Usage
//!
//! ```bash
//! # List all short URLs
//! cargo run --bin admin -- urls list
//!
//! # Show a single mapping
//! cargo run --bin admin -- urls show abc123
//!
//! # Create a short URL (prompts for the URL when --url is omitted)
//! cargo run --bin admin -- urls create --url example.com --id promo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): origin printed for created short URLs
//!   (default: `http://localhost:8000`)

use shortpath::application::services::UrlService;
use shortpath::infrastructure::persistence::PgUrlRepository;
use shortpath::utils::id_generator::RandomIdGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// CLI tool for managing Short Path.
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
    /// Inspect and create short URLs
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List all short URLs, most recent first
    List,

    /// Show the mapping for a short ID
    Show {
        /// Short ID to look up
        shortid: String,
    },

    /// Create a short URL
    Create {
        /// URL to shorten (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Custom short ID (generated if omitted)
        #[arg(short, long)]
        id: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Urls { action } => handle_url_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn url_service(pool: &PgPool) -> UrlService {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    UrlService::new(repository, Arc::new(RandomIdGenerator))
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let service = url_service(pool);

    match action {
        UrlAction::List => list_urls(&service).await?,
        UrlAction::Show { shortid } => show_url(&service, &shortid).await?,
        UrlAction::Create { url, id, yes } => create_url(&service, url, id, yes).await?,
    }

    Ok(())
}

/// Lists all mappings.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   Short ID         Created           Original URL
///   ─────────────────────────────────────────────────────────────
///   promo            2025-01-15 10:30  https://example.com/spring-sale
///   Xk3_a9Qm-Zt1     2025-01-14 08:02  https://rust-lang.org
/// ```
async fn list_urls(service: &UrlService) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let mappings = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        println!();
        println!(
            "  Create one with: {} admin urls create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<16} {:<17} {}",
        "Short ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<16} {:<17} {}",
            mapping.identifier.cyan(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows where a short ID redirects.
async fn show_url(service: &UrlService, shortid: &str) -> Result<()> {
    let original_url = service
        .resolve(shortid)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", shortid, e))?;

    println!("  {} → {}", shortid.cyan(), original_url.bright_white());

    Ok(())
}

/// Creates a short URL with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Display details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Create through [`UrlService`]
/// 5. Display the short URL
async fn create_url(
    service: &UrlService,
    url: Option<String>,
    id: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short URL".bright_blue().bold());
    println!();

    let original_url = match url {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("URL to shorten").interact_text()?,
    };

    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    println!();
    println!("{}", "Details:".bright_white().bold());
    println!("  URL:      {}", original_url.cyan());
    println!(
        "  Short ID: {}",
        id.as_deref().unwrap_or("(generated)").cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this short URL?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .shorten(&base_url, &original_url, id.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short URL: {}", e))?;

    println!();
    println!("{}", "✅ Short URL created successfully!".green().bold());
    println!("  {}", link.short_url.bright_yellow().bold());
    println!();

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = url_service(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    println!("  Short URLs: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
