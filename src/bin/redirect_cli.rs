//! CLI tool for inspecting short links from a terminal.
//!
//! Runs the same redirect handler the HTTP and Lambda hosts use, against the
//! store configured through the environment.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a path as a request would
//! cargo run --bin redirect-cli -- resolve /abc123
//!
//! # Evaluate expiry at a given instant (Unix seconds)
//! cargo run --bin redirect-cli -- resolve /abc123 --at 1700000000
//!
//! # Show which object a path maps to
//! cargo run --bin redirect-cli -- key /abc123
//!
//! # Check that the bucket is reachable
//! cargo run --bin redirect-cli -- check
//!
//! # Show configuration
//! cargo run --bin redirect-cli -- config
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use url_redirector::application::services::RedirectService;
use url_redirector::config::{self, Config, mask_credentials};
use url_redirector::domain::entities::InvocationRequest;
use url_redirector::domain::{Clock, FixedClock, ShortCode, SystemClock};
use url_redirector::server;

/// CLI tool for inspecting url-redirector links.
#[derive(Parser)]
#[command(name = "redirect-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path to its redirect response
    Resolve {
        /// Request path, e.g. /abc123
        path: String,

        /// Evaluate expiry at this Unix time instead of now
        #[arg(long)]
        at: Option<i64>,
    },

    /// Show the bucket and object key a path maps to
    Key {
        /// Request path, e.g. /abc123
        path: String,
    },

    /// Check that the configured bucket is reachable
    Check,

    /// Show the loaded configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Resolve { path, at } => resolve(&config, &path, at).await?,
        Commands::Key { path } => show_key(&config, &path)?,
        Commands::Check => check(&config).await?,
        Commands::Config => show_config(&config),
    }

    Ok(())
}

/// Runs the redirect handler for `path` and prints the response.
async fn resolve(config: &Config, path: &str, at: Option<i64>) -> Result<()> {
    let clock: Arc<dyn Clock> = match at {
        Some(ts) => Arc::new(FixedClock(ts)),
        None => Arc::new(SystemClock),
    };

    let store = server::build_store(config).await;
    let service = RedirectService::new(store, clock, config.bucket.clone());

    let response = match service.handle(&InvocationRequest::new(path)).await {
        Ok(response) => response,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            anyhow::bail!("{} ({})", e.code(), e.status_code());
        }
    };

    let status = response.status_code.to_string();
    match response.status_code {
        302 => println!("{} {}", "Status:".bright_white(), status.green().bold()),
        _ => println!("{} {}", "Status:".bright_white(), status.yellow().bold()),
    }

    if let Some(location) = response.location() {
        println!("{} {}", "Location:".bright_white(), location.cyan());
    }

    if let Some(body) = &response.body {
        println!("{} {}", "Body:".bright_white(), body);
    }

    Ok(())
}

/// Prints the storage location for `path` without touching the store.
fn show_key(config: &Config, path: &str) -> Result<()> {
    let code = ShortCode::from_path(path).context("Path contains no short code")?;

    println!("{} {}", "Code:".bright_white(), code.as_str().cyan());
    println!("{} {}", "Bucket:".bright_white(), config.bucket);
    println!("{} {}", "Key:".bright_white(), code.storage_key().bright_yellow());

    Ok(())
}

/// Checks bucket connectivity.
async fn check(config: &Config) -> Result<()> {
    let store = server::build_store(config).await;

    match store.health_check(&config.bucket).await {
        Ok(()) => {
            println!(
                "{} {} bucket {} is reachable",
                "✓".green().bold(),
                store.backend_name(),
                config.bucket.cyan()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            anyhow::bail!("storage check failed")
        }
    }
}

fn show_config(config: &Config) {
    println!("{}", "Configuration:".bright_white().bold());
    println!("  Storage backend: {}", config.storage_backend.to_string().cyan());
    println!("  Bucket:          {}", config.bucket.cyan());
    println!("  Storage root:    {}", config.storage_root.display());
    match &config.s3_endpoint_url {
        Some(url) => println!("  S3 endpoint:     {}", mask_credentials(url)),
        None => println!("  S3 endpoint:     default"),
    }
    println!("  Listen address:  {}", config.listen_addr);
    println!("  Log format:      {}", config.log_format);
}
