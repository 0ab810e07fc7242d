//! Reference Data Command Line Interface
//!
//! Fetches lookup lists the way the console does and exercises the asset
//! identifier codec.
//!
//! # Usage
//!
//! ```bash
//! # One category (honours the category's default cache policy)
//! REFDATA_BASE_URL=http://localhost:8080/api refdata_cli fetch vendor_names
//!
//! # Every category, bypassing the cache
//! refdata_cli all --fresh
//!
//! # Identifier codec
//! refdata_cli encode Bangalore IT Laptop 2025 12
//! refdata_cli decode BLR-IT-LTP-2025-0012
//! refdata_cli generate --location Pune --department Finance --type Monitor
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_refdata::{
    decode, encode, AssetFormData, AssetIdGenerator, EnvToken, LookupCategory, RefDataConfig,
    ReferenceDataClient, SessionTokenProvider, StaticToken,
};

#[derive(Parser)]
#[command(name = "refdata_cli")]
#[command(version = "0.1.0")]
#[command(about = "Fetch asset console lookups and encode/decode asset identifiers")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config file (falls back to REFDATA_* environment variables)
    #[arg(long, short, global = true, env = "REFDATA_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one lookup category
    Fetch {
        /// Category name, e.g. vendor_names, existing-asset-ids
        category: LookupCategory,

        /// Skip the cache regardless of the category default
        #[arg(long)]
        fresh: bool,
    },

    /// Fetch every lookup category concurrently
    All {
        /// Skip the cache
        #[arg(long)]
        fresh: bool,
    },

    /// Clear the cache and refetch everything
    Refresh,

    /// Encode names into an asset identifier
    Encode {
        location: String,
        department: String,
        asset_type: String,
        year: i32,
        sequence: u32,
    },

    /// Decode an asset identifier into names
    Decode { id: String },

    /// Generate an identifier for a new asset
    Generate {
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long = "type")]
        asset_type: Option<String>,

        /// Purchase date, e.g. 2024-06-30
        #[arg(long)]
        purchase_date: Option<String>,
    },
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_refdata=info,refdata_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { category, fresh } => {
            let client = build_client(cli.config.as_ref())?;
            let use_cache = if fresh { Some(false) } else { None };
            print_json(&client.fetch(category, use_cache).await)
        }
        Commands::All { fresh } => {
            let client = build_client(cli.config.as_ref())?;
            print_json(&client.get_all_dropdown_data(!fresh).await)
        }
        Commands::Refresh => {
            let client = build_client(cli.config.as_ref())?;
            let bundle = client.refresh_all_dropdown_data().await;
            let snapshot = client.cache().snapshot().await;
            tracing::info!(?snapshot, "Cache refreshed");
            print_json(&bundle)
        }
        Commands::Encode {
            location,
            department,
            asset_type,
            year,
            sequence,
        } => {
            println!("{}", encode(&location, &department, &asset_type, year, sequence));
            Ok(())
        }
        Commands::Decode { id } => {
            let segments = decode(&id)
                .with_context(|| format!("'{}' is not a 5-segment asset identifier", id))?;
            print_json(&segments)
        }
        Commands::Generate {
            location,
            department,
            asset_type,
            purchase_date,
        } => {
            let form = AssetFormData {
                location,
                department,
                asset_type,
                purchase_date,
            };
            println!("{}", AssetIdGenerator::new().auto_generate(&form));
            Ok(())
        }
    }
}

fn build_client(config_path: Option<&PathBuf>) -> Result<ReferenceDataClient> {
    let config = match config_path {
        Some(path) => {
            let path = path.to_string_lossy();
            tracing::info!(path = %path, "Loading configuration");
            RefDataConfig::from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path))?
        }
        None => RefDataConfig::from_env().context("Failed to load config from environment")?,
    };

    let token: Arc<dyn SessionTokenProvider> = match &config.api_token {
        Some(token) => Arc::new(StaticToken::new(token.clone())),
        None => Arc::new(EnvToken::new("REFDATA_SESSION_TOKEN")),
    };

    ReferenceDataClient::from_config(&config, token).context("Failed to create lookup client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
