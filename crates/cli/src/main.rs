//! Saber Simples CLI - Drive the storefront cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the guides on offer
//! ss-cli catalog
//!
//! # Add a guide and show the cart
//! ss-cli add guia-financas
//! ss-cli show
//!
//! # Check out without the confirmation prompt
//! ss-cli checkout --yes
//!
//! # Print the cart panel markup with the panel open
//! ss-cli render --open
//! ```
//!
//! The cart is kept in `$SABER_SIMPLES_STORAGE_DIR` (by default the user
//! data directory), so it survives between invocations the way the page's
//! cart survives reloads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saber_simples_storefront::catalog::Catalog;
use saber_simples_storefront::config::StorefrontConfig;
use saber_simples_storefront::contact::ContactForm;
use saber_simples_storefront::error::AppError;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(author, version, about = "Saber Simples cart tools")]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents
    Show {
        /// Print the slot exactly as stored instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the guides on offer
    Catalog,
    /// Add a guide to the cart
    Add {
        /// Guide id as listed by `catalog`
        guide_id: String,
    },
    /// Remove a guide from the cart
    Remove {
        /// Guide id
        guide_id: String,
    },
    /// Empty the cart
    Clear,
    /// Place a simulated order
    Checkout,
    /// Print the cart badge and panel HTML
    Render {
        /// Render with the panel open
        #[arg(long)]
        open: bool,
    },
    /// Validate a contact form submission
    Contact {
        /// Sender name
        #[arg(short, long)]
        name: String,

        /// Sender email address
        #[arg(short, long)]
        email: String,

        /// Message body
        #[arg(short, long, default_value = "")]
        message: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "saber_simples_storefront=info,ss_cli=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    if cli.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Catalog => {
            let catalog = Catalog::load(&config.catalog_path)?;
            commands::cart::catalog(&catalog, &config)?;
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                message,
            };
            commands::contact::submit(&form)?;
        }
        Commands::Show { json } => {
            let manager = commands::cart::open(&config, cli.yes);
            commands::cart::show(&manager, json)?;
        }
        Commands::Add { guide_id } => {
            let catalog = Catalog::load(&config.catalog_path)?;
            let mut manager = commands::cart::open(&config, cli.yes);
            commands::cart::add(&mut manager, &catalog, &guide_id)?;
        }
        Commands::Remove { guide_id } => {
            let mut manager = commands::cart::open(&config, cli.yes);
            commands::cart::remove(&mut manager, &guide_id)?;
        }
        Commands::Clear => {
            let mut manager = commands::cart::open(&config, cli.yes);
            commands::cart::clear(&mut manager)?;
        }
        Commands::Checkout => {
            let mut manager = commands::cart::open(&config, cli.yes);
            commands::cart::checkout(&mut manager)?;
        }
        Commands::Render { open } => {
            let mut manager = commands::cart::open(&config, cli.yes);
            commands::cart::render(&mut manager, open)?;
        }
    }
    Ok(())
}
