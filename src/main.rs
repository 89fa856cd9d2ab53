//! Production Cost - Main entry point
//!
//! Command line front end for the cost calculator and the cost ledger.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use production_cost_lib::calculator::compute_cost;
use production_cost_lib::core::Config;
use production_cost_lib::i18n::I18n;
use production_cost_lib::report::ReportRenderer;
use production_cost_lib::sheet::CostSheet;

#[derive(Parser)]
#[command(name = "production-cost")]
#[command(about = "Manufacturing cost breakdown, per-unit cost and margin calculator")]
struct Cli {
    /// Path to a configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report language: "auto", "en", "id"
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a product's cost into material, production and other shares
    Quick {
        /// Product name
        product: String,
        /// Material cost
        material: f64,
        /// Production cost
        production: f64,
        /// Other costs
        other: f64,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a cost sheet, snapshot it and print the full report
    Report {
        /// Path to the cost sheet (TOML)
        sheet: PathBuf,

        /// Number of units produced (defaults to the configured value)
        #[arg(short, long, allow_negative_numbers = true)]
        units: Option<i64>,

        /// Print the snapshot as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::debug!("Starting Production Cost v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };

    let lang = cli.lang.as_deref().unwrap_or(&config.general.language);
    let renderer = ReportRenderer::new(&config.format, I18n::new(lang));

    match cli.command {
        Commands::Quick { product, material, production, other, json } => {
            let breakdown = compute_cost(&product, material, production, other)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{}", renderer.render_breakdown(&breakdown));
            }
        }

        Commands::Report { sheet, units, json } => {
            let mut ledger = CostSheet::load(&sheet)
                .with_context(|| format!("Failed to load cost sheet {}", sheet.display()))?
                .into_ledger();

            let units = units.unwrap_or(config.ledger.default_units);
            ledger.commit_snapshot(units)?;

            if json {
                if let Some(snapshot) = ledger.latest_snapshot() {
                    println!("{}", serde_json::to_string_pretty(snapshot)?);
                }
            } else {
                println!("{}", renderer.render_report(&ledger));
                println!();
                println!("{}", renderer.render_history(ledger.history()));
            }
        }
    }

    Ok(())
}
