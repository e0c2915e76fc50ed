//! estimator - CLI tool to price jobs and build reports from JSON snapshots.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use estimator_core::{
    build_report_with, estimate_apparel_cost_with, estimate_print_from_catalog_with,
    render_report, ApparelJobRequest, CostBreakdown, Estimate, LogSnapshot, MaterialCatalog,
    PricingConfig, PrintJobRequest,
};

/// Price print and apparel jobs and roll logged jobs into P&L and BOM reports.
#[derive(Parser, Debug)]
#[command(name = "estimator")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pricing overrides (JSON, camelCase rate names)
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a print job against the material catalog
    Print {
        /// Material catalog file path
        #[arg(short, long)]
        catalog: PathBuf,

        /// Print job request file path
        #[arg(short, long)]
        request: PathBuf,
    },
    /// Estimate an apparel job
    Apparel {
        /// Apparel job request file path
        #[arg(short, long)]
        request: PathBuf,
    },
    /// Build the P&L and bill of materials from a submission log
    Report {
        /// Material catalog file path
        #[arg(short, long)]
        catalog: PathBuf,

        /// Submission log file path
        #[arg(short, long)]
        log: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_rates(args.rates.as_deref())?;

    match &args.command {
        Command::Print { catalog, request } => run_print(&config, catalog, request, args.json),
        Command::Apparel { request } => run_apparel(&config, request, args.json),
        Command::Report { catalog, log } => run_report(&config, catalog, log, args.json),
    }
}

fn load_rates(path: Option<&Path>) -> Result<PricingConfig> {
    let Some(path) = path else {
        return Ok(PricingConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = PricingConfig::from_json(&text)
        .with_context(|| format!("Failed to parse rates in {}", path.display()))?;
    info!("Loaded rates from {}", path.display());
    Ok(config)
}

fn load_catalog(path: &Path) -> Result<MaterialCatalog> {
    let catalog = MaterialCatalog::from_path(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    info!("Loaded {} material(s)", catalog.len());
    Ok(catalog)
}

fn read_request<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_estimate<B>(estimate: &Estimate<B>, json: bool) -> Result<()>
where
    B: CostBreakdown + Serialize,
{
    for warning in &estimate.warnings {
        warn!("{}", warning);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(estimate)?);
        return Ok(());
    }

    let value = serde_json::to_value(estimate.breakdown)?;
    if let Some(fields) = value.as_object() {
        for (name, amount) in fields {
            println!("{}: {:.2}", name, amount.as_f64().unwrap_or(0.0));
        }
    }
    println!("Total: {:.2}", estimate.total());
    if let Some(failure) = &estimate.failure {
        println!("Not priced: {}", failure);
    }
    Ok(())
}

fn run_print(config: &PricingConfig, catalog: &Path, request: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let request: PrintJobRequest = read_request(request)?;
    info!(
        "Estimating {} x {}\" x {}\" on {}",
        request.quantity, request.art_width, request.art_height, request.material_name
    );

    let estimate = estimate_print_from_catalog_with(config, &catalog, &request);
    print_estimate(&estimate, json)
}

fn run_apparel(config: &PricingConfig, request: &Path, json: bool) -> Result<()> {
    let request: ApparelJobRequest = read_request(request)?;
    info!("Estimating {} garment(s)", request.quantity);

    let estimate = estimate_apparel_cost_with(config, &request);
    print_estimate(&estimate, json)
}

fn run_report(config: &PricingConfig, catalog: &Path, log: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let log_snapshot = LogSnapshot::from_path(log)
        .with_context(|| format!("Failed to load log {}", log.display()))?;
    info!("Loaded {} log entr(ies)", log_snapshot.len());

    let report = build_report_with(config, &catalog, &log_snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    Ok(())
}
