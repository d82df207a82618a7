//! LOI Engine CLI
//!
//! Derives offer figures for one property, composes the letter, and runs
//! the export pipeline against a headless text surface.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use loi_engine::document::compose;
use loi_engine::document::format::{format_currency, format_pct};
use loi_engine::export::{ExportPipeline, TextMeasureSurface};
use loi_engine::offer::{OfferSession, Strategy, StrategyFigures};
use loi_engine::property::load_listings;
use loi_engine::template::{JsonFileStorage, TemplateStore, DEFAULT_TEMPLATES_PATH};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loi_engine", version, about = "Draft a Letter of Intent for a listed property")]
struct Args {
    /// Listings CSV file
    #[arg(long, default_value = "data/listings.csv")]
    listings: PathBuf,

    /// Property id to draft against; defaults to the first listing
    #[arg(long)]
    property_id: Option<u32>,

    /// Acquisition strategy: cash, subject-to, seller-finance, hybrid
    #[arg(long, default_value = "cash")]
    strategy: String,

    /// Offer percentage of list price
    #[arg(long)]
    percentage: Option<f64>,

    /// Literal offer amount, overriding the percentage
    #[arg(long)]
    custom_amount: Option<i64>,

    /// Template id; defaults to the store's active selection
    #[arg(long)]
    template: Option<String>,

    /// Custom-template persistence file
    #[arg(long, default_value = DEFAULT_TEMPLATES_PATH)]
    templates_file: PathBuf,

    /// Write the composed letter to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    Ok(match name {
        "cash" => Strategy::Cash,
        "subject-to" => Strategy::SubjectTo,
        "seller-finance" => Strategy::SellerFinance,
        "hybrid" => Strategy::Hybrid,
        other => bail!("unknown strategy '{other}'"),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let properties = load_listings(&args.listings)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .with_context(|| format!("loading listings from {}", args.listings.display()))?;
    if properties.is_empty() {
        bail!("no properties in {}", args.listings.display());
    }

    let property = match args.property_id {
        Some(id) => properties
            .iter()
            .find(|p| p.property_id == id)
            .with_context(|| format!("no property with id {id}"))?
            .clone(),
        None => properties[0].clone(),
    };

    let mut session = OfferSession::new(property);
    session.select_strategy(parse_strategy(&args.strategy)?);
    if let Some(pct) = args.percentage {
        session.set_offer_percentage(pct);
    }
    if let Some(amount) = args.custom_amount {
        session.set_custom_amount(amount);
    }

    let figures = session.figures()?;

    println!("LOI Engine v0.1.0");
    println!("=================\n");
    println!("Property: {}", session.property().address);
    println!("  List Price: {}", format_currency(session.property().price));
    println!(
        "  Agent: {} ({})",
        session.property().agent.name,
        session.property().agent.company
    );
    println!();
    println!("Offer ({}):", session.strategy().as_str());
    println!(
        "  Offer Amount: {} ({}% of list)",
        format_currency(figures.offer_amount),
        format_pct(figures.offer_pct_of_list)
    );
    println!("  Earnest Money: {}", format_currency(figures.earnest_money));

    match &figures.breakdown {
        StrategyFigures::Cash => {}
        StrategyFigures::SubjectTo {
            estimated_mortgage_balance,
            cash_to_seller,
        } => {
            println!(
                "  Estimated Mortgage Balance: {}",
                format_currency(*estimated_mortgage_balance)
            );
            println!("  Cash to Seller: {}", format_currency(*cash_to_seller));
        }
        StrategyFigures::SellerFinance {
            down_payment,
            financed_amount,
            monthly_payment,
        } => {
            println!("  Down Payment: {}", format_currency(*down_payment));
            println!("  Financed Amount: {}", format_currency(*financed_amount));
            println!("  Monthly Payment: {}", format_currency(*monthly_payment));
        }
        StrategyFigures::Hybrid {
            assumed_loan_balance,
            seller_finance_amount,
            cash_down_payment,
            monthly_payment,
            component_imbalance,
            ..
        } => {
            println!("  Assumed Mortgage: {}", format_currency(*assumed_loan_balance));
            println!("  Seller Financing: {}", format_currency(*seller_finance_amount));
            println!("  Cash Down: {}", format_currency(*cash_down_payment));
            println!("  Monthly Payment: {}", format_currency(*monthly_payment));
            if *component_imbalance != 0 {
                println!(
                    "  WARNING: components differ from offer by {}",
                    format_currency(*component_imbalance)
                );
            }
        }
    }

    let mut store = TemplateStore::open(Box::new(JsonFileStorage::new(&args.templates_file)));
    if let Some(id) = &args.template {
        store.select(id)?;
    }

    let today = Local::now().date_naive();
    let document = compose(store.active(), &session, &figures, today);
    let rendered = document.render();

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing letter to {}", path.display()))?;
            println!("\nLetter written to: {}", path.display());
        }
        None => println!("\n{rendered}"),
    }

    let pipeline = ExportPipeline::new();
    let surface = TextMeasureSurface::new(rendered);
    let artifact = pipeline
        .export(&surface, &session.property().address, today)
        .await?;
    println!(
        "\nExport artifact: {} ({} page(s), {:.0} mm tall)",
        artifact.name,
        artifact.page_count(),
        artifact.image_height_mm
    );

    Ok(())
}
