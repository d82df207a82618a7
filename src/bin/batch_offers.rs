//! Derive offers for an entire listings file across a ladder of offer
//! percentages, in parallel
//!
//! Outputs one CSV row per (property, percentage) with the cash and
//! subject-to figures side by side, for screening which listings pencil out.

use loi_engine::offer::{
    derive_offer, HybridTerms, OfferBasis, OfferParameters, SellerFinanceTerms, Strategy,
    StrategyFigures,
};
use loi_engine::property::{load_default_listings, Property};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Offer percentages to screen at
const PERCENTAGE_LADDER: [f64; 6] = [70.0, 75.0, 80.0, 85.0, 90.0, 95.0];

struct ScreenRow {
    property_id: u32,
    address: String,
    price: i64,
    pct: f64,
    offer: i64,
    earnest: i64,
    mortgage_balance: i64,
    cash_to_seller: i64,
}

fn screen(property: &Property, pct: f64) -> Option<ScreenRow> {
    let params = OfferParameters {
        basis: OfferBasis::PercentageOfList(pct),
        ..OfferParameters::default()
    };
    let figures = derive_offer(
        property,
        Strategy::SubjectTo,
        &params,
        &SellerFinanceTerms::default(),
        &HybridTerms::proportional_to(property.price),
    )
    .ok()?;

    let (mortgage_balance, cash_to_seller) = match figures.breakdown {
        StrategyFigures::SubjectTo {
            estimated_mortgage_balance,
            cash_to_seller,
        } => (estimated_mortgage_balance, cash_to_seller),
        _ => unreachable!("subject-to derivation yields subject-to figures"),
    };

    Some(ScreenRow {
        property_id: property.property_id,
        address: property.address.clone(),
        price: property.price,
        pct,
        offer: figures.offer_amount,
        earnest: figures.earnest_money,
        mortgage_balance,
        cash_to_seller,
    })
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!("Loading listings from data/listings.csv...");

    let properties = load_default_listings().expect("Failed to load listings");
    println!("Loaded {} listings in {:?}", properties.len(), start.elapsed());

    println!("Screening offers...");
    let screen_start = Instant::now();

    let rows: Vec<ScreenRow> = properties
        .par_iter()
        .flat_map_iter(|property| {
            PERCENTAGE_LADDER
                .iter()
                .filter_map(|&pct| screen(property, pct))
                .collect::<Vec<_>>()
        })
        .collect();

    println!("Screened {} combinations in {:?}", rows.len(), screen_start.elapsed());

    let csv_path = "offer_screen_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(
        file,
        "PropertyId,Address,Price,OfferPct,OfferAmount,EarnestMoney,EstMortgageBalance,CashToSeller"
    )
    .unwrap();

    for row in &rows {
        writeln!(
            file,
            "{},\"{}\",{},{},{},{},{},{}",
            row.property_id,
            row.address,
            row.price,
            row.pct,
            row.offer,
            row.earnest,
            row.mortgage_balance,
            row.cash_to_seller,
        )
        .unwrap();
    }

    println!("Full results written to: {csv_path}");

    // Quick console view: best positive cash-to-seller per property
    for property in &properties {
        let best = rows
            .iter()
            .filter(|r| r.property_id == property.property_id && r.cash_to_seller >= 0)
            .min_by_key(|r| r.cash_to_seller);
        if let Some(row) = best {
            println!(
                "  {}: {}% -> offer {} (cash to seller {})",
                property.address, row.pct, row.offer, row.cash_to_seller
            );
        }
    }
}
