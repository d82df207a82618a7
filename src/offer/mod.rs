//! Offer structuring: strategy parameters, amortization math, and the
//! derivation engine

pub mod amortization;
pub mod engine;
pub mod params;
pub mod session;

pub use amortization::monthly_payment;
pub use engine::{derive_offer, DerivedFigures, StrategyFigures, ESTIMATED_MORTGAGE_RATIO};
pub use params::{
    Contingencies, HybridTerms, OfferBasis, OfferParameters, SellerFinanceTerms, SenderProfile,
    Strategy,
};
pub use session::OfferSession;
