//! Drafting-session state
//!
//! One explicit value owning everything the investor has chosen for the
//! offer being drafted, so derivation stays a pure function of the session.
//! Switching strategy switches which parameter set is active without
//! rewriting the other strategies' stored terms.

use crate::error::ValidationError;
use crate::property::Property;
use super::engine::{derive_offer, DerivedFigures};
use super::params::{
    Contingencies, HybridTerms, OfferBasis, OfferParameters, SellerFinanceTerms, SenderProfile,
    Strategy,
};

/// All investor-chosen state for one LOI drafting session
#[derive(Debug, Clone)]
pub struct OfferSession {
    property: Property,
    strategy: Strategy,
    params: OfferParameters,
    seller_finance: SellerFinanceTerms,
    hybrid: HybridTerms,
    contingencies: Contingencies,
    sender: SenderProfile,
}

impl OfferSession {
    /// Start a session for a property with default terms
    pub fn new(property: Property) -> Self {
        let hybrid = HybridTerms::proportional_to(property.price);
        Self {
            property,
            strategy: Strategy::Cash,
            params: OfferParameters::default(),
            seller_finance: SellerFinanceTerms::default(),
            hybrid,
            contingencies: Contingencies::default(),
            sender: SenderProfile::default(),
        }
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn params(&self) -> &OfferParameters {
        &self.params
    }

    pub fn seller_finance(&self) -> &SellerFinanceTerms {
        &self.seller_finance
    }

    pub fn hybrid(&self) -> &HybridTerms {
        &self.hybrid
    }

    pub fn contingencies(&self) -> &Contingencies {
        &self.contingencies
    }

    pub fn sender(&self) -> &SenderProfile {
        &self.sender
    }

    /// Select the acquisition strategy. Stored terms for other strategies
    /// are left untouched.
    pub fn select_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Make the percentage the authoritative offer source, clearing any
    /// literal override
    pub fn set_offer_percentage(&mut self, pct: f64) {
        self.params.basis = OfferBasis::PercentageOfList(pct);
    }

    /// Pin the offer to a literal amount; the display percentage is derived
    /// from it on the next derivation
    pub fn set_custom_amount(&mut self, amount: i64) {
        self.params.basis = OfferBasis::Literal(amount);
    }

    pub fn set_closing_timeline_days(&mut self, days: u32) {
        self.params.closing_timeline_days = days;
    }

    pub fn set_inspection_period_days(&mut self, days: u32) {
        self.params.inspection_period_days = days;
    }

    pub fn set_earnest_money_pct(&mut self, pct: f64) {
        self.params.earnest_money_pct = pct;
    }

    pub fn seller_finance_mut(&mut self) -> &mut SellerFinanceTerms {
        &mut self.seller_finance
    }

    pub fn hybrid_mut(&mut self) -> &mut HybridTerms {
        &mut self.hybrid
    }

    pub fn contingencies_mut(&mut self) -> &mut Contingencies {
        &mut self.contingencies
    }

    pub fn set_sender(&mut self, sender: SenderProfile) {
        self.sender = sender;
    }

    /// Restore every parameter set to its defaults, keeping the property
    /// and sender profile
    pub fn reset(&mut self) {
        self.strategy = Strategy::Cash;
        self.params = OfferParameters::default();
        self.seller_finance = SellerFinanceTerms::default();
        self.hybrid = HybridTerms::proportional_to(self.property.price);
        self.contingencies = Contingencies::default();
    }

    /// Derive the current figures. Pure and recomputed on every call, so
    /// dependent values (earnest money, payments) always reflect the latest
    /// parameters.
    pub fn figures(&self) -> Result<DerivedFigures, ValidationError> {
        derive_offer(
            &self.property,
            self.strategy,
            &self.params,
            &self.seller_finance,
            &self.hybrid,
        )
    }
}
