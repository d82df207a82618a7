//! Strategy and parameter structures for a drafting session

use serde::{Deserialize, Serialize};

/// Acquisition strategy selected for the offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// All-cash purchase, no financing contingency
    Cash,
    /// Take over existing financing while the loan stays in the seller's name
    SubjectTo,
    /// Seller acts as lender for the financed portion
    SellerFinance,
    /// Assumed mortgage + seller financing + cash down combined
    Hybrid,
}

impl Strategy {
    /// Human-readable label used in summaries and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Cash => "Cash",
            Strategy::SubjectTo => "Subject To",
            Strategy::SellerFinance => "Seller Financing",
            Strategy::Hybrid => "Hybrid",
        }
    }
}

/// Single source of truth for the offer amount.
///
/// The original two-field design kept a percentage and a literal amount in
/// mutual sync; here exactly one side is authoritative and the other is
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OfferBasis {
    /// Offer expressed as a percentage of the list price
    PercentageOfList(f64),
    /// Offer pinned to a literal dollar amount
    Literal(i64),
}

/// Terms common to every strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferParameters {
    /// Authoritative source of the offer amount
    pub basis: OfferBasis,

    /// Days from acceptance to closing
    pub closing_timeline_days: u32,

    /// Inspection period in days
    pub inspection_period_days: u32,

    /// Earnest money deposit as a percentage of the offer amount.
    /// The dollar amount is always derived, never stored.
    pub earnest_money_pct: f64,
}

impl Default for OfferParameters {
    fn default() -> Self {
        Self {
            basis: OfferBasis::PercentageOfList(80.0),
            closing_timeline_days: 30,
            inspection_period_days: 7,
            earnest_money_pct: 1.0,
        }
    }
}

/// Seller-financing terms (also used for the seller-financed slice of a
/// hybrid structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerFinanceTerms {
    /// Down payment as a percentage of the offer amount, within [0, 100]
    pub down_payment_pct: f64,

    /// Annual interest rate on the financed balance, percent
    pub interest_rate_pct: f64,

    /// Amortization term in years; must be positive
    pub loan_term_years: u32,

    /// Whether a balloon payment is due before full amortization
    pub balloon_payment: bool,

    /// Years until the balloon payment is due
    pub balloon_term_years: u32,
}

impl Default for SellerFinanceTerms {
    fn default() -> Self {
        Self {
            down_payment_pct: 20.0,
            interest_rate_pct: 6.5,
            loan_term_years: 30,
            balloon_payment: false,
            balloon_term_years: 5,
        }
    }
}

/// Hybrid structure terms: three monetary components intended to sum to the
/// offer amount. The sum is surfaced but not enforced; keeping the
/// components consistent is the investor's call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridTerms {
    /// Balance of the existing mortgage being assumed, dollars
    pub assumed_loan_balance: i64,

    /// Seller-financed portion, dollars
    pub seller_finance_amount: i64,

    /// Cash down payment, dollars
    pub cash_down_payment: i64,

    /// Annual interest rate on the seller-financed slice, percent
    pub interest_rate_pct: f64,

    /// Amortization term of the seller-financed slice in years
    pub loan_term_years: u32,

    /// Whether the seller-financed slice carries a balloon payment
    pub balloon_payment: bool,

    /// Years until the balloon payment is due
    pub balloon_term_years: u32,
}

impl HybridTerms {
    /// Starting terms proportional to a list price: 60% assumed, 30% seller
    /// financed, 10% cash down.
    pub fn proportional_to(price: i64) -> Self {
        Self {
            assumed_loan_balance: (price as f64 * 0.6).round() as i64,
            seller_finance_amount: (price as f64 * 0.3).round() as i64,
            cash_down_payment: (price as f64 * 0.1).round() as i64,
            interest_rate_pct: 7.0,
            loan_term_years: 10,
            balloon_payment: true,
            balloon_term_years: 5,
        }
    }

    /// Sum of the three monetary components
    pub fn components_total(&self) -> i64 {
        self.assumed_loan_balance + self.seller_finance_amount + self.cash_down_payment
    }
}

/// Contingency flags attached to the offer, rendered as a comma-joined list
/// in the document's clause block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contingencies {
    pub inspection: bool,
    pub financing: bool,
    pub appraisal: bool,
    pub attorney_review: bool,
    pub partner_approval: bool,

    /// Free-text contingency appended after the standard flags
    pub custom: Option<String>,
}

impl Default for Contingencies {
    fn default() -> Self {
        Self {
            inspection: true,
            financing: true,
            appraisal: false,
            attorney_review: false,
            partner_approval: false,
            custom: None,
        }
    }
}

impl Contingencies {
    /// Active contingencies as display labels, in fixed order. Cash offers
    /// never list an appraisal contingency; the financing flag is a
    /// screening default and is not rendered in the letter.
    pub fn labels_for(&self, strategy: Strategy) -> Vec<&str> {
        let mut labels = Vec::new();
        if self.inspection {
            labels.push("Inspection");
        }
        if self.appraisal && strategy != Strategy::Cash {
            labels.push("Appraisal");
        }
        if self.attorney_review {
            labels.push("Attorney Review");
        }
        if self.partner_approval {
            labels.push("Partner Approval");
        }
        if let Some(custom) = self.custom.as_deref() {
            if !custom.is_empty() {
                labels.push(custom);
            }
        }
        labels
    }
}

/// Sender identity used for the letterhead and `[YOUR_*]` tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub company: String,
    pub contact_info: String,
}

impl Default for SenderProfile {
    fn default() -> Self {
        Self {
            name: "[Your Name]".to_string(),
            company: "AcquireFlow Real Estate".to_string(),
            contact_info: "(555) 123-4567\ninvestor@acquireflow.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_proportional_components() {
        let terms = HybridTerms::proportional_to(350_000);
        assert_eq!(terms.assumed_loan_balance, 210_000);
        assert_eq!(terms.seller_finance_amount, 105_000);
        assert_eq!(terms.cash_down_payment, 35_000);
        assert_eq!(terms.components_total(), 350_000);
    }

    #[test]
    fn test_contingency_labels_order() {
        let mut c = Contingencies::default();
        c.appraisal = true;
        c.partner_approval = true;
        c.custom = Some("Subject to HOA review".to_string());
        assert_eq!(
            c.labels_for(Strategy::SubjectTo),
            vec![
                "Inspection",
                "Appraisal",
                "Partner Approval",
                "Subject to HOA review"
            ]
        );
        // Cash offers drop the appraisal contingency
        assert_eq!(
            c.labels_for(Strategy::Cash),
            vec!["Inspection", "Partner Approval", "Subject to HOA review"]
        );
    }

    #[test]
    fn test_empty_custom_contingency_ignored() {
        let c = Contingencies {
            inspection: false,
            financing: false,
            custom: Some(String::new()),
            ..Contingencies::default()
        };
        assert!(c.labels_for(Strategy::Cash).is_empty());
    }
}
