//! Offer derivation engine
//!
//! Turns a property price, an acquisition strategy, and strategy parameters
//! into the full set of dependent monetary figures. Derivation is pure and
//! cheap, so figures are recomputed on every upstream change rather than
//! cached.

use log::{debug, warn};

use crate::error::ValidationError;
use crate::property::Property;
use super::amortization::monthly_payment;
use super::params::{HybridTerms, OfferBasis, OfferParameters, SellerFinanceTerms, Strategy};

/// Share of the list price assumed to remain on an existing mortgage when no
/// lien data is available. Placeholder heuristic; typical for newer loans.
pub const ESTIMATED_MORTGAGE_RATIO: f64 = 0.7;

/// Strategy-specific derived figures
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyFigures {
    /// Cash offers derive nothing beyond the common figures
    Cash,

    SubjectTo {
        /// Estimated balance of the existing mortgage
        estimated_mortgage_balance: i64,
        /// Offer minus the estimated balance. May be negative; surfaced
        /// as-is for investor judgment, never clamped.
        cash_to_seller: i64,
    },

    SellerFinance {
        /// Down payment in dollars
        down_payment: i64,
        /// Seller-financed balance after the down payment
        financed_amount: i64,
        /// Monthly payment on the financed balance
        monthly_payment: i64,
    },

    Hybrid {
        assumed_loan_balance: i64,
        /// Assumed balance as a rounded percentage of the offer
        assumed_pct_of_offer: i64,
        seller_finance_amount: i64,
        seller_finance_pct_of_offer: i64,
        cash_down_payment: i64,
        cash_down_pct_of_offer: i64,
        /// Monthly payment on the seller-financed slice
        monthly_payment: i64,
        /// `components_total - offer_amount`; zero when the structure is
        /// balanced. Surfaced, not enforced.
        component_imbalance: i64,
    },
}

/// Fully derived figures for one (property, strategy, parameters) input
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFigures {
    /// Final offer amount in dollars
    pub offer_amount: i64,

    /// Offer as a percentage of list price, for display. Recomputed from the
    /// literal amount when that side is authoritative.
    pub offer_pct_of_list: f64,

    /// Earnest money deposit, always derived from the offer amount
    pub earnest_money: i64,

    /// Figures specific to the selected strategy
    pub breakdown: StrategyFigures,
}

/// Derive all dependent figures for an offer.
///
/// Out-of-range inputs are rejected up front with a [`ValidationError`];
/// valid inputs never fail.
pub fn derive_offer(
    property: &Property,
    strategy: Strategy,
    params: &OfferParameters,
    seller_finance: &SellerFinanceTerms,
    hybrid: &HybridTerms,
) -> Result<DerivedFigures, ValidationError> {
    validate(property, strategy, params, seller_finance, hybrid)?;

    let price = property.price as f64;
    let (offer_amount, offer_pct_of_list) = match params.basis {
        OfferBasis::Literal(amount) => {
            debug!("offer pinned to literal {amount}, percentage derived for display");
            (amount, (amount as f64 / price * 100.0).round())
        }
        OfferBasis::PercentageOfList(pct) => ((price * pct / 100.0).round() as i64, pct),
    };

    let earnest_money = (offer_amount as f64 * params.earnest_money_pct / 100.0).round() as i64;

    let breakdown = match strategy {
        Strategy::Cash => StrategyFigures::Cash,
        Strategy::SubjectTo => {
            let estimated_mortgage_balance = (price * ESTIMATED_MORTGAGE_RATIO).round() as i64;
            StrategyFigures::SubjectTo {
                estimated_mortgage_balance,
                cash_to_seller: offer_amount - estimated_mortgage_balance,
            }
        }
        Strategy::SellerFinance => {
            let down_payment =
                (offer_amount as f64 * seller_finance.down_payment_pct / 100.0).round() as i64;
            let financed_amount = offer_amount - down_payment;
            StrategyFigures::SellerFinance {
                down_payment,
                financed_amount,
                monthly_payment: monthly_payment(
                    financed_amount as f64,
                    seller_finance.interest_rate_pct,
                    seller_finance.loan_term_years,
                ) as i64,
            }
        }
        Strategy::Hybrid => {
            let component_imbalance = hybrid.components_total() - offer_amount;
            if component_imbalance != 0 {
                warn!(
                    "hybrid components total {} differs from offer amount {} by {}",
                    hybrid.components_total(),
                    offer_amount,
                    component_imbalance
                );
            }
            StrategyFigures::Hybrid {
                assumed_loan_balance: hybrid.assumed_loan_balance,
                assumed_pct_of_offer: pct_of(hybrid.assumed_loan_balance, offer_amount),
                seller_finance_amount: hybrid.seller_finance_amount,
                seller_finance_pct_of_offer: pct_of(hybrid.seller_finance_amount, offer_amount),
                cash_down_payment: hybrid.cash_down_payment,
                cash_down_pct_of_offer: pct_of(hybrid.cash_down_payment, offer_amount),
                monthly_payment: monthly_payment(
                    hybrid.seller_finance_amount as f64,
                    hybrid.interest_rate_pct,
                    hybrid.loan_term_years,
                ) as i64,
                component_imbalance,
            }
        }
    };

    Ok(DerivedFigures {
        offer_amount,
        offer_pct_of_list,
        earnest_money,
        breakdown,
    })
}

/// Rounded percentage share of `part` within `whole`
fn pct_of(part: i64, whole: i64) -> i64 {
    (part as f64 / whole as f64 * 100.0).round() as i64
}

fn validate(
    property: &Property,
    strategy: Strategy,
    params: &OfferParameters,
    seller_finance: &SellerFinanceTerms,
    hybrid: &HybridTerms,
) -> Result<(), ValidationError> {
    if property.price <= 0 {
        return Err(ValidationError::NonPositivePrice(property.price));
    }
    match params.basis {
        OfferBasis::Literal(amount) if amount <= 0 => {
            return Err(ValidationError::NonPositiveOfferAmount(amount));
        }
        OfferBasis::PercentageOfList(pct) if pct < 0.0 => {
            return Err(ValidationError::NegativePercentage {
                field: "offer percentage",
                value: pct,
            });
        }
        _ => {}
    }
    if params.earnest_money_pct < 0.0 {
        return Err(ValidationError::NegativePercentage {
            field: "earnest money percentage",
            value: params.earnest_money_pct,
        });
    }

    match strategy {
        Strategy::SellerFinance => {
            if !(0.0..=100.0).contains(&seller_finance.down_payment_pct) {
                return Err(ValidationError::DownPaymentOutOfRange(
                    seller_finance.down_payment_pct,
                ));
            }
            if seller_finance.interest_rate_pct < 0.0 {
                return Err(ValidationError::NegativePercentage {
                    field: "interest rate",
                    value: seller_finance.interest_rate_pct,
                });
            }
            if seller_finance.loan_term_years == 0 {
                return Err(ValidationError::ZeroLoanTerm);
            }
        }
        Strategy::Hybrid => {
            if hybrid.interest_rate_pct < 0.0 {
                return Err(ValidationError::NegativePercentage {
                    field: "interest rate",
                    value: hybrid.interest_rate_pct,
                });
            }
            if hybrid.loan_term_years == 0 {
                return Err(ValidationError::ZeroLoanTerm);
            }
        }
        Strategy::Cash | Strategy::SubjectTo => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{AgentContact, PropertyType};

    fn test_property() -> Property {
        Property::new(
            1,
            "123 Main St, Orlando, FL 32801",
            PropertyType::SingleFamily,
            350_000,
            AgentContact {
                name: "Sarah Johnson".to_string(),
                company: "Orlando Realty Group".to_string(),
                email: "sarah@example.com".to_string(),
                phone: "(407) 555-1234".to_string(),
            },
        )
    }

    #[test]
    fn test_percentage_basis() {
        let figures = derive_offer(
            &test_property(),
            Strategy::Cash,
            &OfferParameters::default(),
            &SellerFinanceTerms::default(),
            &HybridTerms::proportional_to(350_000),
        )
        .unwrap();

        // 80% of 350,000 with 1% earnest money
        assert_eq!(figures.offer_amount, 280_000);
        assert_eq!(figures.earnest_money, 2_800);
        assert_eq!(figures.breakdown, StrategyFigures::Cash);
    }

    #[test]
    fn test_literal_basis_recovers_percentage() {
        let params = OfferParameters {
            basis: OfferBasis::Literal(297_500),
            ..OfferParameters::default()
        };
        let figures = derive_offer(
            &test_property(),
            Strategy::Cash,
            &params,
            &SellerFinanceTerms::default(),
            &HybridTerms::proportional_to(350_000),
        )
        .unwrap();

        assert_eq!(figures.offer_amount, 297_500);
        assert_eq!(figures.offer_pct_of_list, 85.0);
    }

    #[test]
    fn test_subject_to_figures() {
        let figures = derive_offer(
            &test_property(),
            Strategy::SubjectTo,
            &OfferParameters::default(),
            &SellerFinanceTerms::default(),
            &HybridTerms::proportional_to(350_000),
        )
        .unwrap();

        match figures.breakdown {
            StrategyFigures::SubjectTo {
                estimated_mortgage_balance,
                cash_to_seller,
            } => {
                assert_eq!(estimated_mortgage_balance, 245_000);
                assert_eq!(cash_to_seller, 35_000);
            }
            other => panic!("expected SubjectTo figures, got {other:?}"),
        }
    }

    #[test]
    fn test_subject_to_negative_equity_not_clamped() {
        // Low offer against a deep mortgage: cash to seller goes negative
        let params = OfferParameters {
            basis: OfferBasis::PercentageOfList(60.0),
            ..OfferParameters::default()
        };
        let figures = derive_offer(
            &test_property(),
            Strategy::SubjectTo,
            &params,
            &SellerFinanceTerms::default(),
            &HybridTerms::proportional_to(350_000),
        )
        .unwrap();

        match figures.breakdown {
            StrategyFigures::SubjectTo { cash_to_seller, .. } => {
                assert_eq!(cash_to_seller, 210_000 - 245_000);
            }
            other => panic!("expected SubjectTo figures, got {other:?}"),
        }
    }

    #[test]
    fn test_seller_finance_figures() {
        let figures = derive_offer(
            &test_property(),
            Strategy::SellerFinance,
            &OfferParameters::default(),
            &SellerFinanceTerms::default(),
            &HybridTerms::proportional_to(350_000),
        )
        .unwrap();

        match figures.breakdown {
            StrategyFigures::SellerFinance {
                down_payment,
                financed_amount,
                monthly_payment,
            } => {
                assert_eq!(down_payment, 56_000);
                assert_eq!(financed_amount, 224_000);
                // 224,000 at 6.5% over 30 years
                assert!((monthly_payment - 1_416).abs() <= 1);
            }
            other => panic!("expected SellerFinance figures, got {other:?}"),
        }
    }

    #[test]
    fn test_hybrid_imbalance_surfaced() {
        let hybrid = HybridTerms {
            assumed_loan_balance: 200_000,
            seller_finance_amount: 50_000,
            cash_down_payment: 10_000,
            ..HybridTerms::proportional_to(350_000)
        };
        let figures = derive_offer(
            &test_property(),
            Strategy::Hybrid,
            &OfferParameters::default(),
            &SellerFinanceTerms::default(),
            &hybrid,
        )
        .unwrap();

        match figures.breakdown {
            StrategyFigures::Hybrid {
                component_imbalance,
                assumed_pct_of_offer,
                ..
            } => {
                // 260,000 total against a 280,000 offer
                assert_eq!(component_imbalance, -20_000);
                assert_eq!(assumed_pct_of_offer, 71);
            }
            other => panic!("expected Hybrid figures, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejections() {
        let mut bad_price = test_property();
        bad_price.price = 0;
        assert_eq!(
            derive_offer(
                &bad_price,
                Strategy::Cash,
                &OfferParameters::default(),
                &SellerFinanceTerms::default(),
                &HybridTerms::proportional_to(350_000),
            ),
            Err(ValidationError::NonPositivePrice(0))
        );

        let negative_pct = OfferParameters {
            basis: OfferBasis::PercentageOfList(-5.0),
            ..OfferParameters::default()
        };
        assert!(matches!(
            derive_offer(
                &test_property(),
                Strategy::Cash,
                &negative_pct,
                &SellerFinanceTerms::default(),
                &HybridTerms::proportional_to(350_000),
            ),
            Err(ValidationError::NegativePercentage { .. })
        ));

        let zero_term = SellerFinanceTerms {
            loan_term_years: 0,
            ..SellerFinanceTerms::default()
        };
        assert_eq!(
            derive_offer(
                &test_property(),
                Strategy::SellerFinance,
                &OfferParameters::default(),
                &zero_term,
                &HybridTerms::proportional_to(350_000),
            ),
            Err(ValidationError::ZeroLoanTerm)
        );
    }
}
