//! Document composer
//!
//! Merges a template, a property, and the derived figures into the final
//! letter. Composition is pure: the document date is supplied by the caller
//! and is the only non-deterministic field, so composing twice with the same
//! inputs is byte-identical.

use chrono::NaiveDate;

use crate::offer::{DerivedFigures, OfferSession, Strategy, StrategyFigures};
use crate::template::Template;
use super::format::{format_currency, format_pct};

/// Fixed document title
pub const DOCUMENT_TITLE: &str = "LETTER OF INTENT TO PURCHASE REAL ESTATE";

/// A fully substituted letter, ready for rendering.
///
/// Sections are kept separate so the presentation layer can style them;
/// [`render`](Self::render) joins the non-empty ones in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    /// Sender company and contact lines
    pub letterhead: String,
    pub title: String,
    /// Human-readable document date, stamped once at compose time
    pub date_line: String,
    /// Property address, recipient, and subject lines
    pub recipient_block: String,
    /// Salutation and opening narrative (or the substituted custom body)
    pub letter_body: String,
    /// Derived-figures block for the active strategy
    pub figures_block: String,
    /// Strategy-specific closing narrative
    pub clause_narrative: String,
    /// Common closing paragraphs and signature; empty when a custom body
    /// carries its own sign-off
    pub closing_block: String,
}

impl ComposedDocument {
    /// The full letter as plain text
    pub fn render(&self) -> String {
        [
            &self.letterhead,
            &self.title,
            &self.date_line,
            &self.recipient_block,
            &self.letter_body,
            &self.figures_block,
            &self.clause_narrative,
            &self.closing_block,
        ]
        .iter()
        .filter(|section| !section.is_empty())
        .map(|section| section.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

/// Compose the letter for the session's current figures.
///
/// Builtin templates (empty body) use the structured default letter; custom
/// templates have their placeholder tokens substituted and the
/// strategy-specific figures appended after the body. Unrecognized tokens
/// pass through unchanged.
pub fn compose(
    template: &Template,
    session: &OfferSession,
    figures: &DerivedFigures,
    document_date: NaiveDate,
) -> ComposedDocument {
    let property = session.property();
    let sender = session.sender();
    let strategy = session.strategy();

    let letterhead = format!("{}\n{}", sender.company, sender.contact_info);
    let date_line = document_date.format("%B %-d, %Y").to_string();
    let recipient_block = format!(
        "Property Address: {address}\nRecipient: {agent}\nAgent Company: {company}\n\
         Subject: Letter of Intent to Purchase {address}",
        address = property.address,
        agent = property.agent.name,
        company = property.agent.company,
    );

    if template.body.is_empty() {
        ComposedDocument {
            letterhead,
            title: DOCUMENT_TITLE.to_string(),
            date_line,
            recipient_block,
            letter_body: format!(
                "Dear {},\n\nI am writing to express my interest in purchasing the property \
                 located at {}. After careful consideration of the property's location, \
                 condition, and potential, I would like to submit the following Letter of Intent:",
                property.agent.name, property.address
            ),
            figures_block: figures_block(session, figures, true),
            clause_narrative: clause_narrative(strategy, session),
            closing_block: closing_block(session),
        }
    } else {
        ComposedDocument {
            letterhead,
            title: DOCUMENT_TITLE.to_string(),
            date_line,
            recipient_block,
            letter_body: substitute(&template.body, session, figures),
            // Custom bodies carry the common figures via tokens; only the
            // strategy-specific lines are appended
            figures_block: figures_block(session, figures, false),
            clause_narrative: clause_narrative(strategy, session),
            closing_block: String::new(),
        }
    }
}

/// Replace every recognized placeholder token with its formatted value
pub fn substitute(body: &str, session: &OfferSession, figures: &DerivedFigures) -> String {
    let params = session.params();
    let sender = session.sender();
    let property = session.property();

    body.replace("[PROPERTY_ADDRESS]", &property.address)
        .replace("[AGENT_NAME]", &property.agent.name)
        .replace("[OFFER_AMOUNT]", &format_currency(figures.offer_amount))
        .replace("[EARNEST_MONEY]", &format_currency(figures.earnest_money))
        .replace(
            "[CLOSING_TIMELINE]",
            &params.closing_timeline_days.to_string(),
        )
        .replace(
            "[INSPECTION_PERIOD]",
            &params.inspection_period_days.to_string(),
        )
        .replace("[YOUR_NAME]", &sender.name)
        .replace("[YOUR_COMPANY]", &sender.company)
        .replace("[YOUR_CONTACT_INFO]", &sender.contact_info)
}

/// The derived-figures block. `with_common` includes the price/earnest/
/// timeline lines shared by every strategy.
fn figures_block(session: &OfferSession, figures: &DerivedFigures, with_common: bool) -> String {
    let params = session.params();
    let strategy = session.strategy();
    let mut lines = Vec::new();

    if with_common {
        let mut price_line = format!("Purchase Price: {}", format_currency(figures.offer_amount));
        if figures.offer_pct_of_list != 100.0 {
            price_line.push_str(&format!(
                " ({}% of asking price)",
                format_pct(figures.offer_pct_of_list)
            ));
        }
        lines.push(price_line);
        lines.push(format!(
            "Earnest Money Deposit: {} ({}% of offer)",
            format_currency(figures.earnest_money),
            format_pct(params.earnest_money_pct)
        ));
        lines.push(format!(
            "Closing Timeline: {} days from acceptance",
            params.closing_timeline_days
        ));
        lines.push(format!(
            "Inspection Period: {} days",
            params.inspection_period_days
        ));
    }

    if strategy == Strategy::Cash {
        lines.push("Financing: Cash offer with no financing contingency".to_string());
        lines.push("Proof of Funds: Available upon request".to_string());
    }

    let contingencies = session.contingencies().labels_for(strategy).join(", ");
    lines.push(format!("Contingencies: {contingencies}"));

    match &figures.breakdown {
        StrategyFigures::Cash => {}
        StrategyFigures::SubjectTo {
            estimated_mortgage_balance,
            cash_to_seller,
        } => {
            lines.push(
                "Subject To Existing Financing: This offer is made subject to the existing \
                 financing on the property. Buyer intends to take over the existing mortgage \
                 payments while keeping the loan in the Seller's name, with appropriate legal \
                 safeguards for both parties."
                    .to_string(),
            );
            lines.push(format!(
                "Estimated Mortgage Balance: {}",
                format_currency(*estimated_mortgage_balance)
            ));
            lines.push(format!(
                "Cash to Seller at Closing: {}",
                format_currency(*cash_to_seller)
            ));
        }
        StrategyFigures::SellerFinance {
            down_payment,
            financed_amount,
            monthly_payment,
        } => {
            let terms = session.seller_finance();
            lines.push("Seller Financing Terms:".to_string());
            lines.push(format!(
                "- Down Payment: {} ({}%)",
                format_currency(*down_payment),
                format_pct(terms.down_payment_pct)
            ));
            lines.push(format!(
                "- Financed Amount: {}",
                format_currency(*financed_amount)
            ));
            lines.push(format!(
                "- Interest Rate: {}%",
                format_pct(terms.interest_rate_pct)
            ));
            lines.push(format!("- Loan Term: {} years", terms.loan_term_years));
            lines.push(format!(
                "- Monthly Payment: {}",
                format_currency(*monthly_payment)
            ));
            if terms.balloon_payment {
                lines.push(format!(
                    "- Balloon Payment: Due after {} years",
                    terms.balloon_term_years
                ));
            }
        }
        StrategyFigures::Hybrid {
            assumed_loan_balance,
            seller_finance_amount,
            cash_down_payment,
            ..
        } => {
            let terms = session.hybrid();
            lines.push("Hybrid Financing Structure:".to_string());
            lines.push(format!(
                "- Assumption of Existing Mortgage: {}",
                format_currency(*assumed_loan_balance)
            ));
            lines.push(format!(
                "- Seller Financing: {}",
                format_currency(*seller_finance_amount)
            ));
            lines.push(format!(
                "  - Interest Rate: {}%",
                format_pct(terms.interest_rate_pct)
            ));
            lines.push(format!("  - Term: {} years", terms.loan_term_years));
            if terms.balloon_payment {
                lines.push(format!(
                    "  - Balloon Payment: Due after {} years",
                    terms.balloon_term_years
                ));
            }
            lines.push(format!(
                "- Cash Down Payment: {}",
                format_currency(*cash_down_payment)
            ));
        }
    }

    lines.join("\n")
}

/// Closing narrative specific to the acquisition structure
fn clause_narrative(strategy: Strategy, session: &OfferSession) -> String {
    match strategy {
        Strategy::Cash => format!(
            "I am prepared to move forward quickly with this cash offer and can provide proof \
             of funds immediately upon request. With no financing contingency, we can close in \
             as little as {} days, providing you with certainty and a clean, efficient \
             transaction.",
            session.params().closing_timeline_days
        ),
        Strategy::SubjectTo => "This \"Subject-To\" offer allows you to sell your property \
             without paying off your existing mortgage. I will take over the responsibility of \
             making the mortgage payments while you receive the difference between your mortgage \
             balance and the purchase price in cash at closing. This approach can be beneficial \
             if you need to sell quickly without waiting for traditional financing approval."
            .to_string(),
        Strategy::SellerFinance => "The seller financing structure outlined above provides you \
             with an immediate down payment plus ongoing monthly income at an attractive \
             interest rate. This arrangement can offer tax advantages by spreading your capital \
             gains over time while providing a competitive return on your equity. All terms \
             will be secured with a promissory note and mortgage/deed of trust on the property."
            .to_string(),
        Strategy::Hybrid => "This hybrid structure combines the benefits of a Subject-To \
             transaction with seller financing. You'll receive an immediate cash payment while \
             also creating ongoing monthly income from the seller-financed portion. This \
             creative approach maximizes flexibility for both parties while allowing for a \
             faster closing than traditional financing would permit."
            .to_string(),
    }
}

fn closing_block(session: &OfferSession) -> String {
    let sender = session.sender();
    format!(
        "My team and I have extensive experience in real estate acquisitions in this area and \
         are committed to a smooth transaction process. I understand the unique considerations \
         involved in this type of transaction and will ensure all necessary documentation is \
         handled professionally.\n\n\
         Please consider this a formal expression of my interest in the property. I look \
         forward to your response and am available to discuss any aspects of this offer at \
         your convenience.\n\n\
         Sincerely,\n\n{}\n{}\n{}",
        sender.name, sender.company, sender.contact_info
    )
}
