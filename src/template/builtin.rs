//! Builtin templates shipped with the product
//!
//! One per acquisition strategy, in the fixed order they are listed.

use chrono::{DateTime, Utc};

use super::data::{Template, TemplateIcon, TemplateOrigin};

/// Identifier of the builtin cash template, the default selection
pub const STANDARD_CASH_ID: &str = "standard-cash";
pub const SUBJECT_TO_ID: &str = "subject-to";
pub const SELLER_FINANCING_ID: &str = "seller-financing";
pub const HYBRID_ID: &str = "hybrid";

/// The four builtin templates in their fixed listing order.
///
/// Builtins carry an empty body; the composer fills in its structured
/// default letter for them. They share a fixed epoch timestamp since they
/// are not user artifacts.
pub fn builtin_templates() -> Vec<Template> {
    let shipped: DateTime<Utc> = DateTime::UNIX_EPOCH;
    let template = |id: &str, name: &str, description: &str, icon| Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        body: String::new(),
        origin: TemplateOrigin::Builtin,
        icon,
        created_at: shipped,
        updated_at: shipped,
    };

    vec![
        template(
            STANDARD_CASH_ID,
            "Standard Cash Offer",
            "Quick closing with cash offer",
            TemplateIcon::Dollar,
        ),
        template(
            SUBJECT_TO_ID,
            "Subject To Acquisition",
            "Take over existing financing",
            TemplateIcon::Home,
        ),
        template(
            SELLER_FINANCING_ID,
            "Seller Financing Offer",
            "Owner financing terms",
            TemplateIcon::Calendar,
        ),
        template(
            HYBRID_ID,
            "Hybrid Offer - Subject To + Seller Finance",
            "Combined financing approach",
            TemplateIcon::Warning,
        ),
    ]
}

/// Starting body for a newly created custom template
pub fn default_template_body() -> String {
    "Dear [AGENT_NAME],\n\
     I am writing to express my interest in purchasing the property located at [PROPERTY_ADDRESS]. \
     After careful consideration of the property's location, condition, and potential, \
     I would like to submit the following Letter of Intent:\n\
     - Purchase Price: [OFFER_AMOUNT]\n\
     - Earnest Money Deposit: [EARNEST_MONEY]\n\
     - Closing Timeline: [CLOSING_TIMELINE] days from acceptance\n\
     - Inspection Period: [INSPECTION_PERIOD] days\n\
     I am prepared to move forward quickly and can provide proof of funds upon request. \
     My team and I have extensive experience in real estate acquisitions in this area \
     and are committed to a smooth transaction process.\n\
     Please consider this a formal expression of my interest in the property. \
     I look forward to your response and am available to discuss any aspects of this offer \
     at your convenience.\n\
     Sincerely,\n\
     [YOUR_NAME]\n\
     [YOUR_COMPANY]\n\
     [YOUR_CONTACT_INFO]"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_ids() {
        let builtins = builtin_templates();
        let ids: Vec<_> = builtins.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![STANDARD_CASH_ID, SUBJECT_TO_ID, SELLER_FINANCING_ID, HYBRID_ID]
        );
        assert!(builtins.iter().all(|t| t.origin == TemplateOrigin::Builtin));
    }

    #[test]
    fn test_default_body_carries_required_tokens() {
        let body = default_template_body();
        for token in [
            "[PROPERTY_ADDRESS]",
            "[AGENT_NAME]",
            "[OFFER_AMOUNT]",
            "[EARNEST_MONEY]",
            "[CLOSING_TIMELINE]",
            "[INSPECTION_PERIOD]",
            "[YOUR_NAME]",
            "[YOUR_COMPANY]",
            "[YOUR_CONTACT_INFO]",
        ] {
            assert!(body.contains(token), "missing {token}");
        }
    }
}
