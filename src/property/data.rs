//! Property record structures matching the listing export format

use serde::{Deserialize, Serialize};

/// Broad property category from the listing source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Commercial,
}

impl PropertyType {
    /// Human-readable label as shown in listing exports
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Commercial => "Commercial",
        }
    }

    /// Parse the label used in listing CSV exports
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Single Family" => Some(PropertyType::SingleFamily),
            "Multi-Family" => Some(PropertyType::MultiFamily),
            "Condo" => Some(PropertyType::Condo),
            "Townhouse" => Some(PropertyType::Townhouse),
            "Commercial" => Some(PropertyType::Commercial),
            _ => None,
        }
    }
}

/// Listing agent contact attached to a property record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentContact {
    /// Agent full name
    pub name: String,

    /// Brokerage or company name
    pub company: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,
}

/// A single property record from the listing data source (read-only input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Unique listing identifier
    pub property_id: u32,

    /// Full street address including city, state, zip
    pub address: String,

    /// Property category
    pub property_type: PropertyType,

    /// List price in whole dollars; must be strictly positive
    pub price: i64,

    /// Listing agent contact
    pub agent: AgentContact,
}

impl Property {
    /// Create a new property record
    pub fn new(
        property_id: u32,
        address: impl Into<String>,
        property_type: PropertyType,
        price: i64,
        agent: AgentContact,
    ) -> Self {
        Self {
            property_id,
            address: address.into(),
            property_type,
            price,
            agent,
        }
    }
}
