//! CSV-based listing loader
//!
//! Loads property records from listing CSV exports with the columns:
//! `id,address,type,price,agent_name,agent_company,agent_email,agent_phone`

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::data::{AgentContact, Property, PropertyType};

/// Default path to the listings file
pub const DEFAULT_LISTINGS_PATH: &str = "data/listings.csv";

/// Raw CSV row matching the listings export columns
#[derive(Debug, serde::Deserialize)]
struct ListingRow {
    id: u32,
    address: String,
    #[serde(rename = "type")]
    property_type: String,
    price: i64,
    agent_name: String,
    agent_company: String,
    agent_email: String,
    agent_phone: String,
}

impl ListingRow {
    fn to_property(self) -> Result<Property, Box<dyn Error>> {
        let property_type = PropertyType::from_label(&self.property_type)
            .ok_or_else(|| format!("unknown property type '{}'", self.property_type))?;

        Ok(Property::new(
            self.id,
            self.address,
            property_type,
            self.price,
            AgentContact {
                name: self.agent_name,
                company: self.agent_company,
                email: self.agent_email,
                phone: self.agent_phone,
            },
        ))
    }
}

/// Load property records from a listings CSV file
pub fn load_listings(path: &Path) -> Result<Vec<Property>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_listings(file)
}

/// Load property records from the default listings path
pub fn load_default_listings() -> Result<Vec<Property>, Box<dyn Error>> {
    load_listings(Path::new(DEFAULT_LISTINGS_PATH))
}

/// Read property records from any CSV reader
pub fn read_listings<R: Read>(reader: R) -> Result<Vec<Property>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut properties = Vec::new();

    for result in csv_reader.deserialize() {
        let row: ListingRow = result?;
        properties.push(row.to_property()?);
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,address,type,price,agent_name,agent_company,agent_email,agent_phone
1,\"123 Main St, Orlando, FL 32801\",Single Family,350000,Sarah Johnson,Orlando Realty Group,sarah@example.com,(407) 555-1234
2,\"456 Oak Ave, Miami, FL 33101\",Multi-Family,750000,Michael Brown,Miami Property Experts,michael@example.com,(305) 555-6789
";

    #[test]
    fn test_read_listings() {
        let properties = read_listings(SAMPLE.as_bytes()).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].price, 350_000);
        assert_eq!(properties[0].property_type, PropertyType::SingleFamily);
        assert_eq!(properties[1].agent.name, "Michael Brown");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let bad = "id,address,type,price,agent_name,agent_company,agent_email,agent_phone\n\
                   1,somewhere,Spaceship,100,a,b,c,d\n";
        assert!(read_listings(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_truncated_header_rejected() {
        let truncated = "id,address,type\n1,somewhere,Single Family\n";
        assert!(read_listings(truncated.as_bytes()).is_err());
    }

    #[test]
    fn test_truncated_row_rejected() {
        let short_row = "id,address,type,price,agent_name,agent_company,agent_email,agent_phone\n\
                         1,somewhere,Single Family\n";
        assert!(read_listings(short_row.as_bytes()).is_err());
    }
}
