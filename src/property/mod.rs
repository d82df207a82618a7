//! Property records supplied by the listing data source

pub mod data;
pub mod loader;

pub use data::{AgentContact, Property, PropertyType};
pub use loader::{load_default_listings, load_listings, read_listings};
