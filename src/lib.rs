//! LOI Engine - Offer structuring and document generation for real-estate acquisitions
//!
//! This library provides:
//! - Amortization math and multi-strategy offer derivation (cash,
//!   subject-to, seller financing, hybrid)
//! - An explicit drafting-session value with pure, reactive figure
//!   derivation
//! - A template registry (builtin + user-managed) with durable JSON
//!   persistence
//! - A document composer with placeholder substitution and per-strategy
//!   clause blocks
//! - An async export pipeline that paginates a raster snapshot into a
//!   fixed-page-size artifact

pub mod document;
pub mod error;
pub mod export;
pub mod offer;
pub mod property;
pub mod template;

// Re-export commonly used types
pub use document::{compose, ComposedDocument};
pub use error::{ExportError, PersistenceError, ValidationError};
pub use export::{ExportArtifact, ExportPipeline, RenderSurface};
pub use offer::{derive_offer, DerivedFigures, OfferSession, Strategy};
pub use property::Property;
pub use template::{Template, TemplateStore};
