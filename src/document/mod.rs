//! Letter composition and display formatting

pub mod composer;
pub mod format;

pub use composer::{compose, substitute, ComposedDocument, DOCUMENT_TITLE};
pub use format::{format_currency, format_pct};
