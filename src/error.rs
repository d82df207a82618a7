//! Error taxonomy for the offer engine
//!
//! Every failure is scoped to the operation that raised it; nothing in this
//! crate should terminate the process. Binaries wrap these in `anyhow` at the
//! top level.

use thiserror::Error;

/// Invalid numeric input to the derivation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Property list price must be strictly positive
    #[error("property price must be positive, got {0}")]
    NonPositivePrice(i64),

    /// A custom offer amount must be strictly positive
    #[error("custom offer amount must be positive, got {0}")]
    NonPositiveOfferAmount(i64),

    /// Percentage fields may not be negative
    #[error("{field} may not be negative, got {value}")]
    NegativePercentage { field: &'static str, value: f64 },

    /// Down payment is a share of the offer and is capped at 100%
    #[error("down payment percentage must be within [0, 100], got {0}")]
    DownPaymentOutOfRange(f64),

    /// Amortization over zero years is undefined
    #[error("loan term must be at least one year")]
    ZeroLoanTerm,
}

/// Template store read/write failure.
///
/// A read failure is recovered by falling back to an empty custom-template
/// set; a write failure leaves in-memory state authoritative until the next
/// successful write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("template storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("template record serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no template with id '{0}'")]
    UnknownTemplate(String),

    #[error("template '{0}' is builtin and cannot be modified")]
    BuiltinImmutable(String),
}

/// Export pipeline failure. Surfaced once to the caller; the in-flight flag
/// is cleared on every exit path.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("rasterization failed: {0}")]
    CaptureFailed(String),

    #[error("rendered surface produced an empty raster")]
    EmptySurface,

    #[error("an export is already in progress")]
    ExportInProgress,
}
