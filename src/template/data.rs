//! Template data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a template shipped with the product or was created by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateOrigin {
    /// Shipped, immutable, never persisted
    Builtin,
    /// User-created, editable, persisted
    Custom,
}

/// Symbolic icon identifier; rendering is entirely the presentation layer's
/// concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateIcon {
    Dollar,
    Home,
    Calendar,
    Warning,
    FileText,
}

/// A named LOI template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique across the builtin and custom sets combined
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description
    pub description: String,

    /// Letter body with placeholder tokens; empty for builtins, which use
    /// the composer's structured default body
    pub body: String,

    pub origin: TemplateOrigin,

    pub icon: TemplateIcon,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Template {
    pub fn is_custom(&self) -> bool {
        self.origin == TemplateOrigin::Custom
    }
}

/// Fields of a custom template that can be edited in place
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}
