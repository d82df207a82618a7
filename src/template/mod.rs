//! Offer-letter templates: the fixed builtin set plus user-managed custom
//! entries with durable persistence

pub mod builtin;
pub mod data;
pub mod store;

pub use builtin::{builtin_templates, default_template_body, STANDARD_CASH_ID};
pub use data::{Template, TemplateIcon, TemplateOrigin, TemplatePatch};
pub use store::{
    CustomTemplateRecord, JsonFileStorage, MemoryStorage, TemplateStorage, TemplateStore,
    DEFAULT_TEMPLATES_PATH,
};
