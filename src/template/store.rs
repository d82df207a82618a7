//! Template registry and durable persistence
//!
//! The store is the union of the fixed builtin set and the user's custom
//! templates. Only the custom subset is persisted, and it is written in full
//! on every mutation. A corrupt or unreadable persistence file is treated as
//! "no custom templates" — recovered and logged, never fatal. A failed write
//! is surfaced to the caller, but the in-memory state stays authoritative
//! until the next successful write.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use super::builtin::builtin_templates;
use super::data::{Template, TemplateIcon, TemplateOrigin, TemplatePatch};

/// Default path for the custom-template file
pub const DEFAULT_TEMPLATES_PATH: &str = "data/loi_templates.json";

/// Persisted form of a custom template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplateRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Template> for CustomTemplateRecord {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            body: template.body.clone(),
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

impl From<CustomTemplateRecord> for Template {
    fn from(record: CustomTemplateRecord) -> Self {
        Template {
            id: record.id,
            name: record.name,
            description: record.description,
            body: record.body,
            origin: TemplateOrigin::Custom,
            icon: TemplateIcon::FileText,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Durable backend for the custom-template subset
pub trait TemplateStorage {
    /// Read the full persisted custom set
    fn load_custom(&self) -> Result<Vec<CustomTemplateRecord>, PersistenceError>;

    /// Replace the full persisted custom set
    fn save_custom(&mut self, records: &[CustomTemplateRecord]) -> Result<(), PersistenceError>;
}

/// JSON-file backend
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default templates path
    pub fn default_path() -> Self {
        Self::new(DEFAULT_TEMPLATES_PATH)
    }
}

impl TemplateStorage for JsonFileStorage {
    fn load_custom(&self) -> Result<Vec<CustomTemplateRecord>, PersistenceError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_custom(&mut self, records: &[CustomTemplateRecord]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStorage {
    records: Vec<CustomTemplateRecord>,
}

impl TemplateStorage for MemoryStorage {
    fn load_custom(&self) -> Result<Vec<CustomTemplateRecord>, PersistenceError> {
        Ok(self.records.clone())
    }

    fn save_custom(&mut self, records: &[CustomTemplateRecord]) -> Result<(), PersistenceError> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// Registry of builtin + custom templates with active-selection tracking
pub struct TemplateStore {
    /// Builtins in fixed order, then customs in creation order
    templates: Vec<Template>,
    active_id: String,
    storage: Box<dyn TemplateStorage>,
}

impl TemplateStore {
    /// Open the store, reloading the persisted custom subset. Unreadable
    /// persisted data degrades to an empty custom set, and a persisted
    /// record whose id collides with an existing template is skipped.
    pub fn open(storage: Box<dyn TemplateStorage>) -> Self {
        let mut templates = builtin_templates();

        match storage.load_custom() {
            Ok(records) => {
                info!("loaded {} custom template(s)", records.len());
                for record in records {
                    if templates.iter().any(|t| t.id == record.id) {
                        warn!("skipping persisted template '{}': id already taken", record.id);
                        continue;
                    }
                    templates.push(Template::from(record));
                }
            }
            Err(err) => {
                warn!("custom templates unreadable, starting with none: {err}");
            }
        }

        let active_id = templates[0].id.clone();
        Self {
            templates,
            active_id,
            storage,
        }
    }

    /// All templates: builtins first in fixed order, customs appended in
    /// creation order
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The active selection. The store guarantees one always exists.
    pub fn active(&self) -> &Template {
        self.get(&self.active_id)
            .expect("active template id always refers to an existing template")
    }

    pub fn select(&mut self, id: &str) -> Result<(), PersistenceError> {
        if self.get(id).is_none() {
            return Err(PersistenceError::UnknownTemplate(id.to_string()));
        }
        self.active_id = id.to_string();
        Ok(())
    }

    /// Create a custom template and persist the custom set.
    ///
    /// On a write failure the template is still registered in memory; the
    /// caller should prompt for a retry.
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        body: &str,
    ) -> Result<Template, PersistenceError> {
        let now = Utc::now();
        let id = self.fresh_id(now);
        let template = Template {
            id,
            name: name.to_string(),
            description: description.to_string(),
            body: body.to_string(),
            origin: TemplateOrigin::Custom,
            icon: TemplateIcon::FileText,
            created_at: now,
            updated_at: now,
        };
        self.templates.push(template.clone());
        self.persist()?;
        Ok(template)
    }

    /// Edit a custom template in place. Builtins are immutable.
    pub fn update(&mut self, id: &str, patch: TemplatePatch) -> Result<Template, PersistenceError> {
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PersistenceError::UnknownTemplate(id.to_string()))?;
        if !template.is_custom() {
            return Err(PersistenceError::BuiltinImmutable(id.to_string()));
        }

        if let Some(name) = patch.name {
            template.name = name;
        }
        if let Some(description) = patch.description {
            template.description = description;
        }
        if let Some(body) = patch.body {
            template.body = body;
        }
        template.updated_at = Utc::now();

        let updated = template.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Delete a custom template. If it was the active selection, selection
    /// falls back to the first remaining entry of [`list`](Self::list).
    pub fn delete(&mut self, id: &str) -> Result<(), PersistenceError> {
        let template = self
            .get(id)
            .ok_or_else(|| PersistenceError::UnknownTemplate(id.to_string()))?;
        if !template.is_custom() {
            return Err(PersistenceError::BuiltinImmutable(id.to_string()));
        }

        self.templates.retain(|t| t.id != id);
        if self.active_id == id {
            self.active_id = self.templates[0].id.clone();
        }
        self.persist()
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let records: Vec<CustomTemplateRecord> = self
            .templates
            .iter()
            .filter(|t| t.is_custom())
            .map(CustomTemplateRecord::from)
            .collect();
        self.storage.save_custom(&records).map_err(|err| {
            warn!("template write failed, in-memory set remains authoritative: {err}");
            err
        })
    }

    /// Time-based identifier, bumped on the negligible chance of collision
    fn fresh_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("custom-{}", now.timestamp_millis());
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}
