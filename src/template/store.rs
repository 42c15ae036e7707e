//! Persistence for user-defined templates
//!
//! The engine itself never touches storage. These backends exist for the
//! surrounding application: the catalog is seeded from a store, and the custom
//! template builder saves into one.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::LabelTemplate;

/// Errors from a template store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access template store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template store {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for custom templates, keyed by template id
pub trait TemplateStore {
    /// Load every stored template, in insertion order
    fn load_all(&self) -> Result<Vec<LabelTemplate>, StoreError>;

    /// Insert or replace the template with the same id
    fn save(&self, template: &LabelTemplate) -> Result<(), StoreError>;

    /// Remove a template. Returns false if no template had that id.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;
}

/// In-memory store, used by tests and by callers that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: RefCell<Vec<LabelTemplate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<LabelTemplate>, StoreError> {
        Ok(self.templates.borrow().clone())
    }

    fn save(&self, template: &LabelTemplate) -> Result<(), StoreError> {
        upsert(&mut self.templates.borrow_mut(), template);
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut templates = self.templates.borrow_mut();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        Ok(templates.len() != before)
    }
}

/// Store backed by a single JSON file holding an array of templates
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_all(&self, templates: &[LabelTemplate]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(templates).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        // Write beside the target, then rename over it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;

        debug!(path = %self.path.display(), count = templates.len(), "saved template store");
        Ok(())
    }
}

impl TemplateStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<LabelTemplate>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "template store missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let templates: Vec<LabelTemplate> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = templates.len(), "loaded template store");
        Ok(templates)
    }

    fn save(&self, template: &LabelTemplate) -> Result<(), StoreError> {
        let mut templates = self.load_all()?;
        upsert(&mut templates, template);
        self.write_all(&templates)
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut templates = self.load_all()?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Ok(false);
        }
        self.write_all(&templates)?;
        Ok(true)
    }
}

fn upsert(templates: &mut Vec<LabelTemplate>, template: &LabelTemplate) {
    match templates.iter_mut().find(|t| t.id == template.id) {
        Some(existing) => *existing = template.clone(),
        None => templates.push(template.clone()),
    }
}
