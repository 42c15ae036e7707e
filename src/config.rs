//! TOML configuration for sheet runs
//!
//! A config file sets the default template and request, and can declare
//! custom templates in centimetres:
//!
//! ```toml
//! [defaults]
//! template = "shelf-tags"
//! slots_per_page = 40
//! page_count = 2
//!
//! [[templates]]
//! id = "shelf-tags"
//! name = "Shelf tags"
//! columns = 4
//! rows = 12
//! label_width_cm = 4.6
//! label_height_cm = 2.2
//! horizontal_pitch_cm = 5.08
//! vertical_pitch_cm = 2.2
//! margin_top_cm = 1.3
//! margin_left_cm = 0.6
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::plan::SheetRequest;
use crate::template::{slugify, CustomTemplateSpec, TemplateCatalog, TemplateError};

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings loaded from a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub defaults: Defaults,
    /// Custom templates, in centimetres
    #[serde(default)]
    pub templates: Vec<CustomTemplateSpec>,
}

/// The `[defaults]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Defaults {
    pub template: Option<String>,
    pub slots_per_page: Option<usize>,
    pub page_count: Option<usize>,
}

impl SheetConfig {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The default request from the `[defaults]` table
    pub fn request(&self) -> SheetRequest {
        SheetRequest {
            slots_per_page: self.defaults.slots_per_page,
            page_count: self.defaults.page_count,
        }
    }

    /// Build the declared templates and add them to `catalog`.
    ///
    /// Entries without an `id` are keyed by the slug of their name, so a
    /// config file names the same template on every run.
    pub fn register_templates(&self, catalog: &mut TemplateCatalog) -> Result<usize, TemplateError> {
        for spec in &self.templates {
            let mut spec = spec.clone();
            if spec.id.is_none() {
                spec.id = Some(slugify(&spec.name));
            }
            catalog.register(spec.build())?;
        }
        Ok(self.templates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[defaults]
template = "shelf-tags"
slots_per_page = 40

[[templates]]
name = "Shelf tags"
columns = 4
rows = 12
label_width_cm = 4.6
label_height_cm = 2.2
horizontal_pitch_cm = 5.08
vertical_pitch_cm = 2.2
margin_top_cm = 1.3
margin_left_cm = 0.6
"#;

    #[test]
    fn test_parse_config() {
        let config = SheetConfig::from_str(CONFIG).unwrap();
        assert_eq!(config.defaults.template.as_deref(), Some("shelf-tags"));
        assert_eq!(
            config.request(),
            SheetRequest::new().with_slots_per_page(40)
        );
        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.templates[0].page_width_cm, 21.0);
    }

    #[test]
    fn test_empty_config() {
        let config = SheetConfig::from_str("").unwrap();
        assert_eq!(config, SheetConfig::default());
    }

    #[test]
    fn test_register_templates_uses_slug_id() {
        let config = SheetConfig::from_str(CONFIG).unwrap();
        let mut catalog = TemplateCatalog::new();
        assert_eq!(config.register_templates(&mut catalog).unwrap(), 1);

        let template = catalog.get("shelf-tags").unwrap();
        assert_eq!(template.columns, 4);
        assert!((template.gap_horizontal - 0.48 / 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_register_twice_is_duplicate() {
        let config = SheetConfig::from_str(CONFIG).unwrap();
        let mut catalog = TemplateCatalog::new();
        config.register_templates(&mut catalog).unwrap();
        assert!(matches!(
            config.register_templates(&mut catalog),
            Err(TemplateError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result = SheetConfig::from_str("[defaults\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
