//! Label sheet templates
//!
//! This module holds the template record, the catalog of named templates, the
//! builder for custom templates entered in centimetres, and storage backends
//! for persisting custom templates.
//!
//! # Example
//!
//! ```rust
//! use label_sheet::template::{CustomTemplateSpec, TemplateCatalog};
//!
//! let mut catalog = TemplateCatalog::with_builtins();
//! let spec = CustomTemplateSpec {
//!     id: None,
//!     name: "Shelf tags".to_string(),
//!     description: String::new(),
//!     columns: 4,
//!     rows: 12,
//!     label_width_cm: 4.6,
//!     label_height_cm: 2.2,
//!     horizontal_pitch_cm: 5.08,
//!     vertical_pitch_cm: 2.2,
//!     page_width_cm: 21.0,
//!     page_height_cm: 29.7,
//!     margin_top_cm: 1.3,
//!     margin_bottom_cm: 1.0,
//!     margin_left_cm: 0.6,
//!     margin_right_cm: 0.6,
//! };
//! let template = spec.build_at(1_700_000_000_000);
//! assert_eq!(template.id, "custom-shelf-tags-1700000000000");
//! catalog.register(template).unwrap();
//! ```

mod builtin;
mod catalog;
mod custom;
mod definition;
pub mod store;

pub use builtin::builtin_templates;
pub use catalog::TemplateCatalog;
pub use custom::{custom_template_id, slugify, CustomTemplateSpec};
pub use definition::LabelTemplate;
pub use store::{JsonFileStore, MemoryStore, StoreError, TemplateStore};

use thiserror::Error;

/// Errors from catalog lookups and registration
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in the catalog
    #[error("template not found: {id}{}", format_suggestions(suggestions))]
    NotFound { id: String, suggestions: Vec<String> },

    /// A template with this id is already registered
    #[error("duplicate template id: {id}")]
    Duplicate { id: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
