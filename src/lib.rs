//! Label Sheet - layout and pagination for print-ready label sheets
//!
//! This library turns a label-sheet template and a product selection into
//! exact slot geometry and a page-by-page assignment of products to slots,
//! then renders those pages as a slot stylesheet, an SVG preview or JSON.
//!
//! # Example
//!
//! ```rust
//! use label_sheet::{plan_from_catalog, ProductId, SheetRequest, TemplateCatalog};
//!
//! let catalog = TemplateCatalog::with_builtins();
//! let products = vec![ProductId::new("p0"), ProductId::new("p1"), ProductId::new("p2")];
//!
//! let outcome = plan_from_catalog(&catalog, "a4-65", &products, &SheetRequest::new()).unwrap();
//! assert_eq!(outcome.plan.pages.len(), 1);
//! assert_eq!(outcome.plan.pages[0].populated(), 65);
//! assert_eq!(outcome.plan.pages[0].slots[64].product, Some(ProductId::new("p1")));
//! ```

pub mod config;
pub mod diagnostics;
pub mod layout;
pub mod pagination;
pub mod plan;
pub mod product;
pub mod renderer;
pub mod template;

pub use config::{ConfigError, SheetConfig};
pub use diagnostics::{Diagnostic, DiagnosticCategory, Severity};
pub use layout::{LayoutConfig, LayoutEngine, PositioningPolicy, SheetGeometry};
pub use pagination::{Page, PageSlot};
pub use plan::{plan_sheet, PlanCache, PlanOutcome, SheetPlan, SheetRequest};
pub use product::{Product, ProductError, ProductId};
pub use renderer::{render_page_svg, render_slot_css, SvgConfig};
pub use template::{LabelTemplate, StoreError, TemplateCatalog, TemplateError};

use thiserror::Error;

/// Errors that can occur around a sheet run.
///
/// Planning itself never fails; these cover looking up templates and loading
/// the inputs a run needs.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// Plan a run for a catalog template with the default layout configuration
pub fn plan_from_catalog(
    catalog: &TemplateCatalog,
    template_id: &str,
    products: &[ProductId],
    request: &SheetRequest,
) -> Result<PlanOutcome, SheetError> {
    let template = catalog.require(template_id)?;
    Ok(plan_sheet(&LayoutEngine::default(), template, products, request))
}

/// Serialize a plan outcome for external renderers
pub fn plan_to_json(outcome: &PlanOutcome) -> Result<String, SheetError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
