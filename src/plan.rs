//! Sheet planning: template + request + selection in, pages and warnings out
//!
//! [`plan_sheet`] is the single entry point that joins the layout engine, the
//! slot enumerator, the assigner and the paginator. It is pure: repairs and
//! clamps are returned as diagnostics rather than logged. [`PlanCache`]
//! memoizes the last plan so an interactive front end can call it on every
//! state change and only pay for a recompute when an input actually changed.

use std::sync::Arc;

use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticCategory};
use crate::layout::{sanitize, LayoutEngine, PageFormat, PositioningPolicy, SheetGeometry};
use crate::pagination::{paginate, AssignmentPlan, Page};
use crate::product::ProductId;
use crate::template::LabelTemplate;

/// How many labels to print, before clamping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetRequest {
    /// Labels per page; `None` fills the grid
    pub slots_per_page: Option<usize>,
    /// Pages to print; `None` prints one
    pub page_count: Option<usize>,
}

impl SheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots_per_page(mut self, slots: usize) -> Self {
        self.slots_per_page = Some(slots);
        self
    }

    pub fn with_page_count(mut self, pages: usize) -> Self {
        self.page_count = Some(pages);
        self
    }
}

/// A fully resolved print run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetPlan {
    /// The template after repair
    pub template: LabelTemplate,
    pub policy: PositioningPolicy,
    /// Physical page the slots are printed on
    pub page: PageFormat,
    /// Offset of slot coordinates from the page corner, in inches
    pub page_origin: (f64, f64),
    pub slots_per_page: usize,
    pub page_count: usize,
    pub total_slots: usize,
    pub pages: Vec<Page<ProductId>>,
    #[serde(skip)]
    geometry: SheetGeometry,
}

impl SheetPlan {
    /// Resolved slot geometry the pages were built from
    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Whether no slot carries a product
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A plan and everything the engine had to repair to produce it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutcome {
    pub plan: SheetPlan,
    pub warnings: Vec<Diagnostic>,
}

/// Plan a print run.
///
/// Never fails: malformed templates are repaired, out-of-range requests are
/// clamped, and an empty selection produces zero pages.
pub fn plan_sheet(
    engine: &LayoutEngine,
    template: &LabelTemplate,
    products: &[ProductId],
    request: &SheetRequest,
) -> PlanOutcome {
    let (template, mut warnings) = sanitize(template);

    let geometry = engine.sheet(&template);
    let (shrunk_x, shrunk_y) = geometry.shrunk();
    if shrunk_x {
        warnings.push(Diagnostic::warning(
            DiagnosticCategory::Fit,
            format!(
                "template '{}': {} columns do not fit between the margins, labels narrowed",
                template.id,
                geometry.columns()
            ),
        ));
    }
    if shrunk_y {
        warnings.push(Diagnostic::warning(
            DiagnosticCategory::Fit,
            format!(
                "template '{}': {} rows do not fit between the margins, labels shortened",
                template.id,
                geometry.rows()
            ),
        ));
    }

    let capacity = geometry.capacity();
    let assignment = AssignmentPlan::new(
        products.to_vec(),
        capacity,
        request.slots_per_page,
        request.page_count,
    );

    if let Some(requested) = request.slots_per_page {
        if requested != assignment.slots_per_page {
            warnings.push(Diagnostic::info(
                DiagnosticCategory::Request,
                format!(
                    "{} labels per page requested, sheet holds {}",
                    requested, assignment.slots_per_page
                ),
            ));
        }
    }
    if let Some(requested) = request.page_count {
        if requested != assignment.page_count {
            warnings.push(Diagnostic::info(
                DiagnosticCategory::Request,
                format!(
                    "{} pages requested, using {}",
                    requested, assignment.page_count
                ),
            ));
        }
    }

    let pages = paginate(&assignment, &geometry);

    PlanOutcome {
        plan: SheetPlan {
            policy: geometry.policy(),
            page: geometry.page_format(),
            page_origin: geometry.page_origin(),
            slots_per_page: assignment.slots_per_page,
            page_count: assignment.page_count,
            total_slots: assignment.total_slots(),
            pages,
            template,
            geometry,
        },
        warnings,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PlanKey {
    template: LabelTemplate,
    products: Vec<ProductId>,
    request: SheetRequest,
}

/// Memoizes the most recent plan.
///
/// Holds one entry: interactive callers replan on every edit and only ever
/// need the latest inputs.
#[derive(Debug, Default)]
pub struct PlanCache {
    engine: LayoutEngine,
    last: Option<(PlanKey, Arc<PlanOutcome>)>,
}

impl PlanCache {
    pub fn new(engine: LayoutEngine) -> Self {
        Self { engine, last: None }
    }

    /// Plan for these inputs, reusing the previous result when they are unchanged
    pub fn plan(
        &mut self,
        template: &LabelTemplate,
        products: &[ProductId],
        request: &SheetRequest,
    ) -> Arc<PlanOutcome> {
        if let Some((key, outcome)) = &self.last {
            if key.template == *template && key.products == products && key.request == *request {
                return Arc::clone(outcome);
            }
        }

        let outcome = Arc::new(plan_sheet(&self.engine, template, products, request));
        self.last = Some((
            PlanKey {
                template: template.clone(),
                products: products.to_vec(),
                request: *request,
            },
            Arc::clone(&outcome),
        ));
        outcome
    }

    /// Drop the memoized plan
    pub fn clear(&mut self) {
        self.last = None;
    }
}
