//! Slot positioning for label sheet templates
//!
//! Maps a template and a `(row, col)` grid position to the label rectangle in
//! inches. One of three policies applies, chosen from the template's shape:
//!
//! - **Fixed output**: the template declares pitch and its page matches the
//!   configured output format. The pitch grid is stretched, independently on
//!   each axis, so that it exactly fills the output page between the template
//!   margins. This trades the label's aspect ratio for exact margins on the
//!   one format the print pipeline produces; do not "correct" it to a uniform
//!   scale.
//! - **Pitch**: the template declares pitch on any other page. Origins are
//!   `index * pitch`, relative to the margin box, at scale 1.
//! - **Gap**: no pitch. Labels are laid out from the margins with the declared
//!   gaps, shrunk if the grid cannot fit, and clamped onto the page.
//!
//! Geometry depends only on the template and the grid position, never on page
//! index or product, so one positioning rule per slot serves every page.

use serde::Serialize;

use super::config::LayoutConfig;
use super::slots;
use super::types::{GridPos, LabelSlot, PageFormat, Rect};
use crate::template::LabelTemplate;

/// Float noise allowed when checking whether a gap grid fits its page
const FIT_TOLERANCE: f64 = 1e-9;

/// Which positioning policy a template is laid out with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositioningPolicy {
    /// Pitch grid stretched to the fixed output format
    FixedOutput { scale_x: f64, scale_y: f64 },
    /// Pitch grid at real-world size
    Pitch,
    /// Margin and gap layout
    Gap,
}

/// Computes slot geometry for templates
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolve the geometry of a whole sheet.
    ///
    /// Expects a template that passed [`super::validate::sanitize`]; degenerate
    /// values do not panic but produce degenerate rectangles.
    pub fn sheet(&self, template: &LabelTemplate) -> SheetGeometry {
        let columns = template.columns.max(1) as usize;
        let rows = template.rows.max(1) as usize;

        let fixed_output = self.config.fixed_output.filter(|format| {
            format.matches(
                template.page_width,
                template.page_height,
                self.config.format_epsilon,
            )
        });

        let (policy, x, y) = match (template.pitch(), fixed_output) {
            (Some((hp, vp)), Some(format)) => {
                let (x, scale_x) = stretched_axis(
                    columns,
                    hp,
                    template.label_width,
                    template.margin_left,
                    template.margin_right,
                    format.width,
                );
                let (y, scale_y) = stretched_axis(
                    rows,
                    vp,
                    template.label_height,
                    template.margin_top,
                    template.margin_bottom,
                    format.height,
                );
                (PositioningPolicy::FixedOutput { scale_x, scale_y }, x, y)
            }
            (Some((hp, vp)), None) => (
                PositioningPolicy::Pitch,
                Axis::unbounded(0.0, hp, template.label_width),
                Axis::unbounded(0.0, vp, template.label_height),
            ),
            (None, _) => (
                PositioningPolicy::Gap,
                gap_axis(
                    columns,
                    template.label_width,
                    template.gap_horizontal,
                    template.margin_left,
                    template.margin_right,
                    template.page_width,
                ),
                gap_axis(
                    rows,
                    template.label_height,
                    template.gap_vertical,
                    template.margin_top,
                    template.margin_bottom,
                    template.page_height,
                ),
            ),
        };

        SheetGeometry {
            template: template.clone(),
            output_format: fixed_output,
            policy,
            x,
            y,
        }
    }

    /// Which policy applies to a template
    pub fn policy(&self, template: &LabelTemplate) -> PositioningPolicy {
        self.sheet(template).policy
    }

    /// Geometry of a single slot, in inches
    pub fn position(&self, template: &LabelTemplate, row: usize, col: usize) -> LabelSlot {
        self.sheet(template).slot(row, col)
    }
}

/// Resolved layout of one template. Cheap to query per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGeometry {
    template: LabelTemplate,
    output_format: Option<PageFormat>,
    policy: PositioningPolicy,
    x: Axis,
    y: Axis,
}

impl SheetGeometry {
    pub fn template(&self) -> &LabelTemplate {
        &self.template
    }

    pub fn policy(&self) -> PositioningPolicy {
        self.policy
    }

    pub fn columns(&self) -> usize {
        self.template.columns.max(1) as usize
    }

    pub fn rows(&self) -> usize {
        self.template.rows.max(1) as usize
    }

    /// Slots on one full page
    pub fn capacity(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Physical page the slots are printed on
    pub fn page_format(&self) -> PageFormat {
        self.output_format
            .unwrap_or_else(|| self.template.page_format())
    }

    /// Offset of the slot coordinate frame from the page's top-left corner.
    ///
    /// Only the pitch policy reports slots relative to the margin box.
    pub fn page_origin(&self) -> (f64, f64) {
        match self.policy {
            PositioningPolicy::Pitch => (self.template.margin_left, self.template.margin_top),
            PositioningPolicy::FixedOutput { .. } | PositioningPolicy::Gap => (0.0, 0.0),
        }
    }

    /// Whether the gap layout had to shrink labels on (x, y) to fit the page
    pub fn shrunk(&self) -> (bool, bool) {
        (self.x.shrunk, self.y.shrunk)
    }

    /// Geometry of the slot at `(row, col)`
    pub fn slot(&self, row: usize, col: usize) -> LabelSlot {
        debug_assert!(row < self.rows() && col < self.columns());
        let (left, width) = self.x.place(col);
        let (top, height) = self.y.place(row);
        LabelSlot::new(GridPos::new(row, col), Rect::new(left, top, width, height))
    }

    pub fn slot_at(&self, pos: GridPos) -> LabelSlot {
        self.slot(pos.row, pos.col)
    }

    /// Every slot on the sheet in row-major order
    pub fn slots(&self) -> Vec<LabelSlot> {
        slots::enumerate_grid(self.columns(), self.rows(), None)
            .into_iter()
            .map(|pos| self.slot_at(pos))
            .collect()
    }
}

/// Placement along one axis: `origin + index * step`, `size` long
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    origin: f64,
    step: f64,
    size: f64,
    /// Page extent to clamp into, for the gap layout
    bound: Option<f64>,
    shrunk: bool,
}

impl Axis {
    fn unbounded(origin: f64, step: f64, size: f64) -> Self {
        Self {
            origin,
            step,
            size,
            bound: None,
            shrunk: false,
        }
    }

    fn place(&self, index: usize) -> (f64, f64) {
        let start = self.origin + index as f64 * self.step;
        match self.bound {
            Some(extent) => {
                let size = self.size.min(extent);
                (start.clamp(0.0, (extent - size).max(0.0)), size)
            }
            None => (start, self.size),
        }
    }
}

/// Stretch a pitch grid to fill `extent` minus margins.
///
/// Returns the axis and its scale factor.
fn stretched_axis(
    count: usize,
    pitch: f64,
    label: f64,
    margin_start: f64,
    margin_end: f64,
    extent: f64,
) -> (Axis, f64) {
    let grid = (count - 1) as f64 * pitch + label;
    let target = extent - margin_start - margin_end;
    let scale = if grid > 0.0 && target > 0.0 {
        target / grid
    } else {
        1.0
    };

    // Only rounding can leave residual space; center it
    let residual = target - grid * scale;
    let offset = if residual > 0.0 { residual / 2.0 } else { 0.0 };

    (
        Axis::unbounded(margin_start + offset, pitch * scale, label * scale),
        scale,
    )
}

/// Lay out `count` labels from the start margin with `gap` between them
fn gap_axis(
    count: usize,
    label: f64,
    gap: f64,
    margin_start: f64,
    margin_end: f64,
    extent: f64,
) -> Axis {
    let n = count as f64;
    let available = (extent - margin_start - margin_end).max(0.0);
    let gaps = (n - 1.0) * gap;

    let (size, gap, shrunk) = if n * label + gaps <= available + FIT_TOLERANCE {
        (label, gap, false)
    } else if available > gaps {
        ((available - gaps) / n, gap, true)
    } else {
        (available / n, 0.0, true)
    };

    Axis {
        origin: margin_start,
        step: size + gap,
        size,
        bound: Some(extent),
        shrunk,
    }
}
