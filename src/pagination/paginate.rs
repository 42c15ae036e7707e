//! Splitting a flat assignment into printable pages

use serde::Serialize;

use super::assign::AssignmentPlan;
use crate::layout::{GridPos, LabelSlot, Rect, SheetGeometry, SlotId};

/// One physical slot on one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlot<T> {
    pub slot_id: SlotId,
    /// Slot rectangle in inches
    pub position: Rect,
    /// `None` marks a placeholder
    pub product: Option<T>,
}

impl<T> PageSlot<T> {
    fn new(slot: &LabelSlot, product: Option<T>) -> Self {
        Self {
            slot_id: slot.id(),
            position: slot.rect(),
            product,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.slot_id.row, self.slot_id.col)
    }

    pub fn is_placeholder(&self) -> bool {
        self.product.is_none()
    }
}

/// A page always lists the full grid, populated or not, in row-major order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub index: usize,
    pub slots: Vec<PageSlot<T>>,
}

impl<T> Page<T> {
    /// Number of slots carrying a product
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|s| s.product.is_some()).count()
    }

    /// Number of placeholder slots
    pub fn placeholders(&self) -> usize {
        self.slots.len() - self.populated()
    }

    /// Products on this page in slot order
    pub fn products(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|s| s.product.as_ref())
    }
}

/// Lay the plan's assignment out over pages of `sheet`.
///
/// Page `p` takes `assignment[p * slots_per_page..(p + 1) * slots_per_page]`;
/// slot `i` of a page holds a product only when `i < slots_per_page`.
/// An empty selection or an empty run yields no pages.
pub fn paginate<T: Clone>(plan: &AssignmentPlan<T>, sheet: &SheetGeometry) -> Vec<Page<T>> {
    let assignment = plan.assignment();
    if assignment.is_empty() {
        return Vec::new();
    }
    debug_assert_eq!(assignment.len(), plan.total_slots());

    let grid = sheet.slots();
    (0..plan.page_count)
        .map(|index| {
            let owned = &assignment[plan.page_range(index)];
            let slots = grid
                .iter()
                .enumerate()
                .map(|(i, slot)| PageSlot::new(slot, owned.get(i).cloned()))
                .collect();
            Page { index, slots }
        })
        .collect()
}

/// A page of placeholders covering the full grid, for previewing a template
/// when nothing is assigned
pub fn preview_page<T>(sheet: &SheetGeometry) -> Page<T> {
    Page {
        index: 0,
        slots: sheet
            .slots()
            .iter()
            .map(|slot| PageSlot::new(slot, None))
            .collect(),
    }
}
