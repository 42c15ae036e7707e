//! Conversion from inch geometry to preview pixels
//!
//! The print surface consumes inches unchanged; the interactive preview uses
//! CSS pixels at a fixed 96 per inch. Both are derived from the same slot, so
//! they always describe the same physical rectangle.

use serde::Serialize;

use crate::layout::{LabelSlot, Rect, SheetGeometry, SlotId};
use crate::pagination::Page;

/// CSS pixels per inch
pub const PREVIEW_DPI: f64 = 96.0;

/// Allowed disagreement between `pixel_rect / 96` and `inch_rect`
pub const AGREEMENT_TOLERANCE: f64 = 1e-6;

/// A slot in both preview pixels and print inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSlot {
    pub slot_id: SlotId,
    pub pixel_rect: Rect,
    pub inch_rect: Rect,
}

impl DeviceSlot {
    /// Whether the two representations describe the same rectangle
    pub fn agrees(&self) -> bool {
        self.pixel_rect
            .scale(1.0 / PREVIEW_DPI)
            .max_deviation(&self.inch_rect)
            <= AGREEMENT_TOLERANCE
    }
}

/// Convert a slot to its pixel and inch representations
pub fn to_device_units(slot: &LabelSlot) -> DeviceSlot {
    let inch_rect = slot.rect();
    DeviceSlot {
        slot_id: slot.id(),
        pixel_rect: inch_rect.scale(PREVIEW_DPI),
        inch_rect,
    }
}

/// Inches to preview pixels
pub fn px(inches: f64) -> f64 {
    inches * PREVIEW_DPI
}

/// Every slot of a sheet in page coordinates, in row-major order.
///
/// Applies the sheet's page origin, so the rectangles can be placed directly
/// on the physical page.
pub fn page_slots(sheet: &SheetGeometry) -> Vec<DeviceSlot> {
    let (dx, dy) = sheet.page_origin();
    sheet
        .slots()
        .iter()
        .map(|slot| to_device_units(&LabelSlot::new(slot.pos(), slot.rect().translate(dx, dy))))
        .collect()
}

/// One slot of a page in preview pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelSlot<T> {
    pub slot_id: SlotId,
    pub pixel_rect: Rect,
    pub product: Option<T>,
}

/// Pixel-space mirror of a [`Page`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelPage<T> {
    pub index: usize,
    pub slots: Vec<PixelSlot<T>>,
}

/// Mirror pages into preview pixels, slot for slot
pub fn pixel_mirror<T: Clone>(pages: &[Page<T>]) -> Vec<PixelPage<T>> {
    pages
        .iter()
        .map(|page| PixelPage {
            index: page.index,
            slots: page
                .slots
                .iter()
                .map(|slot| PixelSlot {
                    slot_id: slot.slot_id,
                    pixel_rect: slot.position.scale(PREVIEW_DPI),
                    product: slot.product.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridPos, LayoutEngine, PageFormat};
    use crate::pagination::{paginate, AssignmentPlan};
    use crate::template::LabelTemplate;

    #[test]
    fn test_pixel_rect_is_96x() {
        let slot = LabelSlot::new(GridPos::new(2, 1), Rect::new(0.5, 1.25, 2.625, 1.0));
        let device = to_device_units(&slot);
        assert_eq!(device.pixel_rect, Rect::new(48.0, 120.0, 252.0, 96.0));
        assert_eq!(device.inch_rect, slot.rect());
        assert_eq!(device.slot_id.to_string(), "2-1");
        assert!(device.agrees());
    }

    #[test]
    fn test_agreement_on_scaled_sheet() {
        let t = LabelTemplate::new("s", "S", 3, 7)
            .with_page_format(PageFormat::A4)
            .with_label_size(2.5, 1.5)
            .with_margins(0.6, 0.28, 0.6, 0.28)
            .with_pitch(2.6, 1.5);
        let sheet = LayoutEngine::default().sheet(&t);
        for slot in sheet.slots() {
            assert!(to_device_units(&slot).agrees());
        }
    }

    #[test]
    fn test_page_slots_apply_origin() {
        let t = LabelTemplate::new("l", "L", 3, 10)
            .with_page_format(PageFormat::LETTER)
            .with_label_size(2.625, 1.0)
            .with_margins(0.5, 0.1875, 0.5, 0.1875)
            .with_pitch(2.75, 1.0);
        let sheet = LayoutEngine::default().sheet(&t);
        let slots = page_slots(&sheet);
        assert_eq!(slots.len(), 30);
        assert_eq!(slots[0].inch_rect.left, 0.1875);
        assert_eq!(slots[0].inch_rect.top, 0.5);
        assert_eq!(slots[0].pixel_rect.left, 18.0);
    }

    #[test]
    fn test_pixel_mirror_matches_pages() {
        let t = LabelTemplate::new("g", "G", 2, 2)
            .with_page_size(4.0, 4.0)
            .with_label_size(1.5, 1.5)
            .with_gaps(0.5, 0.5);
        let sheet = LayoutEngine::default().sheet(&t);
        let plan = AssignmentPlan::new(vec!["a", "b", "c"], 4, Some(3), Some(2));
        let pages = paginate(&plan, &sheet);
        let mirror = pixel_mirror(&pages);

        assert_eq!(mirror.len(), pages.len());
        for (page, pixels) in pages.iter().zip(&mirror) {
            assert_eq!(page.slots.len(), pixels.slots.len());
            for (slot, pixel) in page.slots.iter().zip(&pixels.slots) {
                assert_eq!(slot.slot_id, pixel.slot_id);
                assert_eq!(slot.product, pixel.product);
                assert!(pixel.pixel_rect.scale(1.0 / PREVIEW_DPI).max_deviation(&slot.position) <= AGREEMENT_TOLERANCE);
            }
        }
    }
}
