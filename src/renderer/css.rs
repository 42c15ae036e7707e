//! Per-slot positioning rules for HTML renderers
//!
//! One rule per physical slot, keyed by the slot id, so the same rule
//! positions whichever product occupies that slot on any page. Screen rules
//! use preview pixels; the `@media print` block repeats them in inches.

use std::fmt::Write;

use super::device::{page_slots, px};
use super::SvgConfig;
use crate::plan::SheetPlan;

/// Render the slot stylesheet for a plan
pub fn render_slot_css(plan: &SheetPlan, config: &SvgConfig) -> String {
    let prefix = config.prefix();
    let page = plan.page;
    let slots = page_slots(plan.geometry());
    let indent = if config.pretty_print { "  " } else { "" };

    let mut css = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(css, "@page {{ size: {}in {}in; margin: 0; }}", page.width, page.height);
    let _ = writeln!(
        css,
        ".{}sheet {{ position: relative; width: {}px; height: {}px; }}",
        prefix,
        px(page.width),
        px(page.height)
    );
    let _ = writeln!(
        css,
        ".{}slot {{ position: absolute; box-sizing: border-box; }}",
        prefix
    );
    for slot in &slots {
        let r = slot.pixel_rect;
        let _ = writeln!(
            css,
            ".{}slot-{} {{ left: {}px; top: {}px; width: {}px; height: {}px; }}",
            prefix, slot.slot_id, r.left, r.top, r.width, r.height
        );
    }

    let _ = writeln!(css, "@media print {{");
    let _ = writeln!(
        css,
        "{}.{}sheet {{ width: {}in; height: {}in; }}",
        indent, prefix, page.width, page.height
    );
    for slot in &slots {
        let r = slot.inch_rect;
        let _ = writeln!(
            css,
            "{}.{}slot-{} {{ left: {}in; top: {}in; width: {}in; height: {}in; }}",
            indent, prefix, slot.slot_id, r.left, r.top, r.width, r.height
        );
    }
    css.push_str("}\n");
    css
}
