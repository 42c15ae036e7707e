//! Output surfaces for sheet plans
//!
//! Everything here consumes a [`SheetPlan`](crate::plan::SheetPlan) and
//! converts its inch geometry into something a browser or printer reads:
//! pixel/inch slot pairs, a slot stylesheet, or an SVG preview.

pub mod config;
pub mod css;
pub mod device;
pub mod svg;

pub use config::SvgConfig;
pub use css::render_slot_css;
pub use device::{
    page_slots, pixel_mirror, to_device_units, DeviceSlot, PixelPage, PixelSlot,
    AGREEMENT_TOLERANCE, PREVIEW_DPI,
};
pub use svg::{render_page_svg, SvgBuilder};
