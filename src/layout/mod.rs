//! Layout engine for computing slot positions on label sheets
//!
//! This module takes a template and produces inch-based geometry for each
//! grid slot, plus the ordered list of slots to fill.

pub mod config;
pub mod engine;
pub mod slots;
pub mod types;
pub mod validate;

pub use config::LayoutConfig;
pub use engine::{LayoutEngine, PositioningPolicy, SheetGeometry};
pub use slots::{enumerate, enumerate_grid};
pub use types::*;
pub use validate::sanitize;
