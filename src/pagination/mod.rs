//! Product assignment and pagination
//!
//! Products are opaque here: only their order in the selection matters.

pub mod assign;
pub mod paginate;

pub use assign::{assign_cyclic, AssignmentPlan, MAX_PAGES};
pub use paginate::{paginate, preview_page, Page, PageSlot};
