//! Cyclic assignment of selected products to label slots

use std::ops::Range;

/// Upper bound on pages per print run
pub const MAX_PAGES: usize = 100;

/// Which products fill how many slots on how many pages.
///
/// Bounds are clamped on construction, so every plan is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPlan<T> {
    pub selected: Vec<T>,
    pub slots_per_page: usize,
    pub page_count: usize,
}

impl<T: Clone> AssignmentPlan<T> {
    /// Build a plan for a sheet holding `capacity` labels.
    ///
    /// `slots_per_page` defaults to `capacity` and is clamped to
    /// `[0, capacity]`; `page_count` defaults to 1 and is clamped to
    /// `[1, MAX_PAGES]`.
    pub fn new(
        selected: Vec<T>,
        capacity: usize,
        slots_per_page: Option<usize>,
        page_count: Option<usize>,
    ) -> Self {
        Self {
            selected,
            slots_per_page: clamp_slots_per_page(slots_per_page, capacity),
            page_count: clamp_page_count(page_count),
        }
    }

    pub fn total_slots(&self) -> usize {
        self.page_count * self.slots_per_page
    }

    /// Product for every slot in the run, or nothing when no product is selected
    pub fn assignment(&self) -> Vec<T> {
        assign_cyclic(&self.selected, self.total_slots())
    }

    /// Range of the flat assignment owned by `page`
    pub fn page_range(&self, page: usize) -> Range<usize> {
        page * self.slots_per_page..(page + 1) * self.slots_per_page
    }
}

/// Repeat `items` in order until `total` entries are produced.
///
/// Entry `i` is `items[i % items.len()]`. Returns an empty vector when
/// `items` is empty.
pub fn assign_cyclic<T: Clone>(items: &[T], total: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    items.iter().cycle().take(total).cloned().collect()
}

/// Clamp a labels-per-page request to `[0, capacity]`, defaulting to `capacity`
pub fn clamp_slots_per_page(requested: Option<usize>, capacity: usize) -> usize {
    requested.map_or(capacity, |n| n.min(capacity))
}

/// Clamp a page count request to `[1, MAX_PAGES]`, defaulting to 1
pub fn clamp_page_count(requested: Option<usize>) -> usize {
    requested.unwrap_or(1).clamp(1, MAX_PAGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_wraps() {
        let assignment = assign_cyclic(&["a", "b", "c"], 7);
        assert_eq!(assignment, vec!["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_cyclic_shorter_than_items() {
        assert_eq!(assign_cyclic(&[1, 2, 3, 4], 2), vec![1, 2]);
    }

    #[test]
    fn test_cyclic_empty_items() {
        let empty: [u8; 0] = [];
        assert!(assign_cyclic(&empty, 10).is_empty());
    }

    #[test]
    fn test_defaults() {
        let plan = AssignmentPlan::new(vec!["p"], 65, None, None);
        assert_eq!(plan.slots_per_page, 65);
        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.total_slots(), 65);
    }

    #[test]
    fn test_clamping() {
        let plan = AssignmentPlan::new(vec!["p"], 30, Some(31), Some(0));
        assert_eq!(plan.slots_per_page, 30);
        assert_eq!(plan.page_count, 1);

        let plan = AssignmentPlan::new(vec!["p"], 30, Some(0), Some(500));
        assert_eq!(plan.slots_per_page, 0);
        assert_eq!(plan.page_count, MAX_PAGES);
        assert_eq!(plan.total_slots(), 0);
    }

    #[test]
    fn test_assignment_length_matches_total() {
        let plan = AssignmentPlan::new(vec![1, 2, 3], 10, Some(7), Some(4));
        assert_eq!(plan.assignment().len(), plan.total_slots());
    }

    #[test]
    fn test_page_range() {
        let plan = AssignmentPlan::new(vec![1], 10, Some(10), Some(3));
        assert_eq!(plan.page_range(0), 0..10);
        assert_eq!(plan.page_range(2), 20..30);
    }
}
