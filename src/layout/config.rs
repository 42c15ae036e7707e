//! Configuration for the layout engine

use super::types::PageFormat;

/// Configuration options for slot positioning
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Output page format the print pipeline always produces.
    ///
    /// Pitch templates whose page matches this format are stretched to fill
    /// it exactly between the template margins. `None` disables that policy.
    pub fixed_output: Option<PageFormat>,

    /// Tolerance in inches when matching a template page against `fixed_output`
    pub format_epsilon: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fixed_output: Some(PageFormat::A4),
            format_epsilon: 0.01,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed output format
    pub fn with_fixed_output(mut self, format: PageFormat) -> Self {
        self.fixed_output = Some(format);
        self
    }

    /// Disable the fixed output policy; pitch templates are placed unscaled
    pub fn without_fixed_output(mut self) -> Self {
        self.fixed_output = None;
        self
    }

    /// Set the page size matching tolerance
    pub fn with_format_epsilon(mut self, epsilon: f64) -> Self {
        self.format_epsilon = epsilon;
        self
    }
}
