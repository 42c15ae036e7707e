//! The label sheet template record

use serde::{Deserialize, Serialize};

use crate::layout::types::PageFormat;

/// One physical label sheet: page, margins, grid, label size and spacing.
///
/// All lengths are inches. A template is never mutated once it is in a
/// catalog; edits produce a new template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,

    pub columns: u32,
    pub rows: u32,

    pub label_width: f64,
    pub label_height: f64,

    pub page_width: f64,
    pub page_height: f64,

    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub margin_bottom: f64,
    #[serde(default)]
    pub margin_left: f64,
    #[serde(default)]
    pub margin_right: f64,

    #[serde(default)]
    pub gap_horizontal: f64,
    #[serde(default)]
    pub gap_vertical: f64,

    /// Distance between successive label origins. Takes precedence over gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_pitch: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_pitch: Option<f64>,
}

impl LabelTemplate {
    /// Create a template with an A4 page, no margins, no gaps and 1 x 1 in labels
    pub fn new(id: impl Into<String>, name: impl Into<String>, columns: u32, rows: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            columns,
            rows,
            label_width: 1.0,
            label_height: 1.0,
            page_width: PageFormat::A4.width,
            page_height: PageFormat::A4.height,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            gap_horizontal: 0.0,
            gap_vertical: 0.0,
            horizontal_pitch: None,
            vertical_pitch: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_label_size(mut self, width: f64, height: f64) -> Self {
        self.label_width = width;
        self.label_height = height;
        self
    }

    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_page_format(self, format: PageFormat) -> Self {
        self.with_page_size(format.width, format.height)
    }

    /// Set margins in CSS order: top, right, bottom, left
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    pub fn with_gaps(mut self, horizontal: f64, vertical: f64) -> Self {
        self.gap_horizontal = horizontal;
        self.gap_vertical = vertical;
        self
    }

    pub fn with_pitch(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_pitch = Some(horizontal);
        self.vertical_pitch = Some(vertical);
        self
    }

    /// Maximum number of labels on one page
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Effective pitch when at least one pitch value is declared.
    ///
    /// A missing axis falls back to `label + gap` on that axis.
    pub fn pitch(&self) -> Option<(f64, f64)> {
        if self.horizontal_pitch.is_none() && self.vertical_pitch.is_none() {
            return None;
        }
        Some((
            self.horizontal_pitch
                .unwrap_or(self.label_width + self.gap_horizontal),
            self.vertical_pitch
                .unwrap_or(self.label_height + self.gap_vertical),
        ))
    }

    /// Page size as a format value
    pub fn page_format(&self) -> PageFormat {
        PageFormat::new(self.page_width, self.page_height)
    }
}
