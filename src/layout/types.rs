//! Core geometry types for the layout engine
//!
//! All lengths in this module are inches unless a type says otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Centimetres per inch, used when converting user-entered template values
pub const CM_PER_INCH: f64 = 2.54;

/// Convert centimetres to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert millimetres to inches
pub fn mm_to_in(mm: f64) -> f64 {
    mm / (CM_PER_INCH * 10.0)
}

/// An axis-aligned rectangle. Units depend on context (inches or pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Multiply every component by `factor`
    pub fn scale(&self, factor: f64) -> Rect {
        Rect::new(
            self.left * factor,
            self.top * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Move the rectangle by `(dx, dy)`
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Largest absolute component-wise difference to another rectangle
    pub fn max_deviation(&self, other: &Rect) -> f64 {
        (self.left - other.left)
            .abs()
            .max((self.top - other.top).abs())
            .max((self.width - other.width).abs())
            .max((self.height - other.height).abs())
    }
}

/// A physical page size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
}

impl PageFormat {
    /// ISO A4, 210 x 297 mm
    pub const A4: PageFormat = PageFormat {
        width: 210.0 / 25.4,
        height: 297.0 / 25.4,
    };

    /// US Letter, 8.5 x 11 in
    pub const LETTER: PageFormat = PageFormat {
        width: 8.5,
        height: 11.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a declared page size is this format within `epsilon` on both axes
    pub fn matches(&self, width: f64, height: f64, epsilon: f64) -> bool {
        (self.width - width).abs() <= epsilon && (self.height - height).abs() <= epsilon
    }
}

/// A grid position on a label sheet. Row 0 is the top row, col 0 the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this position in a grid `columns` wide
    pub fn linear_index(&self, columns: usize) -> usize {
        self.row * columns + self.col
    }

    /// Stable identifier for styling rules, `"{row}-{col}"`
    pub fn slot_id(&self) -> SlotId {
        SlotId {
            row: self.row,
            col: self.col,
        }
    }
}

/// Identifier of a physical slot, independent of page and product.
///
/// Displays and serializes as `"{row}-{col}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl Serialize for SlotId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Geometry of one slot on one template, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelSlot {
    pub row: usize,
    pub col: usize,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelSlot {
    pub fn new(pos: GridPos, rect: Rect) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    pub fn id(&self) -> SlotId {
        self.pos().slot_id()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}
