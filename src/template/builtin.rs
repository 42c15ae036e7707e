//! Built-in label sheet templates
//!
//! Dimensions are taken from the manufacturers' published sheet layouts and
//! entered in the unit the manufacturer uses (mm for A4 stock, inches for
//! Letter stock).

use crate::layout::types::{mm_to_in, PageFormat};

use super::LabelTemplate;

/// All built-in templates, in catalog order
pub fn builtin_templates() -> Vec<LabelTemplate> {
    vec![
        a4_65_up(),
        a4_21_up(),
        a4_14_up(),
        letter_30_up(),
        letter_10_up(),
        a4_24_up_gap(),
    ]
}

/// 65 labels per A4 sheet, 38.1 x 21.2 mm (L7651 layout)
fn a4_65_up() -> LabelTemplate {
    LabelTemplate::new("a4-65", "A4 65-up", 5, 13)
        .with_description("38.1 x 21.2 mm mini labels, 5 x 13")
        .with_page_format(PageFormat::A4)
        .with_label_size(mm_to_in(38.1), mm_to_in(21.2))
        .with_margins(mm_to_in(10.7), mm_to_in(4.7), mm_to_in(10.7), mm_to_in(4.7))
        .with_gaps(mm_to_in(2.5), 0.0)
        .with_pitch(mm_to_in(40.6), mm_to_in(21.2))
}

/// 21 labels per A4 sheet, 63.5 x 38.1 mm (L7160 layout)
fn a4_21_up() -> LabelTemplate {
    LabelTemplate::new("a4-21", "A4 21-up", 3, 7)
        .with_description("63.5 x 38.1 mm address labels, 3 x 7")
        .with_page_format(PageFormat::A4)
        .with_label_size(mm_to_in(63.5), mm_to_in(38.1))
        .with_margins(mm_to_in(15.15), mm_to_in(7.2), mm_to_in(15.15), mm_to_in(7.2))
        .with_gaps(mm_to_in(2.54), 0.0)
        .with_pitch(mm_to_in(66.04), mm_to_in(38.1))
}

/// 14 labels per A4 sheet, 99.1 x 38.1 mm (L7163 layout)
fn a4_14_up() -> LabelTemplate {
    LabelTemplate::new("a4-14", "A4 14-up", 2, 7)
        .with_description("99.1 x 38.1 mm parcel labels, 2 x 7")
        .with_page_format(PageFormat::A4)
        .with_label_size(mm_to_in(99.1), mm_to_in(38.1))
        .with_margins(mm_to_in(15.15), mm_to_in(4.65), mm_to_in(15.15), mm_to_in(4.65))
        .with_gaps(mm_to_in(2.5), 0.0)
        .with_pitch(mm_to_in(101.6), mm_to_in(38.1))
}

/// 30 labels per Letter sheet, 2.625 x 1 in (5160 layout)
fn letter_30_up() -> LabelTemplate {
    LabelTemplate::new("letter-30", "Letter 30-up", 3, 10)
        .with_description("2 5/8 x 1 in address labels, 3 x 10")
        .with_page_format(PageFormat::LETTER)
        .with_label_size(2.625, 1.0)
        .with_margins(0.5, 0.1875, 0.5, 0.1875)
        .with_gaps(0.125, 0.0)
        .with_pitch(2.75, 1.0)
}

/// 10 labels per Letter sheet, 4 x 2 in (5163 layout)
fn letter_10_up() -> LabelTemplate {
    LabelTemplate::new("letter-10", "Letter 10-up", 2, 5)
        .with_description("4 x 2 in shipping labels, 2 x 5")
        .with_page_format(PageFormat::LETTER)
        .with_label_size(4.0, 2.0)
        .with_margins(0.5, 0.15625, 0.5, 0.15625)
        .with_gaps(0.1875, 0.0)
        .with_pitch(4.1875, 2.0)
}

/// Generic 24-up A4 sheet described by gaps only
fn a4_24_up_gap() -> LabelTemplate {
    LabelTemplate::new("a4-24-gap", "A4 24-up (gap layout)", 3, 8)
        .with_description("64 x 33.8 mm labels positioned from margins and gaps")
        .with_page_format(PageFormat::A4)
        .with_label_size(mm_to_in(64.0), mm_to_in(33.8))
        .with_margins(mm_to_in(13.0), mm_to_in(6.0), mm_to_in(13.0), mm_to_in(6.0))
        .with_gaps(mm_to_in(3.0), 0.0)
}
