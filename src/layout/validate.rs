//! Template repair before layout
//!
//! Layout must always produce something to preview, so malformed templates are
//! clamped to the nearest safe shape instead of rejected. Every repair is
//! reported as a [`Diagnostic`].

use crate::diagnostics::{Diagnostic, DiagnosticCategory};
use crate::template::LabelTemplate;

/// Pitch shortfalls smaller than this are float noise from unit conversion
const PITCH_TOLERANCE: f64 = 1e-9;

/// Return a copy of `template` that satisfies every layout precondition,
/// plus one diagnostic per repaired field.
pub fn sanitize(template: &LabelTemplate) -> (LabelTemplate, Vec<Diagnostic>) {
    let mut t = template.clone();
    let mut diagnostics = Vec::new();

    for (field, value) in [
        ("label_width", &mut t.label_width),
        ("label_height", &mut t.label_height),
        ("page_width", &mut t.page_width),
        ("page_height", &mut t.page_height),
        ("margin_top", &mut t.margin_top),
        ("margin_bottom", &mut t.margin_bottom),
        ("margin_left", &mut t.margin_left),
        ("margin_right", &mut t.margin_right),
        ("gap_horizontal", &mut t.gap_horizontal),
        ("gap_vertical", &mut t.gap_vertical),
    ] {
        if !value.is_finite() || *value < 0.0 {
            diagnostics.push(Diagnostic::warning(
                DiagnosticCategory::Dimension,
                format!(
                    "template '{}': {} = {} is not a valid length, using 0",
                    template.id, field, value
                ),
            ));
            *value = 0.0;
        }
    }

    if t.columns == 0 {
        diagnostics.push(Diagnostic::warning(
            DiagnosticCategory::Grid,
            format!("template '{}': columns = 0, using 1", template.id),
        ));
        t.columns = 1;
    }
    if t.rows == 0 {
        diagnostics.push(Diagnostic::warning(
            DiagnosticCategory::Grid,
            format!("template '{}': rows = 0, using 1", template.id),
        ));
        t.rows = 1;
    }

    if let Some(hp) = t.horizontal_pitch {
        if !hp.is_finite() || hp + PITCH_TOLERANCE < t.label_width {
            diagnostics.push(Diagnostic::warning(
                DiagnosticCategory::Pitch,
                format!(
                    "template '{}': horizontal pitch {} is smaller than label width {}, using label width",
                    template.id, hp, t.label_width
                ),
            ));
            t.horizontal_pitch = Some(t.label_width);
        }
    }
    if let Some(vp) = t.vertical_pitch {
        if !vp.is_finite() || vp + PITCH_TOLERANCE < t.label_height {
            diagnostics.push(Diagnostic::warning(
                DiagnosticCategory::Pitch,
                format!(
                    "template '{}': vertical pitch {} is smaller than label height {}, using label height",
                    template.id, vp, t.label_height
                ),
            ));
            t.vertical_pitch = Some(t.label_height);
        }
    }

    (t, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LabelTemplate {
        LabelTemplate::new("ok", "OK", 3, 10)
            .with_page_size(8.5, 11.0)
            .with_label_size(2.625, 1.0)
            .with_margins(0.5, 0.1875, 0.5, 0.1875)
            .with_pitch(2.75, 1.0)
    }

    #[test]
    fn test_valid_template_untouched() {
        let (t, diagnostics) = sanitize(&valid());
        assert_eq!(t, valid());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_zero_grid_clamped_to_one() {
        let mut bad = valid();
        bad.columns = 0;
        bad.rows = 0;
        let (t, diagnostics) = sanitize(&bad);
        assert_eq!((t.columns, t.rows), (1, 1));
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.category == DiagnosticCategory::Grid && d.is_warning()));
    }

    #[test]
    fn test_short_pitch_raised_to_label() {
        let bad = valid().with_pitch(2.0, 0.5);
        let (t, diagnostics) = sanitize(&bad);
        assert_eq!(t.horizontal_pitch, Some(2.625));
        assert_eq!(t.vertical_pitch, Some(1.0));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].category, DiagnosticCategory::Pitch);
    }

    #[test]
    fn test_pitch_equal_to_label_accepted() {
        let ok = valid().with_pitch(2.625, 1.0);
        let (_, diagnostics) = sanitize(&ok);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_negative_and_nan_lengths_zeroed() {
        let mut bad = valid();
        bad.margin_left = -0.5;
        bad.gap_vertical = f64::NAN;
        let (t, diagnostics) = sanitize(&bad);
        assert_eq!(t.margin_left, 0.0);
        assert_eq!(t.gap_vertical, 0.0);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.category == DiagnosticCategory::Dimension));
    }

    #[test]
    fn test_identity_preserved() {
        let mut bad = valid();
        bad.rows = 0;
        let (t, _) = sanitize(&bad);
        assert_eq!(t.id, "ok");
        assert_eq!(t.name, "OK");
    }
}
